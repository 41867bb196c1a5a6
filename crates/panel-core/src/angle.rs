use crate::constants::{ANGLE_MAX, ANGLE_MIN};
use crate::error::AngleError;
use std::fmt;
use std::str::FromStr;

/// Servo maximum angle in degrees, always within `ANGLE_MIN..=ANGLE_MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaxAngle(u8);

impl MaxAngle {
    pub fn new(degrees: i64) -> Result<Self, AngleError> {
        if (ANGLE_MIN..=ANGLE_MAX).contains(&degrees) {
            Ok(Self(degrees as u8))
        } else {
            Err(AngleError::OutOfRange(degrees))
        }
    }

    #[inline]
    pub fn degrees(self) -> u8 {
        self.0
    }
}

impl fmt::Display for MaxAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lenient parse matching what an HTML number field hands over: leading
/// whitespace and a sign are accepted, anything after the leading digits is
/// ignored (`"90deg"` is 90, `"12.7"` is 12).
impl FromStr for MaxAngle {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let degrees = parse_leading_int(s).ok_or_else(|| AngleError::NotANumber(s.to_owned()))?;
        Self::new(degrees)
    }
}

/// Parse the leading decimal integer of `input`, saturating on overflow.
/// Returns `None` when no digit follows the optional sign.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    seen.then_some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_stops_at_first_non_digit() {
        assert_eq!(parse_leading_int("  42abc"), Some(42));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("-0"), Some(0));
        assert_eq!(parse_leading_int("3.9"), Some(3));
    }

    #[test]
    fn leading_int_requires_a_digit() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(".5"), None);
    }

    #[test]
    fn leading_int_saturates() {
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }
}
