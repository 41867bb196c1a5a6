//! Virtual joystick geometry.
//!
//! The joystick base is a circle in client (CSS pixel) coordinates. A pointer
//! position is turned into an offset from the base center, clamped to the
//! disk, then mapped linearly onto integer axes in
//! `[-AXIS_RANGE, AXIS_RANGE]` with the vertical axis inverted so that "up"
//! is positive.

use crate::constants::AXIS_RANGE;
use glam::DVec2;

/// Normalized joystick position as sent over the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MappedPosition {
    pub x: i32,
    pub y: i32,
}

impl MappedPosition {
    pub const CENTER: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Result of tracking one pointer position against the base.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JoystickSample {
    /// Offset from the base center after clamping to the disk, in px.
    pub offset: DVec2,
    pub position: MappedPosition,
}

/// Circular drag boundary of the joystick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct JoystickBase {
    pub center: DVec2,
    pub radius: f64,
}

impl JoystickBase {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Build the base from an element's bounding rectangle. The radius is
    /// half the width; the element is expected to be square.
    pub fn from_rect(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            center: DVec2::new(left + width / 2.0, top + height / 2.0),
            radius: width / 2.0,
        }
    }

    /// A hidden or collapsed base has no usable radius.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.radius.is_finite() && self.radius > 0.0)
    }

    /// Offset of `point` from the center, rescaled onto the rim when it
    /// falls outside the disk.
    pub fn clamp_offset(&self, point: DVec2) -> DVec2 {
        if self.is_degenerate() {
            return DVec2::ZERO;
        }
        let offset = point - self.center;
        let distance = offset.length();
        if distance > self.radius {
            (offset / distance) * self.radius
        } else {
            offset
        }
    }

    /// Map an already clamped offset onto the output axes.
    pub fn map_offset(&self, offset: DVec2) -> MappedPosition {
        if self.is_degenerate() {
            return MappedPosition::CENTER;
        }
        MappedPosition {
            x: scale_axis(offset.x / self.radius),
            y: scale_axis(-offset.y / self.radius),
        }
    }

    pub fn track(&self, point: DVec2) -> JoystickSample {
        let offset = self.clamp_offset(point);
        JoystickSample {
            offset,
            position: self.map_offset(offset),
        }
    }

    /// Handle `left`/`top` in px, relative to the base's top-left corner.
    #[inline]
    pub fn handle_px(&self, offset: DVec2) -> DVec2 {
        offset + DVec2::splat(self.radius)
    }
}

// Unit fraction -> axis integer, rounding halves toward +inf.
#[inline]
fn scale_axis(fraction: f64) -> i32 {
    let range = AXIS_RANGE as f64;
    round_half_up(fraction * range).clamp(-range, range) as i32
}

#[inline]
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}
