//! JSON text frames understood by the device.
//!
//! ```text
//! {"type":"joystick","x":-42,"y":100}
//! {"type":"angle","value":90}
//! ```

use crate::angle::MaxAngle;
use crate::joystick::MappedPosition;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Command {
    Joystick { x: i32, y: i32 },
    Angle { value: u8 },
}

impl Command {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<MappedPosition> for Command {
    fn from(p: MappedPosition) -> Self {
        Command::Joystick { x: p.x, y: p.y }
    }
}

impl From<MaxAngle> for Command {
    fn from(a: MaxAngle) -> Self {
        Command::Angle { value: a.degrees() }
    }
}
