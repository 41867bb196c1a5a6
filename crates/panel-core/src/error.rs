//! Error types for the panel core, built on `thiserror`.

use crate::constants::{ANGLE_MAX, ANGLE_MIN};
use thiserror::Error;

/// Rejected operator input for the servo max angle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AngleError {
    #[error("angle input {0:?} is not a number")]
    NotANumber(String),

    #[error("angle {0} is outside {min}..={max}", min = ANGLE_MIN, max = ANGLE_MAX)]
    OutOfRange(i64),
}

/// Failure to hand a command to the device link.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("socket is not connected")]
    NotConnected,

    #[error("failed to encode command: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Anything an operator action can fail with.
#[derive(Debug, Error)]
pub enum PanelError {
    #[error(transparent)]
    Angle(#[from] AngleError),

    #[error(transparent)]
    Send(#[from] SendError),
}
