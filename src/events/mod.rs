pub mod controls;
pub mod pointer;

pub use controls::{wire_angle_button, wire_resize};
pub use pointer::wire_joystick;
