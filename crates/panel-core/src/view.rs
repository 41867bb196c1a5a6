use crate::angle::MaxAngle;
use crate::connection::ConnectionState;
use crate::joystick::MappedPosition;
use glam::DVec2;

/// Everything the controller can change on screen.
pub trait View {
    fn show_status(&mut self, state: ConnectionState);

    /// Make the error banner visible with `message`.
    fn show_error(&mut self, message: &str);
    fn hide_error(&mut self);

    /// Coordinate readouts.
    fn show_position(&mut self, position: MappedPosition);

    /// Start following the pointer: handle animation off.
    fn grab_handle(&mut self);
    /// Place the handle at `px` (left/top, relative to the base).
    fn move_handle(&mut self, px: DVec2);
    /// Animate the handle back to the middle of the base.
    fn release_handle(&mut self);

    fn show_angle(&mut self, angle: MaxAngle);

    /// Blocking notice for rejected operator input.
    fn alert(&mut self, message: &str);
}
