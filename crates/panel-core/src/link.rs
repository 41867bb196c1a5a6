use crate::error::SendError;

/// Outbound half of the device connection.
///
/// Implemented over a browser `WebSocket` by the web front-end and by
/// in-memory recorders in tests.
pub trait Link {
    /// True only while frames can be written.
    fn is_open(&self) -> bool;

    fn send_text(&mut self, text: &str) -> Result<(), SendError>;
}
