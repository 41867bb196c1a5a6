// Device and operator-facing constants shared by every front-end.

// Device endpoint
pub const DEVICE_WS_PORT: u16 = 81; // WebSocket server port on the device
pub const RECONNECT_DELAY_MS: u32 = 5_000; // wait after a close before dialing again

// Joystick output is [-AXIS_RANGE, AXIS_RANGE] on both axes
pub const AXIS_RANGE: i32 = 100;

// Servo max angle bounds in degrees, inclusive
pub const ANGLE_MIN: i64 = 0;
pub const ANGLE_MAX: i64 = 180;

// Operator-facing messages
pub const MSG_CONNECTION_LOST: &str =
    "Connection to the device was lost. Check that the device is running; reconnecting automatically.";
pub const MSG_JOYSTICK_NOT_CONNECTED: &str =
    "WebSocket is not connected; joystick data was not sent.";
pub const MSG_ANGLE_NOT_CONNECTED: &str = "WebSocket is not connected; the angle was not set.";
pub const MSG_INVALID_ANGLE: &str = "Please enter a valid angle between 0 and 180.";

// Close code reported when the socket could not even be constructed
pub const CLOSE_ABNORMAL: u16 = 1006;
