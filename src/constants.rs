// DOM contract for the control page. Element ids must match index.html.

// Connection status
pub const ID_STATUS_TEXT: &str = "connection-status-text";
pub const ID_STATUS_DISPLAY: &str = "status-display";
pub const ID_ERROR_MESSAGE: &str = "error-message";

// Joystick
pub const ID_JOYSTICK_BASE: &str = "joystick-base";
pub const ID_JOYSTICK_HANDLE: &str = "joystick-handle";
pub const ID_JOYSTICK_X: &str = "joystick-x";
pub const ID_JOYSTICK_Y: &str = "joystick-y";

// Servo angle
pub const ID_ANGLE_INPUT: &str = "servo-max-angle-input";
pub const ID_ANGLE_BUTTON: &str = "set-angle-button";
pub const ID_ANGLE_READOUT: &str = "current-max-angle";

pub const ALL_ELEMENT_IDS: [&str; 10] = [
    ID_STATUS_TEXT,
    ID_STATUS_DISPLAY,
    ID_ERROR_MESSAGE,
    ID_JOYSTICK_BASE,
    ID_JOYSTICK_HANDLE,
    ID_JOYSTICK_X,
    ID_JOYSTICK_Y,
    ID_ANGLE_INPUT,
    ID_ANGLE_BUTTON,
    ID_ANGLE_READOUT,
];

// Error banner
pub const CLASS_ERROR_VISIBLE: &str = "error-visible";
pub const CLASS_ERROR_HIDDEN: &str = "error-hidden";
pub const ERROR_PREFIX: &str = "Error: ";

// Handle animation: off while following the pointer, eased when snapping back
pub const HANDLE_TRANSITION_DRAG: &str = "none";
pub const HANDLE_TRANSITION_RELEASE: &str = "transform 0.2s ease-out";
pub const HANDLE_REST_POSITION: &str = "50%";
