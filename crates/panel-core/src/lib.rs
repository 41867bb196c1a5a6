pub mod angle;
pub mod connection;
pub mod constants;
pub mod controller;
pub mod error;
pub mod joystick;
pub mod link;
pub mod protocol;
pub mod view;

pub use angle::*;
pub use connection::*;
pub use controller::*;
pub use error::*;
pub use joystick::*;
pub use link::*;
pub use protocol::*;
pub use view::*;
