use crate::constants::DEVICE_WS_PORT;

/// Lifecycle of the device socket as shown to the operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Connecting,
    Connected,
    Disconnected,
}

impl ConnectionState {
    pub fn status_text(self) -> &'static str {
        match self {
            ConnectionState::Connecting => "Connecting...",
            ConnectionState::Connected => "Connected",
            ConnectionState::Disconnected => "Disconnected",
        }
    }

    /// CSS class applied to the status container.
    pub fn css_class(self) -> &'static str {
        match self {
            ConnectionState::Connecting => "status-connecting",
            ConnectionState::Connected => "status-connected",
            ConnectionState::Disconnected => "status-disconnected",
        }
    }

    #[inline]
    pub fn is_connected(self) -> bool {
        self == ConnectionState::Connected
    }
}

/// Device socket address for the host that served the page.
pub fn device_ws_url(host: &str) -> String {
    format!("ws://{}:{}", host, DEVICE_WS_PORT)
}
