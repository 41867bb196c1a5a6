//! Session state of the control panel.
//!
//! One `PanelController` exists per page session. Front-ends feed it input
//! and socket events; it decides what to transmit over its [`Link`] and what
//! to show through its [`View`].

use crate::angle::MaxAngle;
use crate::connection::ConnectionState;
use crate::constants::{
    MSG_ANGLE_NOT_CONNECTED, MSG_CONNECTION_LOST, MSG_INVALID_ANGLE, MSG_JOYSTICK_NOT_CONNECTED,
    RECONNECT_DELAY_MS,
};
use crate::error::{PanelError, SendError};
use crate::joystick::{JoystickBase, MappedPosition};
use crate::link::Link;
use crate::protocol::Command;
use crate::view::View;
use glam::DVec2;

pub struct PanelController<L, V> {
    link: L,
    view: V,
    state: ConnectionState,
    base: JoystickBase,
    dragging: bool,
    last_sent: MappedPosition,
    angle: Option<MaxAngle>,
}

impl<L: Link, V: View> PanelController<L, V> {
    pub fn new(link: L, view: V) -> Self {
        Self {
            link,
            view,
            state: ConnectionState::default(),
            base: JoystickBase::default(),
            dragging: false,
            last_sent: MappedPosition::CENTER,
            angle: None,
        }
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn base(&self) -> JoystickBase {
        self.base
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn last_sent(&self) -> MappedPosition {
        self.last_sent
    }

    /// Last angle confirmed on screen, if any.
    pub fn angle(&self) -> Option<MaxAngle> {
        self.angle
    }

    // ---------------- Connection lifecycle ----------------

    pub fn on_connecting(&mut self, url: &str) {
        log::info!("[ws] connecting to {}", url);
        self.set_state(ConnectionState::Connecting);
        self.view.hide_error();
    }

    pub fn on_open(&mut self) {
        log::info!("[ws] connected");
        self.set_state(ConnectionState::Connected);
        self.view.hide_error();
    }

    pub fn on_message(&mut self, text: &str) {
        log::info!("[ws] message from device: {}", text);
    }

    /// Socket errors are followed by a close; that is where the operator
    /// gets told.
    pub fn on_error(&mut self, detail: &str) {
        log::error!("[ws] socket error: {}", detail);
    }

    /// Returns the delay in milliseconds before the next connection attempt.
    pub fn on_close(&mut self, code: u16, reason: &str) -> u32 {
        log::info!(
            "[ws] closed code={} reason={:?}; retrying in {} ms",
            code,
            reason,
            RECONNECT_DELAY_MS
        );
        self.set_state(ConnectionState::Disconnected);
        self.view.show_error(MSG_CONNECTION_LOST);
        RECONNECT_DELAY_MS
    }

    fn set_state(&mut self, state: ConnectionState) {
        self.state = state;
        self.view.show_status(state);
    }

    // ---------------- Joystick ----------------

    /// Re-measure the drag boundary (load and every window resize).
    pub fn resize(&mut self, base: JoystickBase) {
        log::debug!(
            "[joystick] base center=({:.1},{:.1}) radius={:.1}",
            base.center.x,
            base.center.y,
            base.radius
        );
        self.base = base;
    }

    pub fn drag_start(&mut self) {
        self.dragging = true;
        self.view.grab_handle();
    }

    /// Follow the pointer at client position `point`. Returns whether the
    /// event belonged to a drag, so the caller can suppress scrolling.
    pub fn drag_move(&mut self, point: DVec2) -> bool {
        if !self.dragging {
            return false;
        }
        let sample = self.base.track(point);
        self.view.move_handle(self.base.handle_px(sample.offset));
        self.view.show_position(sample.position);
        self.send_position(sample.position, false);
        true
    }

    /// Releases outside of a drag are ignored.
    pub fn drag_end(&mut self) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        self.view.release_handle();
        self.view.show_position(MappedPosition::CENTER);
        self.send_position(MappedPosition::CENTER, true);
    }

    fn send_position(&mut self, position: MappedPosition, force: bool) {
        if !self.link.is_open() {
            log::warn!("[joystick] not connected, dropping ({}, {})", position.x, position.y);
            self.view.show_error(MSG_JOYSTICK_NOT_CONNECTED);
            return;
        }
        if !force && position == self.last_sent {
            return;
        }
        match self.transmit(Command::from(position)) {
            Ok(()) => {
                log::debug!("[joystick] sent ({}, {})", position.x, position.y);
                self.last_sent = position;
            }
            Err(e) => log::error!("[joystick] send failed: {}", e),
        }
    }

    // ---------------- Servo angle ----------------

    /// Show the angle field's initial value. Nothing is transmitted.
    pub fn load_angle(&mut self, raw: &str) {
        match raw.parse::<MaxAngle>() {
            Ok(angle) => {
                self.angle = Some(angle);
                self.view.show_angle(angle);
            }
            Err(e) => log::warn!("[angle] ignoring initial value: {}", e),
        }
    }

    /// Validate operator input and send it to the device.
    pub fn set_angle(&mut self, raw: &str) -> Result<MaxAngle, PanelError> {
        let angle = match raw.parse::<MaxAngle>() {
            Ok(a) => a,
            Err(e) => {
                log::warn!("[angle] rejected: {}", e);
                self.view.alert(MSG_INVALID_ANGLE);
                return Err(e.into());
            }
        };
        if !self.link.is_open() {
            log::warn!("[angle] not connected, dropping {}", angle);
            self.view.show_error(MSG_ANGLE_NOT_CONNECTED);
            return Err(SendError::NotConnected.into());
        }
        if let Err(e) = self.transmit(Command::from(angle)) {
            log::error!("[angle] send failed: {}", e);
            return Err(e.into());
        }
        self.angle = Some(angle);
        self.view.show_angle(angle);
        log::info!("[angle] servo max angle set to {}", angle);
        Ok(angle)
    }

    fn transmit(&mut self, command: Command) -> Result<(), SendError> {
        let text = command.to_json()?;
        self.link.send_text(&text)
    }
}
