use crate::constants::{
    CLASS_ERROR_HIDDEN, CLASS_ERROR_VISIBLE, ERROR_PREFIX, HANDLE_REST_POSITION,
    HANDLE_TRANSITION_DRAG, HANDLE_TRANSITION_RELEASE,
};
use crate::dom::PanelElements;
use glam::DVec2;
use panel_core::{ConnectionState, MappedPosition, MaxAngle, View};
use web_sys as web;

/// [`View`] over the live page.
pub struct DomView {
    window: web::Window,
    status_text: web::Element,
    status_display: web::Element,
    error_message: web::Element,
    handle: web::HtmlElement,
    readout_x: web::Element,
    readout_y: web::Element,
    angle_readout: web::Element,
}

impl DomView {
    pub fn new(window: web::Window, elements: &PanelElements) -> Self {
        Self {
            window,
            status_text: elements.status_text.clone(),
            status_display: elements.status_display.clone(),
            error_message: elements.error_message.clone(),
            handle: elements.joystick_handle.clone(),
            readout_x: elements.joystick_x.clone(),
            readout_y: elements.joystick_y.clone(),
            angle_readout: elements.angle_readout.clone(),
        }
    }

    fn set_handle_style(&self, name: &str, value: &str) {
        if let Err(e) = self.handle.style().set_property(name, value) {
            log::warn!("[view] handle style {}={}: {:?}", name, value, e);
        }
    }
}

impl View for DomView {
    fn show_status(&mut self, state: ConnectionState) {
        self.status_text.set_text_content(Some(state.status_text()));
        self.status_display.set_class_name(state.css_class());
    }

    fn show_error(&mut self, message: &str) {
        let text = format!("{}{}", ERROR_PREFIX, message);
        self.error_message.set_text_content(Some(&text));
        self.error_message.set_class_name(CLASS_ERROR_VISIBLE);
    }

    fn hide_error(&mut self) {
        self.error_message.set_class_name(CLASS_ERROR_HIDDEN);
    }

    fn show_position(&mut self, position: MappedPosition) {
        self.readout_x.set_text_content(Some(&position.x.to_string()));
        self.readout_y.set_text_content(Some(&position.y.to_string()));
    }

    fn grab_handle(&mut self) {
        self.set_handle_style("transition", HANDLE_TRANSITION_DRAG);
    }

    fn move_handle(&mut self, px: DVec2) {
        self.set_handle_style("left", &format!("{}px", px.x));
        self.set_handle_style("top", &format!("{}px", px.y));
    }

    fn release_handle(&mut self) {
        self.set_handle_style("transition", HANDLE_TRANSITION_RELEASE);
        self.set_handle_style("left", HANDLE_REST_POSITION);
        self.set_handle_style("top", HANDLE_REST_POSITION);
    }

    fn show_angle(&mut self, angle: MaxAngle) {
        self.angle_readout.set_text_content(Some(&angle.to_string()));
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::warn!("[view] alert failed: {:?}", e);
        }
    }
}
