use crate::{Panel, WeakPanel};
use panel_core::constants::CLOSE_ABNORMAL;
use panel_core::{Link, SendError};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handler closures owned alongside the socket they are attached to, so they
/// are released together when a reconnect replaces the socket.
struct SocketHandlers {
    _on_open: Closure<dyn FnMut()>,
    _on_message: Closure<dyn FnMut(web::MessageEvent)>,
    _on_error: Closure<dyn FnMut(web::Event)>,
    _on_close: Closure<dyn FnMut(web::CloseEvent)>,
}

/// [`Link`] over the browser `WebSocket`. Holds at most one socket.
#[derive(Default)]
pub struct SocketLink {
    socket: Option<web::WebSocket>,
    handlers: Option<SocketHandlers>,
}

impl SocketLink {
    fn attach(&mut self, socket: web::WebSocket, handlers: SocketHandlers) {
        self.detach();
        self.socket = Some(socket);
        self.handlers = Some(handlers);
    }

    // Unhook before dropping the closures so a stale socket can never call
    // into freed handlers.
    fn detach(&mut self) {
        if let Some(old) = self.socket.take() {
            old.set_onopen(None);
            old.set_onmessage(None);
            old.set_onerror(None);
            old.set_onclose(None);
            if old.ready_state() == web::WebSocket::OPEN {
                _ = old.close();
            }
        }
        self.handlers = None;
    }
}

impl Link for SocketLink {
    fn is_open(&self) -> bool {
        self.socket
            .as_ref()
            .is_some_and(|s| s.ready_state() == web::WebSocket::OPEN)
    }

    fn send_text(&mut self, text: &str) -> Result<(), SendError> {
        let socket = self.socket.as_ref().ok_or(SendError::NotConnected)?;
        socket
            .send_with_str(text)
            .map_err(|e| SendError::Transport(format!("{:?}", e)))
    }
}

/// Open a socket to `url` and route its events into the panel. Every close
/// re-arms a one-shot timer that calls back in here.
pub fn connect(panel: &Panel, url: &Rc<str>) {
    panel.borrow_mut().on_connecting(url);

    let socket = match web::WebSocket::new(url) {
        Ok(s) => s,
        Err(e) => {
            log::error!("[ws] could not create socket: {:?}", e);
            let delay_ms = panel
                .borrow_mut()
                .on_close(CLOSE_ABNORMAL, "socket construction failed");
            schedule_reconnect(Rc::downgrade(panel), url.clone(), delay_ms);
            return;
        }
    };

    let handlers = wire_handlers(&socket, Rc::downgrade(panel), url);
    panel.borrow_mut().link_mut().attach(socket, handlers);
}

fn wire_handlers(socket: &web::WebSocket, panel: WeakPanel, url: &Rc<str>) -> SocketHandlers {
    let p = panel.clone();
    let on_open = Closure::wrap(Box::new(move || {
        if let Some(panel) = p.upgrade() {
            panel.borrow_mut().on_open();
        }
    }) as Box<dyn FnMut()>);
    socket.set_onopen(Some(on_open.as_ref().unchecked_ref()));

    let p = panel.clone();
    let on_message = Closure::wrap(Box::new(move |ev: web::MessageEvent| {
        let Some(panel) = p.upgrade() else { return };
        match ev.data().as_string() {
            Some(text) => panel.borrow_mut().on_message(&text),
            None => log::debug!("[ws] ignoring non-text frame"),
        }
    }) as Box<dyn FnMut(_)>);
    socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

    let p = panel.clone();
    let on_error = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Some(panel) = p.upgrade() {
            panel.borrow_mut().on_error(&ev.type_());
        }
    }) as Box<dyn FnMut(_)>);
    socket.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    let p = panel;
    let url = url.clone();
    let on_close = Closure::wrap(Box::new(move |ev: web::CloseEvent| {
        let Some(panel) = p.upgrade() else { return };
        let delay_ms = panel.borrow_mut().on_close(ev.code(), &ev.reason());
        schedule_reconnect(p.clone(), url.clone(), delay_ms);
    }) as Box<dyn FnMut(_)>);
    socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));

    SocketHandlers {
        _on_open: on_open,
        _on_message: on_message,
        _on_error: on_error,
        _on_close: on_close,
    }
}

fn schedule_reconnect(panel: WeakPanel, url: Rc<str>, delay_ms: u32) {
    let Some(window) = web::window() else {
        log::error!("[ws] no window, cannot schedule reconnect");
        return;
    };
    // One-shot: the JS function frees the closure after it runs.
    let retry = Closure::once_into_js(move || {
        if let Some(panel) = panel.upgrade() {
            connect(&panel, &url);
        }
    });
    let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(retry.unchecked_ref(), timeout)
    {
        log::error!("[ws] failed to schedule reconnect: {:?}", e);
    }
}
