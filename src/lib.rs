#![cfg(target_arch = "wasm32")]
use panel_core::{device_ws_url, PanelController};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod dom;
mod events;
mod socket;
mod view;

use socket::SocketLink;
use view::DomView;

pub(crate) type PanelCell = RefCell<PanelController<SocketLink, DomView>>;
/// Shared handle to the one controller of this page session.
pub(crate) type Panel = Rc<PanelCell>;
pub(crate) type WeakPanel = Weak<PanelCell>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("servo-panel starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    // The base has to be laid out before it can be measured.
    page_loaded(&window).await?;

    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let elements = dom::PanelElements::lookup(&document)?;

    let host = window
        .location()
        .hostname()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let url: Rc<str> = device_ws_url(&host).into();

    let view = DomView::new(window.clone(), &elements);
    let panel: Panel = Rc::new(RefCell::new(PanelController::new(
        SocketLink::default(),
        view,
    )));

    socket::connect(&panel, &url);

    panel
        .borrow_mut()
        .resize(dom::joystick_base(&elements.joystick_base));
    events::wire_joystick(&panel, &elements.joystick_base)?;
    events::wire_resize(&panel, &elements.joystick_base)?;
    events::wire_angle_button(&panel, &document, &elements.angle_input)?;

    panel.borrow_mut().load_angle(&elements.angle_input.value());
    log::info!("[init] panel ready, device at {}", url);
    Ok(())
}

/// Resolves once the window `load` event has fired (immediately if it
/// already has).
async fn page_loaded(window: &web::Window) -> anyhow::Result<()> {
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    if document.ready_state() == "complete" {
        return Ok(());
    }
    let target = window.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let options = web::AddEventListenerOptions::new();
        options.set_once(true);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            "load", &resolve, &options,
        ) {
            log::error!("[init] cannot wait for load: {:?}", e);
        }
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}
