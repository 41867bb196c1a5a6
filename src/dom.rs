use crate::constants::*;
use panel_core::JoystickBase;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Every element the panel touches, looked up once at startup.
pub struct PanelElements {
    pub status_text: web::Element,
    pub status_display: web::Element,
    pub error_message: web::Element,
    pub joystick_base: web::Element,
    pub joystick_handle: web::HtmlElement,
    pub joystick_x: web::Element,
    pub joystick_y: web::Element,
    pub angle_input: web::HtmlInputElement,
    pub angle_readout: web::Element,
}

impl PanelElements {
    pub fn lookup(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            status_text: element(document, ID_STATUS_TEXT)?,
            status_display: element(document, ID_STATUS_DISPLAY)?,
            error_message: element(document, ID_ERROR_MESSAGE)?,
            joystick_base: element(document, ID_JOYSTICK_BASE)?,
            joystick_handle: typed_element(document, ID_JOYSTICK_HANDLE)?,
            joystick_x: element(document, ID_JOYSTICK_X)?,
            joystick_y: element(document, ID_JOYSTICK_Y)?,
            angle_input: typed_element(document, ID_ANGLE_INPUT)?,
            angle_readout: element(document, ID_ANGLE_READOUT)?,
        })
    }
}

#[inline]
pub fn element(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

pub fn typed_element<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    element(document, id)?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> anyhow::Result<()> {
    let el = element(document, element_id)?;
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    closure.forget();
    Ok(())
}

/// Register a listener for the page lifetime. `passive: false` lets touch
/// handlers call `prevent_default` to stop the page from scrolling.
pub fn listen<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    passive: bool,
    handler: impl FnMut(E) + 'static,
) -> anyhow::Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(passive);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| anyhow::anyhow!("listen {}: {:?}", event, e))?;
    closure.forget();
    Ok(())
}

/// Current drag boundary of the joystick base, in client px.
pub fn joystick_base(el: &web::Element) -> JoystickBase {
    let rect = el.get_bounding_client_rect();
    JoystickBase::from_rect(rect.left(), rect.top(), rect.width(), rect.height())
}
