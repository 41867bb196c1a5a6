use crate::constants::ID_ANGLE_BUTTON;
use crate::dom;
use crate::Panel;
use web_sys as web;

/// "Set" button next to the angle field. Validation, alerts and error
/// banners are handled by the controller.
pub fn wire_angle_button(
    panel: &Panel,
    document: &web::Document,
    input: &web::HtmlInputElement,
) -> anyhow::Result<()> {
    let p = panel.clone();
    let input = input.clone();
    dom::add_click_listener(document, ID_ANGLE_BUTTON, move || {
        let raw = input.value();
        _ = p.borrow_mut().set_angle(&raw);
    })
}

/// The base moves with the layout; re-measure it whenever the window resizes.
pub fn wire_resize(panel: &Panel, base: &web::Element) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let p = panel.clone();
    let base = base.clone();
    dom::listen(&window, "resize", true, move |_ev: web::Event| {
        p.borrow_mut().resize(dom::joystick_base(&base));
    })
}
