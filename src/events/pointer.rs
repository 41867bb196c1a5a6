use crate::Panel;
use crate::dom;
use glam::DVec2;
use web_sys as web;

/// Mouse and touch drag on the joystick. A drag starts on the base; moves
/// and releases are tracked on the window so the pointer may leave the base.
pub fn wire_joystick(panel: &Panel, base: &web::Element) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    wire_drag_start(panel, base)?;
    wire_drag_move(panel, &window)?;
    wire_drag_end(panel, &window)?;
    Ok(())
}

fn wire_drag_start(panel: &Panel, base: &web::Element) -> anyhow::Result<()> {
    let p = panel.clone();
    dom::listen(base, "mousedown", true, move |_ev: web::MouseEvent| {
        p.borrow_mut().drag_start();
    })?;

    let p = panel.clone();
    dom::listen(base, "touchstart", false, move |ev: web::TouchEvent| {
        ev.prevent_default();
        p.borrow_mut().drag_start();
    })?;
    Ok(())
}

fn wire_drag_move(panel: &Panel, window: &web::Window) -> anyhow::Result<()> {
    let p = panel.clone();
    dom::listen(window, "mousemove", false, move |ev: web::MouseEvent| {
        if p.borrow_mut().drag_move(mouse_point(&ev)) {
            ev.prevent_default();
        }
    })?;

    let p = panel.clone();
    dom::listen(window, "touchmove", false, move |ev: web::TouchEvent| {
        let Some(point) = touch_point(&ev) else { return };
        if p.borrow_mut().drag_move(point) {
            ev.prevent_default();
        }
    })?;
    Ok(())
}

fn wire_drag_end(panel: &Panel, window: &web::Window) -> anyhow::Result<()> {
    let p = panel.clone();
    dom::listen(window, "mouseup", true, move |_ev: web::MouseEvent| {
        p.borrow_mut().drag_end();
    })?;

    let p = panel.clone();
    dom::listen(window, "touchend", true, move |_ev: web::TouchEvent| {
        p.borrow_mut().drag_end();
    })?;
    Ok(())
}

#[inline]
fn mouse_point(ev: &web::MouseEvent) -> DVec2 {
    DVec2::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

// First active touch only; multi-touch is not tracked.
#[inline]
fn touch_point(ev: &web::TouchEvent) -> Option<DVec2> {
    let touch = ev.touches().get(0)?;
    Some(DVec2::new(
        f64::from(touch.client_x()),
        f64::from(touch.client_y()),
    ))
}
