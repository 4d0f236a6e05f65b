use crate::dom::{self, Listener};
use crate::overlay;
use galaxy_core::PointerRotation;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position in viewport coordinates plus the viewport size.
fn pointer_in_viewport(ev: &web::Event) -> Option<(f64, f64, f64, f64)> {
    let ev = ev.dyn_ref::<web::MouseEvent>()?;
    let (w, h) = dom::viewport_size(&web::window()?);
    Some((ev.client_x() as f64, ev.client_y() as f64, w, h))
}

/// Wire down/move/up/leave on the canvas. Handlers only touch the rotation
/// state; dropping the returned listeners unwires them.
pub fn wire_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerRotation>>,
) -> anyhow::Result<Vec<Listener>> {
    Ok(vec![
        wire_pointerdown(canvas, pointer.clone())?,
        wire_pointermove(canvas, pointer.clone())?,
        wire_release(canvas, pointer.clone(), "pointerup")?,
        wire_release(canvas, pointer, "pointerleave")?,
    ])
}

fn wire_pointerdown(
    canvas: &web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerRotation>>,
) -> anyhow::Result<Listener> {
    let canvas_cursor = canvas.clone();
    Listener::new(canvas, "pointerdown", move |ev: web::Event| {
        if let Some((x, y, w, h)) = pointer_in_viewport(&ev) {
            let mut p = pointer.borrow_mut();
            p.press(x, y, w, h);
            log::debug!(
                "[pointer] press at ({:.0},{:.0}) pitch={:.3} yaw={:.3}",
                x,
                y,
                p.rotation.pitch,
                p.rotation.yaw
            );
        }
        overlay::set_cursor(&canvas_cursor, true);
        ev.prevent_default();
    })
}

fn wire_pointermove(
    canvas: &web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerRotation>>,
) -> anyhow::Result<Listener> {
    Listener::new(canvas, "pointermove", move |ev: web::Event| {
        if let Some((x, y, w, h)) = pointer_in_viewport(&ev) {
            pointer.borrow_mut().move_to(x, y, w, h);
        }
    })
}

fn wire_release(
    canvas: &web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerRotation>>,
    event: &'static str,
) -> anyhow::Result<Listener> {
    let canvas_cursor = canvas.clone();
    Listener::new(canvas, event, move |_ev: web::Event| {
        let mut p = pointer.borrow_mut();
        if p.pressed {
            p.release();
            log::debug!(
                "[pointer] {} froze pitch={:.3} yaw={:.3}",
                event,
                p.rotation.pitch,
                p.rotation.yaw
            );
        }
        overlay::set_cursor(&canvas_cursor, false);
    })
}
