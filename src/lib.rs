#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, SEED_ATTR, STAR_COUNT_ATTR};
use anyhow::anyhow;
use galaxy_core::{Galaxy, PointerRotation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod settings;
mod stats;

/// Everything a mounted galaxy keeps alive. Dropping it stops the frame
/// chain and unregisters every listener.
struct Mounted {
    frame_loop: frame::FrameLoop,
    listeners: Vec<dom::Listener>,
    overlay: Option<web::Element>,
}

impl Mounted {
    fn teardown(self) {
        self.frame_loop.cancel();
        drop(self.listeners);
        if let Some(el) = &self.overlay {
            overlay::hide(el);
        }
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

fn wire_canvas_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<dom::Listener> {
    let canvas_resize = canvas.clone();
    dom::Listener::new(window, "resize", move |_ev: web::Event| {
        if let Some(w) = web::window() {
            dom::sync_canvas_to_viewport(&w, &canvas_resize);
        }
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("galaxy-web starting");
    mount();
    Ok(())
}

/// Mount (or remount) the galaxy on `#galaxy-canvas`. A remount builds a
/// fresh particle field.
#[wasm_bindgen]
pub fn mount() {
    unmount();
    match init() {
        Ok(Some(mounted)) => MOUNTED.with(|m| *m.borrow_mut() = Some(mounted)),
        Ok(None) => log::warn!("2D canvas context unavailable; galaxy not started"),
        Err(e) => log::error!("mount error: {:?}", e),
    }
}

/// Stop the animation and release every listener. No-op when not mounted.
#[wasm_bindgen]
pub fn unmount() {
    if let Some(mounted) = MOUNTED.with(|m| m.borrow_mut().take()) {
        mounted.teardown();
        log::info!("[galaxy] unmounted");
    }
}

fn init() -> anyhow::Result<Option<Mounted>> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    let canvas = dom::ensure_canvas(&document, CANVAS_ID)?;

    // Size first so the context and first frame see the real viewport.
    dom::sync_canvas_to_viewport(&window, &canvas);
    let Some(surface) = canvas::CanvasSurface::new(&canvas) else {
        return Ok(None);
    };

    let config = settings::config_from_attrs(
        canvas.get_attribute(STAR_COUNT_ATTR).as_deref(),
        canvas.get_attribute(SEED_ATTR).as_deref(),
    );
    let galaxy = Galaxy::new(&config);
    let pointer = Rc::new(RefCell::new(PointerRotation::new(config.sensitivity)));

    let mut listeners = vec![wire_canvas_resize(&window, &canvas)?];
    listeners.extend(events::wire_pointer_handlers(&canvas, pointer.clone())?);

    let overlay = match overlay::show(&document) {
        Ok(el) => Some(el),
        Err(e) => {
            log::warn!("[overlay] not shown: {:?}", e);
            None
        }
    };
    overlay::set_cursor(&canvas, false);

    log::info!(
        "[galaxy] mounted {} stars on {}x{}",
        galaxy.len(),
        canvas.width(),
        canvas.height()
    );
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        galaxy,
        surface,
        pointer,
    )));
    let frame_loop = frame::start_loop(frame_ctx);

    Ok(Some(Mounted {
        frame_loop,
        listeners,
        overlay,
    }))
}
