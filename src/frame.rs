use crate::canvas::CanvasSurface;
use crate::constants::STATS_LOG_INTERVAL_SEC;
use crate::stats::StatsWindow;
use galaxy_core::{Galaxy, PointerRotation};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub galaxy: Galaxy,
    pub surface: CanvasSurface,
    pub pointer: Rc<RefCell<PointerRotation>>,
    pub stats: StatsWindow,
}

impl FrameContext {
    pub fn new(
        galaxy: Galaxy,
        surface: CanvasSurface,
        pointer: Rc<RefCell<PointerRotation>>,
    ) -> Self {
        Self {
            galaxy,
            surface,
            pointer,
            stats: StatsWindow::new(Instant::now(), STATS_LOG_INTERVAL_SEC),
        }
    }

    pub fn frame(&mut self) {
        // Input handlers never run mid-frame, so a copy is the whole frame's view.
        let rotation = self.pointer.borrow().rotation;
        let frame_stats = self.galaxy.render(&rotation, &mut self.surface);
        if let Some(r) = self.stats.record(frame_stats, Instant::now()) {
            log::debug!(
                "[frame] {:.1} fps, drawn={} culled={} pitch={:.3} yaw={:.3}",
                r.fps,
                r.avg_drawn,
                r.avg_culled,
                rotation.pitch,
                rotation.yaw
            );
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running `requestAnimationFrame` chain.
pub struct FrameLoop {
    tick: TickSlot,
    raf_id: Rc<Cell<Option<i32>>>,
    cancelled: Rc<Cell<bool>>,
}

impl FrameLoop {
    /// Stop the chain: no frame runs after this returns.
    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Dropping the closure also breaks its reference cycle with `tick`.
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let callback = slot.as_ref()?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None::<i32>));
    let cancelled = Rc::new(Cell::new(false));

    let tick_clone = tick.clone();
    let raf_id_tick = raf_id.clone();
    let cancelled_tick = cancelled.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_id_tick.set(None);
        if cancelled_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        raf_id_tick.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));

    raf_id.set(request_frame(&tick));
    FrameLoop {
        tick,
        raf_id,
        cancelled,
    }
}
