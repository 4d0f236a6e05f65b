use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Event listener that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Window inner size in CSS pixels; zero when unavailable.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

/// Match the canvas backing store to the viewport. Particle data is untouched.
pub fn sync_canvas_to_viewport(window: &web::Window, canvas: &web::HtmlCanvasElement) {
    let (w, h) = viewport_size(window);
    canvas.set_width(w.max(1.0) as u32);
    canvas.set_height(h.max(1.0) as u32);
}

/// Find `#id` as a canvas, or create one and append it to `<body>`.
pub fn ensure_canvas(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(el) = document.get_element_by_id(id) {
        return el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow!("#{} is not a canvas: {:?}", id, e));
    }
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    canvas.set_id(id);
    _ = canvas.style().set_property("display", "block");
    body.append_child(&canvas).map_err(|e| anyhow!("{:?}", e))?;
    log::info!("[dom] created #{}", id);
    Ok(canvas)
}
