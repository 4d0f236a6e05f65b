use galaxy_core::{Fill, Surface};
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] backed by a canvas 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` when the canvas cannot hand out a 2D context (e.g. it already
    /// has a different context type).
    pub fn new(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }

    /// Set the current fill style; false if the style could not be built.
    fn set_fill(&self, fill: &Fill) -> bool {
        match fill {
            Fill::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Fill::Radial(g) => {
                let gradient = match self.ctx.create_radial_gradient(
                    g.center.x, g.center.y, 0.0, g.center.x, g.center.y, g.radius,
                ) {
                    Ok(gradient) => gradient,
                    Err(e) => {
                        log::debug!("[canvas] radial gradient r={}: {:?}", g.radius, e);
                        return false;
                    }
                };
                for stop in &g.stops {
                    _ = gradient.add_color_stop(stop.offset as f32, &stop.color.to_css());
                }
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        true
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &Fill) {
        if self.set_fill(fill) {
            self.ctx.fill_rect(x, y, w, h);
        }
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, fill: &Fill) {
        if !self.set_fill(fill) {
            return;
        }
        self.ctx.begin_path();
        if self.ctx.arc(center.x, center.y, radius, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }
}
