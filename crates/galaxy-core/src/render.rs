//! Immediate-mode painting against an abstract 2D surface.
//!
//! The browser frontend implements [`Surface`] for a canvas 2D context; tests
//! implement it with a recorder.

use crate::color::*;
use crate::constants::*;
use crate::projection::Projected;
use glam::DVec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba,
}

/// Radial gradient from a zero-radius point to a circle of `radius`, both
/// centered at `center`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: DVec2,
    pub radius: f64,
    pub stops: SmallVec<[ColorStop; 3]>,
}

impl RadialGradient {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self {
            center,
            radius,
            stops: SmallVec::new(),
        }
    }

    pub fn stop(mut self, offset: f64, color: Rgba) -> Self {
        self.stops.push(ColorStop { offset, color });
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    Solid(Rgba),
    Radial(RadialGradient),
}

/// A resizable 2D drawing target.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &Fill);
    fn fill_circle(&mut self, center: DVec2, radius: f64, fill: &Fill);

    #[inline]
    fn center(&self) -> DVec2 {
        DVec2::new(self.width() / 2.0, self.height() / 2.0)
    }
}

/// Per-frame counters returned by [`crate::Galaxy::render`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub drawn: usize,
    pub culled: usize,
}

/// Partially erase the previous frame, leaving a motion trail.
pub fn paint_trail<S: Surface + ?Sized>(surface: &mut S, trail_alpha: f64) {
    let (w, h) = (surface.width(), surface.height());
    let fill = Fill::Solid(TRAIL_COLOR.with_alpha(opacity_to_byte(trail_alpha)));
    surface.fill_rect(0.0, 0.0, w, h, &fill);
}

/// Paint one projected star and, for larger points, its halo.
pub fn paint_star<S: Surface + ?Sized>(surface: &mut S, at: &Projected, size: f64, color: Rgba) {
    let radius = size * at.scale;
    let point = Fill::Solid(color.with_alpha(alpha_byte(at.scale)));
    surface.fill_circle(at.screen, radius, &point);

    if radius > HALO_MIN_RADIUS {
        let halo_radius = radius * HALO_RADIUS_FACTOR;
        let halo = RadialGradient::new(at.screen, halo_radius)
            .stop(0.0, color.with_alpha(HALO_ALPHA))
            .stop(1.0, color.with_alpha(0x00));
        surface.fill_circle(at.screen, halo_radius, &Fill::Radial(halo));
    }
}

/// Soft glow over the galactic core, painted after all stars.
pub fn paint_core_glow<S: Surface + ?Sized>(surface: &mut S) {
    let (w, h) = (surface.width(), surface.height());
    let glow = RadialGradient::new(surface.center(), CORE_GLOW_RADIUS)
        .stop(0.0, CORE_GLOW_CENTER)
        .stop(0.5, CORE_GLOW_MID)
        .stop(1.0, CORE_GLOW_EDGE);
    surface.fill_rect(0.0, 0.0, w, h, &Fill::Radial(glow));
}
