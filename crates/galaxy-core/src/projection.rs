use crate::rotation::ViewRotation;
use glam::{DVec2, DVec3};

/// A particle position after view rotation and perspective projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub screen: DVec2,
    pub scale: f64,
    /// Rotated depth (`z''`), positive away from the viewer.
    pub depth: f64,
}

impl Projected {
    /// False for points at or behind the camera plane, or with a degenerate
    /// scale.
    #[inline]
    pub fn is_visible(&self, focal_length: f64) -> bool {
        self.depth > -focal_length && self.scale > 0.0
    }
}

/// Rotate `point` by `rotation` and perspective-project it around `center`.
#[inline]
pub fn project(
    point: DVec3,
    rotation: &ViewRotation,
    center: DVec2,
    focal_length: f64,
) -> Projected {
    let r = rotation.apply(point);
    let scale = focal_length / (focal_length + r.z);
    Projected {
        screen: DVec2::new(r.x * scale + center.x, r.y * scale + center.y),
        scale,
        depth: r.z,
    }
}
