//! Pointer-driven view rotation.
//!
//! Input handlers own the writes; the renderer only reads a copy of the
//! current [`ViewRotation`] each frame.

use glam::DVec3;

/// Scene rotation in radians: `pitch` about the horizontal axis, `yaw` about
/// the vertical axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewRotation {
    pub pitch: f64,
    pub yaw: f64,
}

impl ViewRotation {
    pub const IDENTITY: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
    };

    /// Rotation for a pointer at `(x, y)` in a `width` x `height` viewport.
    /// The viewport center maps to zero rotation.
    #[inline]
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64, sensitivity: f64) -> Self {
        Self {
            pitch: (y - height / 2.0) * sensitivity,
            yaw: (x - width / 2.0) * sensitivity,
        }
    }

    /// Rotate by yaw around the vertical axis, then by pitch around the
    /// horizontal axis.
    #[inline]
    pub fn apply(&self, p: DVec3) -> DVec3 {
        let (sin_y, cos_y) = self.yaw.sin_cos();
        let x1 = p.x * cos_y - p.z * sin_y;
        let z1 = p.x * sin_y + p.z * cos_y;

        let (sin_p, cos_p) = self.pitch.sin_cos();
        let y2 = p.y * cos_p - z1 * sin_p;
        let z2 = p.y * sin_p + z1 * cos_p;
        DVec3::new(x1, y2, z2)
    }
}

/// Pointer button state plus the rotation it last produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerRotation {
    pub pressed: bool,
    pub rotation: ViewRotation,
    pub sensitivity: f64,
}

impl Default for PointerRotation {
    fn default() -> Self {
        Self::new(crate::constants::POINTER_SENSITIVITY)
    }
}

impl PointerRotation {
    pub fn new(sensitivity: f64) -> Self {
        Self {
            pressed: false,
            rotation: ViewRotation::IDENTITY,
            sensitivity,
        }
    }

    /// Button down: start tracking and rotate to the press position at once.
    pub fn press(&mut self, x: f64, y: f64, viewport_w: f64, viewport_h: f64) {
        self.pressed = true;
        self.retarget(x, y, viewport_w, viewport_h);
    }

    /// Returns true when the move changed the rotation.
    pub fn move_to(&mut self, x: f64, y: f64, viewport_w: f64, viewport_h: f64) -> bool {
        if !self.pressed {
            return false;
        }
        self.retarget(x, y, viewport_w, viewport_h);
        true
    }

    /// Button up or pointer left the surface. Rotation stays where it is.
    pub fn release(&mut self) {
        self.pressed = false;
    }

    fn retarget(&mut self, x: f64, y: f64, viewport_w: f64, viewport_h: f64) {
        self.rotation = ViewRotation::from_pointer(x, y, viewport_w, viewport_h, self.sensitivity);
    }
}
