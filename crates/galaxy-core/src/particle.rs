use crate::color::{Rgba, PALETTE};
use crate::constants::*;
use glam::DVec3;
use rand::Rng;

/// One star of the field.
///
/// Only `angle` and `radius` change after construction; everything else is
/// fixed for the particle's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    depth: f64,
    size: f64,
    color: Rgba,
    angular_speed: f64,
    angle: f64,
    radius: f64,
    base_radius: f64,
}

impl Particle {
    pub fn new(
        depth: f64,
        size: f64,
        color: Rgba,
        angular_speed: f64,
        angle: f64,
        base_radius: f64,
    ) -> Self {
        Self {
            depth,
            size,
            color,
            angular_speed,
            angle,
            radius: base_radius,
            base_radius,
        }
    }

    /// Draw a particle on one of the spiral arms.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let base_angle = rng.gen_range(0.0..FULL_TURN);
        let arm = rng.gen_range(0..SPIRAL_ARMS);
        let angle = base_angle + (arm as f64 / SPIRAL_ARMS as f64) * FULL_TURN;
        Self::new(
            rng.gen_range(DEPTH_RANGE.0..DEPTH_RANGE.1),
            rng.gen_range(SIZE_RANGE.0..SIZE_RANGE.1),
            PALETTE[rng.gen_range(0..PALETTE.len())],
            rng.gen_range(ANGULAR_SPEED_RANGE.0..ANGULAR_SPEED_RANGE.1),
            angle,
            rng.gen_range(BASE_RADIUS_RANGE.0..BASE_RADIUS_RANGE.1),
        )
    }

    /// Advance one frame and return the particle's world-space position.
    ///
    /// The position is transient; callers that need it again use
    /// [`Particle::position`].
    #[inline]
    pub fn advance(&mut self) -> DVec3 {
        self.angle += self.angular_speed;
        self.radius = self.base_radius + (self.angle * WOBBLE_FREQUENCY).sin() * WOBBLE_AMPLITUDE;
        self.position()
    }

    #[inline]
    pub fn position(&self) -> DVec3 {
        let (sin, cos) = self.angle.sin_cos();
        DVec3::new(
            cos * self.radius,
            sin * self.radius,
            self.depth + (self.angle * DEPTH_OSC_FREQUENCY).sin() * DEPTH_OSC_AMPLITUDE,
        )
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }
    pub fn size(&self) -> f64 {
        self.size
    }
    pub fn color(&self) -> Rgba {
        self.color
    }
    pub fn angular_speed(&self) -> f64 {
        self.angular_speed
    }
    pub fn angle(&self) -> f64 {
        self.angle
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }
    pub fn base_radius(&self) -> f64 {
        self.base_radius
    }
}
