use crate::config::GalaxyConfig;
use crate::particle::Particle;
use crate::projection::project;
use crate::render::{paint_core_glow, paint_star, paint_trail, FrameStats, Surface};
use crate::rotation::ViewRotation;
use rand::Rng;

/// Owned simulation state: the particle field plus the camera settings it is
/// drawn with.
#[derive(Clone, Debug)]
pub struct Galaxy {
    particles: Vec<Particle>,
    focal_length: f64,
    trail_alpha: f64,
}

impl Galaxy {
    /// Build a field from an already validated config.
    pub fn new(config: &GalaxyConfig) -> Self {
        let mut rng = config.rng();
        let mut galaxy = Self::with_rng(config.star_count, &mut rng);
        galaxy.focal_length = config.focal_length;
        galaxy.trail_alpha = config.trail_alpha;
        log::debug!(
            "[galaxy] built {} stars (seed={:?}, focal={})",
            galaxy.len(),
            config.seed,
            galaxy.focal_length
        );
        galaxy
    }

    pub fn with_rng<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let particles = (0..count).map(|_| Particle::random(rng)).collect();
        Self::from_particles(particles)
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        let defaults = GalaxyConfig::default();
        Self {
            particles,
            focal_length: defaults.focal_length,
            trail_alpha: defaults.trail_alpha,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn focal_length(&self) -> f64 {
        self.focal_length
    }

    /// Advance every particle one frame without drawing.
    pub fn update(&mut self) {
        for p in &mut self.particles {
            p.advance();
        }
    }

    /// Run one full frame: trail, advance + project + paint each star, core
    /// glow. Culled stars are still advanced.
    pub fn render<S: Surface + ?Sized>(
        &mut self,
        rotation: &ViewRotation,
        surface: &mut S,
    ) -> FrameStats {
        paint_trail(surface, self.trail_alpha);

        let center = surface.center();
        let mut stats = FrameStats::default();
        for p in &mut self.particles {
            let world = p.advance();
            let projected = project(world, rotation, center, self.focal_length);
            if projected.is_visible(self.focal_length) {
                paint_star(surface, &projected, p.size(), p.color());
                stats.drawn += 1;
            } else {
                stats.culled += 1;
            }
        }

        paint_core_glow(surface);
        stats
    }
}
