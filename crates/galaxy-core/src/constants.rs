use std::f64::consts::TAU;

// Shared simulation and rendering tuning constants used by the web frontend.

// Field layout
pub const DEFAULT_STAR_COUNT: usize = 3000;
pub const MAX_STAR_COUNT: usize = 100_000;
pub const SPIRAL_ARMS: u32 = 5;
pub const FULL_TURN: f64 = TAU;

// Per-particle ranges (half-open)
pub const DEPTH_RANGE: (f64, f64) = (-500.0, 500.0);
pub const SIZE_RANGE: (f64, f64) = (0.5, 2.5);
pub const ANGULAR_SPEED_RANGE: (f64, f64) = (0.0002, 0.0007);
pub const BASE_RADIUS_RANGE: (f64, f64) = (50.0, 350.0);

// Orbital perturbations
pub const WOBBLE_AMPLITUDE: f64 = 10.0;
pub const WOBBLE_FREQUENCY: f64 = 3.0;
pub const DEPTH_OSC_AMPLITUDE: f64 = 50.0;
pub const DEPTH_OSC_FREQUENCY: f64 = 2.0;

// Camera
pub const FOCAL_LENGTH: f64 = 500.0; // also the near-plane distance used for culling
pub const POINTER_SENSITIVITY: f64 = 0.002; // radians per pixel from viewport center

// Painting
pub const TRAIL_ALPHA: f64 = 0.2; // partial erase per frame, never a full clear
pub const HALO_MIN_RADIUS: f64 = 1.0; // points larger than this get a halo
pub const HALO_RADIUS_FACTOR: f64 = 3.0;
pub const HALO_ALPHA: u8 = 0x40; // ~25%
pub const CORE_GLOW_RADIUS: f64 = 150.0;
