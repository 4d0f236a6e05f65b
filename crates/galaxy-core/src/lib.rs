pub mod color;
pub mod config;
pub mod constants;
pub mod galaxy;
pub mod particle;
pub mod projection;
pub mod render;
pub mod rotation;

pub use color::*;
pub use config::*;
pub use constants::*;
pub use galaxy::*;
pub use particle::*;
pub use projection::*;
pub use render::*;
pub use rotation::*;
