pub mod config;
pub mod constants;
pub mod cursor;
pub mod geometry;
pub mod magnet;
pub mod profile;
pub mod tilt;
pub mod transition;
pub mod tween;

pub use config::*;
pub use cursor::*;
pub use geometry::*;
pub use magnet::*;
pub use profile::*;
pub use tilt::*;
pub use transition::*;
pub use tween::*;
