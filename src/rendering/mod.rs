pub mod camera;
pub mod renderer;

// Re-export main types
pub use camera::{follow, CameraDirector, CameraMove};
pub use renderer::{DualMap, MapRenderer};
