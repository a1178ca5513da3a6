//! Camera module — matrix builders, camera state, controller and uniforms.
//!
//! The matrix builders are pure functions. `Camera` is a value owned and
//! driven by the caller; nothing here stores or manages cameras globally.

mod camera;
mod controller;
mod transform;
mod uniforms;

pub use camera::{Camera, CameraConfig};
pub use controller::{CameraMovement, FrameClock};
pub use transform::{look_at, perspective, translation};
pub use uniforms::{FrameUniforms, UNIFORM_MODEL, UNIFORM_PROJECTION, UNIFORM_VIEW};
