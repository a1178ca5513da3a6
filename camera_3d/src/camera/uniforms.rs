/// Per-frame shader uniforms: model, view and projection matrices.
///
/// The uniform names are the only contract with the shaders; they must match
/// the `uniform mat4` declarations of the consuming program.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use crate::error::Result;
use super::camera::Camera;

/// Uniform name of the model matrix.
pub const UNIFORM_MODEL: &str = "model";

/// Uniform name of the view matrix.
pub const UNIFORM_VIEW: &str = "view";

/// Uniform name of the projection matrix.
pub const UNIFORM_PROJECTION: &str = "projection";

/// Column-major matrices ready for upload (std140-compatible layout).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl FrameUniforms {
    pub fn new(model: Mat4, view: Mat4, projection: Mat4) -> Self {
        Self {
            model: bytemuck::cast(model),
            view: bytemuck::cast(view),
            projection: bytemuck::cast(projection),
        }
    }

    /// Build the view and projection from the current camera state.
    ///
    /// # Errors
    ///
    /// Propagates `Error::DomainError` from the view/projection builders.
    pub fn from_camera(camera: &Camera, model: Mat4, aspect: f32) -> Result<Self> {
        Ok(Self::new(model, camera.view_matrix()?, camera.projection_matrix(aspect)?))
    }

    /// Raw bytes, model first.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// `(uniform name, column-major matrix)` pairs, for per-uniform uploads.
    pub fn named(&self) -> [(&'static str, [f32; 16]); 3] {
        [
            (UNIFORM_MODEL, bytemuck::cast(self.model)),
            (UNIFORM_VIEW, bytemuck::cast(self.view)),
            (UNIFORM_PROJECTION, bytemuck::cast(self.projection)),
        ]
    }
}

#[cfg(test)]
#[path = "uniforms_tests.rs"]
mod tests;
