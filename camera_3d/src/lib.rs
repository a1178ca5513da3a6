/*!
# Camera 3D

Camera transforms for an OpenGL-style renderer.

The core is three pure matrix builders:

- **perspective**: right-handed projection, NDC depth in `[-1, 1]`
- **translation**: affine translation
- **look_at**: right-handed view matrix from eye, target and world up

Around them sit an explicit `Camera` state value (position, view direction,
projection parameters, keyboard movement), a `FrameClock` for per-frame delta
time, and `FrameUniforms` packing the `model`/`view`/`projection` matrices
for upload. Windowing, GPU resources and draw calls stay with the caller.

```
use camera_3d::cam3d::camera::{look_at, perspective};
use camera_3d::glam::Vec3;

let view = look_at(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y)?;
let projection = perspective(45f32.to_radians(), 1200.0 / 800.0, 0.1, 100.0)?;
let clip = projection * view;
# let _ = clip;
# Ok::<(), camera_3d::cam3d::Error>(())
```
*/

// Internal modules
mod error;
mod diagnostics;
pub mod log;
pub mod camera;

// Main cam3d namespace module
pub mod cam3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger registry
    pub use crate::diagnostics::Diagnostics;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module with the matrix builders and camera state
    pub mod camera {
        pub use crate::camera::*;
    }
}

// Re-export math library at crate root
pub use glam;
