/*!
# Galaxy3D Stereo

Stereoscopic presentation for the Galaxy3D rendering engine.

A single monocular `PerspectiveCamera` is turned into a left/right pair of
off-axis (asymmetric frustum) eye cameras, the scene is rendered once per
eye through the host's `Renderer`, and both views are combined into one
presented image.

## Architecture

- **StereoCameraRig**: derives the two eye projections and world transforms,
  recomputing projections only when the camera intrinsics change
- **CompositeStrategy**: side-by-side, interlaced, and anaglyph presentation
- **StereoPresentationController**: owns the active strategy and its lifecycle,
  entry point driven once per frame by the host
- **Renderer**: render contract implemented by the host engine backend
*/

// Internal modules
mod error;
mod engine;
mod config;
pub mod log;
pub mod camera;
pub mod renderer;
pub mod stereo;
pub mod composite;
pub mod presentation;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging entry point
    pub use crate::engine::Engine;

    // Configuration
    pub use crate::config::StereoConfig;

    // Presentation controller (host entry point)
    pub use crate::presentation::{StereoPresentationController, PresentationState};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, format_entry};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Render contract sub-module
    pub mod render {
        pub use crate::renderer::*;
    }

    // Stereo rig sub-module
    pub mod stereo {
        pub use crate::stereo::*;
    }

    // Composite strategies sub-module
    pub mod composite {
        pub use crate::composite::*;
    }
}

// Re-export math library at crate root
pub use glam;
