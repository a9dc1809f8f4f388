//! Camera module - reference camera and render cameras.
//!
//! `PerspectiveCamera` is the monocular camera driven by the host; the
//! stereo rig reads it every frame. `RenderCamera` is the passive snapshot
//! handed to the renderer for one pass (mono or one eye).

mod perspective_camera;
mod render_camera;

pub use perspective_camera::{PerspectiveCamera, DEFAULT_FOCUS};
pub use render_camera::{RenderCamera, EyeLayers};
