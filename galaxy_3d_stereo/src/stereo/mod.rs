//! Stereo module - off-axis stereo camera rig.
//!
//! Turns one reference `PerspectiveCamera` into a left/right pair of eye
//! cameras converging at the camera's focus distance.

mod eye_camera;
mod stereo_camera_rig;

pub use eye_camera::{Eye, EyeCamera, HorizontalBounds};
pub use stereo_camera_rig::{StereoCameraRig, StereoParameters, DEFAULT_SEPARATION};
