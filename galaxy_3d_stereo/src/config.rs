/// Stereo presentation configuration

use crate::error::Result;
use crate::engine_param_bail;
use crate::renderer::TextureFormat;
use crate::stereo::DEFAULT_SEPARATION;

/// Configuration shared by the presentation controller and its strategies
///
/// Passed once to `StereoPresentationController::new()`; every strategy the
/// controller builds afterwards is configured from it.
#[derive(Debug, Clone, PartialEq)]
pub struct StereoConfig {
    /// Interocular distance used when the reference camera has no base of its own
    pub separation: f32,
    /// Field-of-view multiplier applied to the reference camera by the full
    /// (non-half) side-by-side layout
    pub side_by_side_fov_scale: f32,
    /// Color format of the offscreen eye targets (interlaced, anaglyph)
    ///
    /// Must not be an sRGB format: the composition pass decodes sRGB itself
    /// and expects the raw encoded values.
    pub render_target_format: TextureFormat,
    /// Render the right eye where the left one is expected and vice versa
    pub swap_eyes: bool,
    /// Clear offscreen eye targets before each eye pass
    pub clear_eye_targets: bool,
}

impl Default for StereoConfig {
    fn default() -> Self {
        Self {
            separation: DEFAULT_SEPARATION,
            side_by_side_fov_scale: 1.3,
            render_target_format: TextureFormat::R8G8B8A8_UNORM,
            swap_eyes: false,
            clear_eye_targets: true,
        }
    }
}

impl StereoConfig {
    /// Check that every field holds a usable value
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if the separation is negative or not
    /// finite, if the side-by-side fov scale is not strictly positive, or if
    /// the eye target format is an sRGB format.
    pub fn validate(&self) -> Result<()> {
        if !self.separation.is_finite() || self.separation < 0.0 {
            engine_param_bail!("galaxy3d::stereo::Config",
                "Separation must be finite and >= 0 (got {})", self.separation);
        }
        if !self.side_by_side_fov_scale.is_finite() || self.side_by_side_fov_scale <= 0.0 {
            engine_param_bail!("galaxy3d::stereo::Config",
                "Side-by-side fov scale must be > 0 (got {})", self.side_by_side_fov_scale);
        }
        if self.render_target_format.is_srgb() {
            engine_param_bail!("galaxy3d::stereo::Config",
                "Eye target format must not decode sRGB on sampling (got {:?})",
                self.render_target_format);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
