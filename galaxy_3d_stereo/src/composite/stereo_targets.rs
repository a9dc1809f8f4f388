/// Offscreen eye targets shared by the interlaced and anaglyph strategies

use crate::error::{Error, Result};
use crate::renderer::{Renderer, RenderTarget, RenderTargetDesc, TextureFormat};
use crate::stereo::{Eye, StereoCameraRig};
use crate::{engine_debug, engine_param_bail};
use super::composite_strategy::source_eye;

/// Physical size of a surface of `width` x `height` units at `pixel_ratio`
///
/// Rounded to the nearest pixel, never below 1.
pub fn physical_size(width: u32, height: u32, pixel_ratio: f32) -> (u32, u32) {
    let scale = |v: u32| ((v as f32 * pixel_ratio).round() as u32).max(1);
    (scale(width), scale(height))
}

/// Reject zero surface dimensions
pub fn check_surface_size(source: &str, width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        engine_param_bail!(source, "Surface size must be > 0 (got {}x{})", width, height);
    }
    Ok(())
}

/// Left/right offscreen color targets, sized to the surface
#[derive(Debug)]
pub struct StereoTargets<T: RenderTarget> {
    left: T,
    right: T,
    format: TextureFormat,
    released: bool,
}

impl<T: RenderTarget> StereoTargets<T> {
    /// Allocate both targets at the renderer's current output size
    ///
    /// If the second allocation fails the first target is released before
    /// the error is returned.
    pub fn allocate<R: Renderer<Target = T>>(renderer: &mut R, format: TextureFormat) -> Result<Self> {
        let (width, height) = renderer.output_size();
        let (width, height) = physical_size(width, height, renderer.pixel_ratio());
        let desc = RenderTargetDesc::eye_target(width, height, format);

        let mut left = renderer.create_render_target(&desc)?;
        let right = match renderer.create_render_target(&desc) {
            Ok(target) => target,
            Err(e) => {
                left.release();
                return Err(e);
            }
        };

        engine_debug!("galaxy3d::stereo::Targets",
            "Allocated eye targets {}x{} ({:?})", width, height, format);

        Ok(Self {
            left,
            right,
            format,
            released: false,
        })
    }

    pub fn left(&self) -> &T {
        &self.left
    }

    pub fn right(&self) -> &T {
        &self.right
    }

    #[cfg(test)]
    pub(crate) fn right_mut(&mut self) -> &mut T {
        &mut self.right
    }

    pub fn format(&self) -> TextureFormat {
        self.format
    }

    /// Current physical size of the left target
    ///
    /// Both targets share it unless a resize failed halfway.
    pub fn size(&self) -> (u32, u32) {
        (self.left.width(), self.left.height())
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Reallocate both targets for a `width` x `height` surface
    ///
    /// Each target is checked on its own, so a retry after a failed resize
    /// reallocates whichever target is still at the old size.
    pub fn resize(&mut self, width: u32, height: u32, pixel_ratio: f32) -> Result<()> {
        if self.released {
            return Err(Error::InvalidResource("eye targets were released".to_string()));
        }

        let (width, height) = physical_size(width, height, pixel_ratio);
        let is_sized = |t: &T| (t.width(), t.height()) == (width, height);
        if is_sized(&self.left) && is_sized(&self.right) {
            return Ok(());
        }

        for target in [&mut self.left, &mut self.right] {
            if !is_sized(&*target) {
                target.resize(width, height)?;
            }
        }

        engine_debug!("galaxy3d::stereo::Targets",
            "Resized eye targets to {}x{}", width, height);
        Ok(())
    }

    /// Render each eye of `rig` into its target
    ///
    /// The left target receives the left eye unless `swap_eyes` is set.
    pub fn render_eyes<R: Renderer<Target = T>>(
        &mut self,
        renderer: &mut R,
        scene: &R::Scene,
        rig: &StereoCameraRig,
        swap_eyes: bool,
        clear: bool,
    ) -> Result<()> {
        if self.released {
            return Err(Error::InvalidResource("eye targets were released".to_string()));
        }

        let left_camera = rig.eye(source_eye(Eye::Left, swap_eyes)).render_camera();
        renderer.render(scene, left_camera, Some(&mut self.left), clear)?;

        let right_camera = rig.eye(source_eye(Eye::Right, swap_eyes)).render_camera();
        renderer.render(scene, right_camera, Some(&mut self.right), clear)?;
        Ok(())
    }

    /// Release both targets. Idempotent.
    pub fn release(&mut self) {
        if !self.released {
            self.left.release();
            self.right.release();
            self.released = true;
        }
    }
}

#[cfg(test)]
#[path = "stereo_targets_tests.rs"]
mod tests;
