/// SideBySide strategy - both eyes drawn directly into the two halves of the surface
///
/// No offscreen targets. The surface is split with scissor + viewport state;
/// the scissor test is enabled around the clear and both eye passes and
/// always disabled again afterwards, even when a pass fails.

use crate::camera::PerspectiveCamera;
use crate::config::StereoConfig;
use crate::error::{Error, Result};
use crate::renderer::{Renderer, Viewport, Rect2D};
use crate::stereo::{Eye, StereoCameraRig};
use crate::engine_debug;
use super::composite_strategy::{CompositeStrategy, source_eye};
use super::stereo_targets::check_surface_size;
use super::strategy_kind::StrategyKind;

/// Side-by-side presentation, full size or half-width packed
#[derive(Debug)]
pub struct SideBySide {
    rig: StereoCameraRig,
    half_size: bool,
    swap_eyes: bool,
    size: Option<(u32, u32)>,
    disposed: bool,
}

impl SideBySide {
    /// Create a side-by-side strategy
    ///
    /// `half_size` keeps the camera aspect for each eye (displays that
    /// stretch each half back to full width); otherwise each eye gets half
    /// of the camera aspect.
    pub fn new(config: &StereoConfig, half_size: bool) -> Result<Self> {
        let mut rig = StereoCameraRig::with_separation(config.separation)?;
        rig.set_aspect_multiplier(if half_size { 1.0 } else { 0.5 })?;

        Ok(Self {
            rig,
            half_size,
            swap_eyes: config.swap_eyes,
            size: None,
            disposed: false,
        })
    }

    pub fn is_half_size(&self) -> bool {
        self.half_size
    }

    /// Rects covering the left and right halves of a `width` x `height` surface
    pub fn half_rects(width: u32, height: u32) -> (Rect2D, Rect2D) {
        let half = width / 2;
        (
            Rect2D { x: 0, y: 0, width: half, height },
            Rect2D { x: half as i32, y: 0, width: width - half, height },
        )
    }

    fn render_halves<R: Renderer>(&self, renderer: &mut R, scene: &R::Scene) -> Result<()> {
        let (width, height) = renderer.output_size();
        let (left_rect, right_rect) = Self::half_rects(width, height);

        renderer.clear()?;

        for (slot, rect) in [(Eye::Left, left_rect), (Eye::Right, right_rect)] {
            let eye = self.rig.eye(source_eye(slot, self.swap_eyes));
            renderer.set_scissor(rect)?;
            renderer.set_viewport(Viewport::from_rect(rect))?;
            renderer.render(scene, eye.render_camera(), None, false)?;
        }
        Ok(())
    }
}

impl<R: Renderer> CompositeStrategy<R> for SideBySide {
    fn kind(&self) -> StrategyKind {
        if self.half_size { StrategyKind::SideBySideHalf } else { StrategyKind::SideBySide }
    }

    fn rig(&self) -> &StereoCameraRig {
        &self.rig
    }

    fn rig_mut(&mut self) -> &mut StereoCameraRig {
        &mut self.rig
    }

    fn swap_eyes(&self) -> bool {
        self.swap_eyes
    }

    fn set_swap_eyes(&mut self, swap: bool) {
        self.swap_eyes = swap;
    }

    fn set_size(&mut self, renderer: &mut R, width: u32, height: u32) -> Result<()> {
        check_surface_size("galaxy3d::stereo::SideBySide", width, height)?;
        if self.disposed {
            return Err(Error::InvalidState("side-by-side strategy was disposed".to_string()));
        }
        if self.size == Some((width, height)) {
            return Ok(());
        }

        renderer.set_output_size(width, height)?;
        self.size = Some((width, height));

        engine_debug!("galaxy3d::stereo::SideBySide", "Surface resized to {}x{}", width, height);
        Ok(())
    }

    fn render(&mut self, renderer: &mut R, scene: &R::Scene, camera: &PerspectiveCamera) -> Result<()> {
        if self.disposed {
            return Err(Error::InvalidState("side-by-side strategy was disposed".to_string()));
        }

        self.rig.update(camera);

        renderer.set_scissor_test(true)?;
        let result = self.render_halves(renderer, scene);
        let restored = renderer.set_scissor_test(false);
        result.and(restored)
    }

    fn dispose(&mut self) {
        self.disposed = true;
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
#[path = "side_by_side_tests.rs"]
mod tests;
