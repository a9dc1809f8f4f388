/// Interlaced strategy - row-interleaved eyes for line-polarized displays
///
/// Left eye goes to target A, right eye to target B, then a full-screen
/// pass writes odd output rows from A and even rows from B.

use crate::camera::PerspectiveCamera;
use crate::config::StereoConfig;
use crate::error::{Error, Result};
use crate::renderer::{Renderer, CompositePass};
use crate::stereo::StereoCameraRig;
use super::composite_strategy::CompositeStrategy;
use super::stereo_targets::{StereoTargets, check_surface_size};
use super::strategy_kind::StrategyKind;

#[derive(Debug)]
pub struct Interlaced<R: Renderer> {
    rig: StereoCameraRig,
    targets: StereoTargets<R::Target>,
    swap_eyes: bool,
    clear_targets: bool,
    size: Option<(u32, u32)>,
}

impl<R: Renderer> Interlaced<R> {
    /// Create the strategy and allocate its eye targets at the current output size
    pub fn new(renderer: &mut R, config: &StereoConfig) -> Result<Self> {
        let rig = StereoCameraRig::with_separation(config.separation)?;
        let targets = StereoTargets::allocate(renderer, config.render_target_format)?;

        Ok(Self {
            rig,
            targets,
            swap_eyes: config.swap_eyes,
            clear_targets: config.clear_eye_targets,
            size: None,
        })
    }

    pub fn targets(&self) -> &StereoTargets<R::Target> {
        &self.targets
    }
}

impl<R: Renderer> CompositeStrategy<R> for Interlaced<R> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Interlaced
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
        check_surface_size("galaxy3d::stereo::Interlaced", width, height)?;
        if self.targets.is_released() {
            return Err(Error::InvalidState("interlaced strategy was disposed".to_string()));
        }
        if self.size == Some((width, height)) {
            return Ok(());
        }

        renderer.set_output_size(width, height)?;
        self.targets.resize(width, height, renderer.pixel_ratio())?;
        self.size = Some((width, height));
        Ok(())
    }

    fn render(&mut self, renderer: &mut R, scene: &R::Scene, camera: &PerspectiveCamera) -> Result<()> {
        if self.targets.is_released() {
            return Err(Error::InvalidState("interlaced strategy was disposed".to_string()));
        }

        self.rig.update(camera);
        self.targets.render_eyes(renderer, scene, &self.rig, self.swap_eyes, self.clear_targets)?;

        renderer.composite(&CompositePass::Interlaced {
            left: self.targets.left(),
            right: self.targets.right(),
        })
    }

    fn dispose(&mut self) {
        self.targets.release();
    }

    fn is_disposed(&self) -> bool {
        self.targets.is_released()
    }
}

#[cfg(test)]
#[path = "interlaced_tests.rs"]
mod tests;
