/// Anaglyph strategy - both eyes color-filtered into one image
///
/// Each eye is rendered to its own target; the composition pass mixes them
/// in linear space with the preset's matrices (see `ColorMixMatrix::mix`).

use crate::camera::PerspectiveCamera;
use crate::config::StereoConfig;
use crate::error::{Error, Result};
use crate::renderer::{Renderer, CompositePass};
use crate::stereo::StereoCameraRig;
use super::color::{AnaglyphPreset, ColorMixMatrix};
use super::composite_strategy::CompositeStrategy;
use super::stereo_targets::{StereoTargets, check_surface_size};
use super::strategy_kind::StrategyKind;

#[derive(Debug)]
pub struct Anaglyph<R: Renderer> {
    rig: StereoCameraRig,
    targets: StereoTargets<R::Target>,
    preset: AnaglyphPreset,
    mix: ColorMixMatrix,
    swap_eyes: bool,
    clear_targets: bool,
    size: Option<(u32, u32)>,
}

impl<R: Renderer> Anaglyph<R> {
    /// Create the strategy for `preset` and allocate its eye targets
    pub fn new(renderer: &mut R, config: &StereoConfig, preset: AnaglyphPreset) -> Result<Self> {
        let rig = StereoCameraRig::with_separation(config.separation)?;
        let targets = StereoTargets::allocate(renderer, config.render_target_format)?;

        Ok(Self {
            rig,
            targets,
            preset,
            mix: ColorMixMatrix::for_preset(preset),
            swap_eyes: config.swap_eyes,
            clear_targets: config.clear_eye_targets,
            size: None,
        })
    }

    /// Create the strategy from a preset name ("color", "redcyan", anything else is gray)
    pub fn with_preset_name(renderer: &mut R, config: &StereoConfig, name: &str) -> Result<Self> {
        Self::new(renderer, config, AnaglyphPreset::from_name(name))
    }

    pub fn preset(&self) -> AnaglyphPreset {
        self.preset
    }

    pub fn color_mix(&self) -> &ColorMixMatrix {
        &self.mix
    }

    pub fn targets(&self) -> &StereoTargets<R::Target> {
        &self.targets
    }
}

impl<R: Renderer> CompositeStrategy<R> for Anaglyph<R> {
    fn kind(&self) -> StrategyKind {
        match self.preset {
            AnaglyphPreset::Color => StrategyKind::AnaglyphColor,
            AnaglyphPreset::RedCyan => StrategyKind::AnaglyphRedCyan,
            AnaglyphPreset::Gray => StrategyKind::AnaglyphGray,
        }
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
        check_surface_size("galaxy3d::stereo::Anaglyph", width, height)?;
        if self.targets.is_released() {
            return Err(Error::InvalidState("anaglyph strategy was disposed".to_string()));
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
            return Err(Error::InvalidState("anaglyph strategy was disposed".to_string()));
        }

        self.rig.update(camera);
        self.targets.render_eyes(renderer, scene, &self.rig, self.swap_eyes, self.clear_targets)?;

        renderer.composite(&CompositePass::Anaglyph {
            left: self.targets.left(),
            right: self.targets.right(),
            mix: self.mix,
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
#[path = "anaglyph_tests.rs"]
mod tests;
