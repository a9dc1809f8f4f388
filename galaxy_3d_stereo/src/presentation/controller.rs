/// StereoPresentationController - host entry point for stereo presentation
///
/// Owns the renderer and the active composite strategy. The host selects a
/// strategy once, forwards surface resizes, and calls `render()` once per
/// frame.
///
/// State machine: `Inactive` until the first successful `select_strategy()`,
/// then `Active(kind)`. Switching strategies ends and disposes the previous
/// one before the next is built; `deactivate()` returns to `Inactive`.

use crate::camera::PerspectiveCamera;
use crate::composite::{
    CompositeStrategy, StrategyKind, SideBySide, Interlaced, Anaglyph, check_surface_size,
};
use crate::config::StereoConfig;
use crate::error::{Error, Result};
use crate::renderer::Renderer;
use crate::{engine_error, engine_info, engine_param_bail};

const SOURCE: &str = "galaxy3d::stereo::Controller";

/// Presentation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationState {
    /// No strategy selected yet, or deactivated
    Inactive,
    /// A strategy of this kind is presenting
    Active(StrategyKind),
}

/// Stereo presentation controller
pub struct StereoPresentationController<R: Renderer + 'static> {
    renderer: R,
    config: StereoConfig,
    strategy: Option<Box<dyn CompositeStrategy<R>>>,
}

impl<R: Renderer + 'static> StereoPresentationController<R> {
    /// Create an inactive controller around `renderer`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `config` does not validate.
    pub fn new(renderer: R, config: StereoConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            strategy: None,
        })
    }

    // ===== ACCESSORS =====

    pub fn state(&self) -> PresentationState {
        match &self.strategy {
            Some(strategy) => PresentationState::Active(strategy.kind()),
            None => PresentationState::Inactive,
        }
    }

    pub fn config(&self) -> &StereoConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Active strategy, if any
    pub fn active_strategy(&self) -> Option<&dyn CompositeStrategy<R>> {
        self.strategy.as_deref()
    }

    /// Every selectable strategy, in menu order
    pub fn available_strategies() -> &'static [StrategyKind] {
        &StrategyKind::ALL
    }

    // ===== STRATEGY SELECTION =====

    /// Select a strategy by identifier (`"sbs"`, `"sbsHalf"`, `"interlaced"`,
    /// `"anaColor"`, `"anaRedcyan"`, `"anaGray"`)
    ///
    /// # Arguments
    ///
    /// * `kind` - Strategy identifier
    /// * `camera` - Reference camera; its fov and projection are rewritten
    /// * `fov` - Monocular field of view of the camera, in degrees
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for an unknown identifier or an unusable fov.
    /// Backend failures while building the strategy are propagated; the
    /// controller is then `Inactive`.
    pub fn select_strategy(&mut self, kind: &str, camera: &mut PerspectiveCamera, fov: f32) -> Result<()> {
        let kind = kind.parse::<StrategyKind>()?;
        self.select_strategy_kind(kind, camera, fov)
    }

    /// Select a strategy by kind (see `select_strategy()`)
    pub fn select_strategy_kind(
        &mut self,
        kind: StrategyKind,
        camera: &mut PerspectiveCamera,
        fov: f32,
    ) -> Result<()> {
        let scaled_fov = if kind.scales_fov() {
            fov * self.config.side_by_side_fov_scale
        } else {
            fov
        };
        for value in [fov, scaled_fov] {
            if !(value > 0.0 && value < 180.0) {
                engine_param_bail!(SOURCE,
                    "Field of view for '{}' must stay in (0, 180) degrees (got {})", kind, value);
            }
        }

        self.teardown(camera)?;
        camera.set_fov(fov)?;
        camera.update_projection_matrix();

        let mut strategy = self.create_strategy(kind)?;

        if kind.scales_fov() {
            camera.set_fov(scaled_fov)?;
            camera.update_projection_matrix();
        }

        let (width, height) = self.renderer.output_size();
        if let Err(e) = strategy.set_size(&mut self.renderer, width, height) {
            strategy.dispose();
            if kind.scales_fov() {
                camera.set_fov(fov)?;
                camera.update_projection_matrix();
            }
            return Err(e);
        }

        engine_info!(SOURCE, "Stereo strategy '{}' active ({}x{})", strategy.name(), width, height);
        self.strategy = Some(strategy);
        Ok(())
    }

    /// End and dispose the active strategy, restoring `camera` to `fov`
    pub fn deactivate(&mut self, camera: &mut PerspectiveCamera, fov: f32) -> Result<()> {
        self.teardown(camera)?;
        camera.set_fov(fov)?;
        camera.update_projection_matrix();
        Ok(())
    }

    fn teardown(&mut self, camera: &mut PerspectiveCamera) -> Result<()> {
        if let Some(mut strategy) = self.strategy.take() {
            let ended = strategy.end(camera);
            strategy.dispose();
            engine_info!(SOURCE, "Stereo strategy '{}' disposed", strategy.name());
            ended?;
        }
        Ok(())
    }

    fn create_strategy(&mut self, kind: StrategyKind) -> Result<Box<dyn CompositeStrategy<R>>> {
        let config = &self.config;
        let strategy: Box<dyn CompositeStrategy<R>> = match kind {
            StrategyKind::SideBySide => Box::new(SideBySide::new(config, false)?),
            StrategyKind::SideBySideHalf => Box::new(SideBySide::new(config, true)?),
            StrategyKind::Interlaced => Box::new(Interlaced::new(&mut self.renderer, config)?),
            StrategyKind::AnaglyphColor
            | StrategyKind::AnaglyphRedCyan
            | StrategyKind::AnaglyphGray => {
                let preset = kind.anaglyph_preset().unwrap_or_default();
                Box::new(Anaglyph::new(&mut self.renderer, config, preset)?)
            }
        };
        Ok(strategy)
    }

    // ===== PER-FRAME =====

    /// Render one stereo frame of `scene` seen from `camera`
    ///
    /// # Errors
    ///
    /// `InvalidState` when no strategy is active; any backend failure
    /// aborts the frame and is returned as is.
    pub fn render(&mut self, scene: &R::Scene, camera: &PerspectiveCamera) -> Result<()> {
        let Some(strategy) = self.strategy.as_mut() else {
            return Err(Error::InvalidState("no stereo strategy selected".to_string()));
        };

        strategy.render(&mut self.renderer, scene, camera).map_err(|e| {
            engine_error!(SOURCE, "Stereo frame aborted: {}", e);
            e
        })
    }

    /// Apply a new output surface size
    ///
    /// Goes through the active strategy when there is one so its targets
    /// follow; otherwise resizes the surface directly.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        check_surface_size(SOURCE, width, height)?;
        match self.strategy.as_mut() {
            Some(strategy) => strategy.set_size(&mut self.renderer, width, height),
            None => self.renderer.set_output_size(width, height),
        }
    }

    /// Swap which eye renders where, now and for strategies selected later
    pub fn set_swap_eyes(&mut self, swap: bool) {
        self.config.swap_eyes = swap;
        if let Some(strategy) = self.strategy.as_mut() {
            strategy.set_swap_eyes(swap);
        }
    }
}

impl<R: Renderer + 'static> Drop for StereoPresentationController<R> {
    fn drop(&mut self) {
        if let Some(mut strategy) = self.strategy.take() {
            strategy.dispose();
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
