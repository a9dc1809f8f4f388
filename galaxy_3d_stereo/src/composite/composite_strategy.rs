/// CompositeStrategy trait - one stereo presentation mode
///
/// A strategy owns the stereo rig and whatever offscreen targets it needs.
/// Each `render()` drives exactly two scene passes (one per eye) and
/// produces one presented image on the output surface.

use crate::camera::PerspectiveCamera;
use crate::error::Result;
use crate::renderer::Renderer;
use crate::stereo::{Eye, StereoCameraRig};
use super::strategy_kind::StrategyKind;

/// Stereo presentation mode driven by `StereoPresentationController`
pub trait CompositeStrategy<R: Renderer> {
    /// Kind this strategy was built for
    fn kind(&self) -> StrategyKind;

    /// Human-readable name
    fn name(&self) -> &'static str {
        self.kind().display_name()
    }

    fn rig(&self) -> &StereoCameraRig;

    fn rig_mut(&mut self) -> &mut StereoCameraRig;

    /// True if each eye renders where the other one is expected
    fn swap_eyes(&self) -> bool;

    fn set_swap_eyes(&mut self, swap: bool);

    /// Propagate a new output size to the surface and owned targets
    ///
    /// No-op when the size equals the last one applied.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if either dimension is zero, `InvalidState` after
    /// `dispose()`, or any backend failure.
    fn set_size(&mut self, renderer: &mut R, width: u32, height: u32) -> Result<()>;

    /// Update the rig from `camera`, render both eyes and present them
    fn render(&mut self, renderer: &mut R, scene: &R::Scene, camera: &PerspectiveCamera) -> Result<()>;

    /// Return the rig and `camera` to a monocular state before switching away
    ///
    /// Resets the aspect multiplier, rebuilds the camera projection and
    /// re-syncs the eyes with it.
    fn end(&mut self, camera: &mut PerspectiveCamera) -> Result<()> {
        self.rig_mut().set_aspect_multiplier(1.0)?;
        camera.update_projection_matrix();
        self.rig_mut().update(camera);
        Ok(())
    }

    /// Release owned targets. Idempotent.
    fn dispose(&mut self);

    fn is_disposed(&self) -> bool;
}

/// Eye rendered into the `slot` position (left target or left half)
pub fn source_eye(slot: Eye, swap_eyes: bool) -> Eye {
    if swap_eyes { slot.opposite() } else { slot }
}
