/// Renderer trait - render contract consumed by the stereo pipeline

use crate::error::Result;
use crate::camera::RenderCamera;
use crate::renderer::{RenderTarget, RenderTargetDesc, CompositePass};

// ============================================================================
// Common types
// ============================================================================

/// Viewport dimensions and depth range
///
/// Expressed in output-surface units (the same units as `output_size()`);
/// the backend applies its pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Viewport covering `rect` with the full [0, 1] depth range
    pub fn from_rect(rect: Rect2D) -> Self {
        Self {
            x: rect.x as f32,
            y: rect.y as f32,
            width: rect.width as f32,
            height: rect.height as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }
}

/// 2D rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect2D {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

// ============================================================================
// Renderer trait
// ============================================================================

/// Render contract implemented by the host engine backend
///
/// The stereo pipeline never traverses the scene, compiles shaders or
/// rasterizes: it only issues the calls below, on the host's render thread,
/// and propagates every error they return.
pub trait Renderer {
    /// Scene type understood by the backend
    type Scene: ?Sized;

    /// Offscreen render target type allocated by the backend
    type Target: RenderTarget;

    /// Render the scene from `camera`
    ///
    /// # Arguments
    ///
    /// * `scene` - Scene to draw
    /// * `camera` - Eye (or mono) camera for this pass
    /// * `target` - Offscreen target, or `None` for the output surface
    /// * `clear` - Clear the destination before drawing
    fn render(
        &mut self,
        scene: &Self::Scene,
        camera: &RenderCamera,
        target: Option<&mut Self::Target>,
        clear: bool,
    ) -> Result<()>;

    /// Run a full-screen composition pass into the output surface
    ///
    /// The pass samples the two eye targets it references and writes one
    /// combined image (see `CompositePass` for the per-pixel rules).
    fn composite(&mut self, pass: &CompositePass<'_, Self::Target>) -> Result<()>;

    /// Clear the output surface (restricted to the scissor rect when the
    /// scissor test is enabled)
    fn clear(&mut self) -> Result<()>;

    /// Set the viewport on the output surface
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()>;

    /// Set the scissor rectangle on the output surface
    fn set_scissor(&mut self, scissor: Rect2D) -> Result<()>;

    /// Enable or disable the scissor test
    fn set_scissor_test(&mut self, enabled: bool) -> Result<()>;

    /// Current output surface size (width, height)
    fn output_size(&self) -> (u32, u32);

    /// Resize the output surface
    fn set_output_size(&mut self, width: u32, height: u32) -> Result<()>;

    /// Device pixel ratio (physical pixels per output-surface unit)
    fn pixel_ratio(&self) -> f32;

    /// Allocate an offscreen color target
    fn create_render_target(&mut self, desc: &RenderTargetDesc) -> Result<Self::Target>;
}
