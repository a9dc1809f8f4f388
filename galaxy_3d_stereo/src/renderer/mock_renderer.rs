/// Mock Renderer for unit tests (no GPU required)
///
/// Records every contract call in order and keeps CPU pixel buffers for the
/// output surface and each render target, so strategies can be checked pixel
/// by pixel. Scenes are flat colors: each eye sees its own color, selected
/// from the camera layers.

use std::sync::{Arc, Mutex};
use glam::{Mat4, Vec3, Vec4};
use crate::camera::{EyeLayers, RenderCamera};
use crate::composite::{anaglyph_in_place, interlace_in_place};
use crate::error::{Error, Result};
use crate::renderer::{
    Renderer, RenderTarget, RenderTargetDesc, CompositePass, TextureFormat,
    Viewport, Rect2D,
};
use crate::engine_bail;

// ============================================================================
// Mock Scene
// ============================================================================

/// Solid-color scene, one color per eye layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockScene {
    pub left: Vec4,
    pub right: Vec4,
    pub mono: Vec4,
}

impl MockScene {
    pub const RED: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);
    pub const BLUE: Vec4 = Vec4::new(0.0, 0.0, 1.0, 1.0);
    pub const GREEN: Vec4 = Vec4::new(0.0, 1.0, 0.0, 1.0);

    /// Left eye red, right eye blue, mono green
    pub fn new() -> Self {
        Self {
            left: Self::RED,
            right: Self::BLUE,
            mono: Self::GREEN,
        }
    }

    pub fn color_for(&self, layers: EyeLayers) -> Vec4 {
        if layers.contains(EyeLayers::LEFT) {
            self.left
        } else if layers.contains(EyeLayers::RIGHT) {
            self.right
        } else {
            self.mono
        }
    }
}

// ============================================================================
// Mock RenderTarget
// ============================================================================

#[derive(Debug)]
pub struct MockRenderTarget {
    pub id: u32,
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub pixels: Vec<Vec4>,
    pub resize_count: u32,
    /// Fail the next resize with `OutOfMemory`
    pub fail_resize: bool,
    released: bool,
    release_log: Arc<Mutex<Vec<u32>>>,
}

impl MockRenderTarget {
    pub fn new(id: u32, desc: &RenderTargetDesc, release_log: Arc<Mutex<Vec<u32>>>) -> Self {
        Self {
            id,
            width: desc.width,
            height: desc.height,
            format: desc.format,
            pixels: vec![Vec4::ZERO; desc.width as usize * desc.height as usize],
            resize_count: 0,
            fail_resize: false,
            released: false,
            release_log,
        }
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl RenderTarget for MockRenderTarget {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn format(&self) -> TextureFormat {
        self.format
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if self.released {
            return Err(Error::InvalidResource(format!("render target {} was released", self.id)));
        }
        if self.fail_resize {
            self.fail_resize = false;
            return Err(Error::OutOfMemory);
        }
        self.width = width;
        self.height = height;
        self.pixels = vec![Vec4::ZERO; width as usize * height as usize];
        self.resize_count += 1;
        Ok(())
    }

    fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.pixels = Vec::new();
            self.release_log.lock().unwrap().push(self.id);
        }
    }
}

// ============================================================================
// Recorded commands
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum MockCommand {
    Render {
        layers: EyeLayers,
        target: Option<u32>,
        clear: bool,
        /// Scissor rect, when the scissor test was enabled
        scissor: Option<Rect2D>,
        viewport: Option<Viewport>,
        projection: Mat4,
        position: Vec3,
    },
    Composite {
        left: u32,
        right: u32,
        anaglyph: bool,
    },
    Clear {
        scissor: Option<Rect2D>,
    },
    SetViewport(Viewport),
    SetScissor(Rect2D),
    SetScissorTest(bool),
    SetOutputSize(u32, u32),
    CreateTarget {
        id: u32,
        width: u32,
        height: u32,
    },
}

// ============================================================================
// Mock Renderer
// ============================================================================

/// Mock Renderer that records calls and draws into CPU buffers
#[derive(Debug)]
pub struct MockRenderer {
    pub commands: Vec<MockCommand>,
    /// Output surface pixels, `output_size` row-major
    pub surface: Vec<Vec4>,
    /// Shared with every target, receives the id of each released target
    pub release_log: Arc<Mutex<Vec<u32>>>,
    /// Fail the n-th (0-based) scene render call
    pub fail_render_at: Option<usize>,
    /// Fail the n-th (0-based) render target allocation
    pub fail_target_at: Option<usize>,
    /// Fail every output surface resize
    pub fail_output_size: bool,
    output_size: (u32, u32),
    pixel_ratio: f32,
    scissor_test: bool,
    scissor: Option<Rect2D>,
    viewport: Option<Viewport>,
    render_calls: usize,
    target_count: usize,
    next_target_id: u32,
}

impl MockRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_pixel_ratio(width, height, 1.0)
    }

    pub fn with_pixel_ratio(width: u32, height: u32, pixel_ratio: f32) -> Self {
        Self {
            commands: Vec::new(),
            surface: vec![Vec4::ZERO; width as usize * height as usize],
            release_log: Arc::new(Mutex::new(Vec::new())),
            fail_render_at: None,
            fail_target_at: None,
            fail_output_size: false,
            output_size: (width, height),
            pixel_ratio,
            scissor_test: false,
            scissor: None,
            viewport: None,
            render_calls: 0,
            target_count: 0,
            next_target_id: 1,
        }
    }

    /// Ids of released targets, in release order
    pub fn released_targets(&self) -> Vec<u32> {
        self.release_log.lock().unwrap().clone()
    }

    /// Recorded scene render calls only
    pub fn render_commands(&self) -> Vec<&MockCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, MockCommand::Render { .. }))
            .collect()
    }

    pub fn created_targets(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, MockCommand::CreateTarget { .. }))
            .count()
    }

    pub fn is_scissor_test_enabled(&self) -> bool {
        self.scissor_test
    }

    pub fn surface_pixel(&self, x: u32, y: u32) -> Vec4 {
        self.surface[(y * self.output_size.0 + x) as usize]
    }

    /// Pixels of row `y` of the output surface
    pub fn surface_row(&self, y: u32) -> &[Vec4] {
        let width = self.output_size.0 as usize;
        let start = y as usize * width;
        &self.surface[start..start + width]
    }

    fn active_scissor(&self) -> Option<Rect2D> {
        if self.scissor_test { self.scissor } else { None }
    }

    /// Fill the surface, restricted to the scissor rect when the test is on
    fn fill_surface(&mut self, color: Vec4) {
        let (width, height) = self.output_size;
        let (x0, y0, x1, y1) = match self.active_scissor() {
            Some(rect) => (
                rect.x.max(0) as u32,
                rect.y.max(0) as u32,
                (rect.x.max(0) as u32 + rect.width).min(width),
                (rect.y.max(0) as u32 + rect.height).min(height),
            ),
            None => (0, 0, width, height),
        };
        for y in y0..y1 {
            for x in x0..x1 {
                self.surface[(y * width + x) as usize] = color;
            }
        }
    }
}

impl Renderer for MockRenderer {
    type Scene = MockScene;
    type Target = MockRenderTarget;

    fn render(
        &mut self,
        scene: &MockScene,
        camera: &RenderCamera,
        target: Option<&mut MockRenderTarget>,
        clear: bool,
    ) -> Result<()> {
        let call = self.render_calls;
        self.render_calls += 1;
        if self.fail_render_at == Some(call) {
            engine_bail!("galaxy3d::mock", "render: injected failure on call {}", call);
        }

        let color = scene.color_for(camera.layers());
        let target_id = match target {
            Some(target) => {
                if target.is_released() {
                    return Err(Error::InvalidResource(
                        format!("render target {} was released", target.id)));
                }
                target.pixels.fill(color);
                Some(target.id)
            }
            None => {
                self.fill_surface(color);
                None
            }
        };

        self.commands.push(MockCommand::Render {
            layers: camera.layers(),
            target: target_id,
            clear,
            scissor: self.active_scissor(),
            viewport: self.viewport,
            projection: *camera.projection_matrix(),
            position: camera.position(),
        });
        Ok(())
    }

    fn composite(&mut self, pass: &CompositePass<'_, MockRenderTarget>) -> Result<()> {
        let (left, right) = (pass.left(), pass.right());
        let (width, height) = self.output_size;
        if left.width != width || left.height != height || right.width != width || right.height != height {
            engine_bail!("galaxy3d::mock",
                "composite: targets {}x{} do not match the {}x{} surface",
                left.width, left.height, width, height);
        }

        let anaglyph = match pass {
            CompositePass::Interlaced { .. } => {
                interlace_in_place(&mut self.surface, &left.pixels, &right.pixels, width, height)?;
                false
            }
            CompositePass::Anaglyph { mix, .. } => {
                anaglyph_in_place(&mut self.surface, &left.pixels, &right.pixels, mix, width, height)?;
                true
            }
        };

        self.commands.push(MockCommand::Composite {
            left: left.id,
            right: right.id,
            anaglyph,
        });
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.fill_surface(Vec4::ZERO);
        self.commands.push(MockCommand::Clear { scissor: self.active_scissor() });
        Ok(())
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.viewport = Some(viewport);
        self.commands.push(MockCommand::SetViewport(viewport));
        Ok(())
    }

    fn set_scissor(&mut self, scissor: Rect2D) -> Result<()> {
        self.scissor = Some(scissor);
        self.commands.push(MockCommand::SetScissor(scissor));
        Ok(())
    }

    fn set_scissor_test(&mut self, enabled: bool) -> Result<()> {
        self.scissor_test = enabled;
        self.commands.push(MockCommand::SetScissorTest(enabled));
        Ok(())
    }

    fn output_size(&self) -> (u32, u32) {
        self.output_size
    }

    fn set_output_size(&mut self, width: u32, height: u32) -> Result<()> {
        if self.fail_output_size {
            engine_bail!("galaxy3d::mock", "set_output_size: injected failure ({}x{})", width, height);
        }
        self.output_size = (width, height);
        self.surface = vec![Vec4::ZERO; width as usize * height as usize];
        self.commands.push(MockCommand::SetOutputSize(width, height));
        Ok(())
    }

    fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    fn create_render_target(&mut self, desc: &RenderTargetDesc) -> Result<MockRenderTarget> {
        let index = self.target_count;
        self.target_count += 1;
        if self.fail_target_at == Some(index) {
            return Err(Error::OutOfMemory);
        }

        let id = self.next_target_id;
        self.next_target_id += 1;
        self.commands.push(MockCommand::CreateTarget {
            id,
            width: desc.width,
            height: desc.height,
        });
        Ok(MockRenderTarget::new(id, desc, Arc::clone(&self.release_log)))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_renderer_tests.rs"]
mod tests;
