/// EyeCamera - one of the two cameras derived by the stereo rig.

use glam::{Mat4, Vec3};
use crate::camera::{RenderCamera, EyeLayers};

/// Which eye a camera renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Eye {
    Left,
    Right,
}

impl Eye {
    /// Sign of the lateral offset along the reference camera's local X axis
    pub fn sign(self) -> f32 {
        match self {
            Eye::Left => -1.0,
            Eye::Right => 1.0,
        }
    }

    /// Layers enabled on this eye's camera
    pub fn layers(self) -> EyeLayers {
        match self {
            Eye::Left => EyeLayers::DEFAULT | EyeLayers::LEFT,
            Eye::Right => EyeLayers::DEFAULT | EyeLayers::RIGHT,
        }
    }

    /// The other eye
    pub fn opposite(self) -> Eye {
        match self {
            Eye::Left => Eye::Right,
            Eye::Right => Eye::Left,
        }
    }
}

/// Horizontal extent of an eye frustum on the near plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HorizontalBounds {
    pub xmin: f32,
    pub xmax: f32,
}

impl HorizontalBounds {
    /// Frustum width on the near plane
    pub fn width(&self) -> f32 {
        self.xmax - self.xmin
    }
}

/// Eye camera owned by a `StereoCameraRig`
///
/// Read-only outside the rig; the compositor only hands
/// `render_camera()` to the renderer.
#[derive(Debug, Clone)]
pub struct EyeCamera {
    eye: Eye,
    camera: RenderCamera,
    bounds: HorizontalBounds,
}

impl EyeCamera {
    pub(crate) fn new(eye: Eye) -> Self {
        Self {
            eye,
            camera: RenderCamera::new(Mat4::IDENTITY, Mat4::IDENTITY, eye.layers()),
            bounds: HorizontalBounds::default(),
        }
    }

    pub fn eye(&self) -> Eye {
        self.eye
    }

    /// Camera snapshot to pass to `Renderer::render()`
    pub fn render_camera(&self) -> &RenderCamera {
        &self.camera
    }

    /// Asymmetric projection matrix
    pub fn projection_matrix(&self) -> &Mat4 {
        self.camera.projection_matrix()
    }

    pub fn world_matrix(&self) -> &Mat4 {
        self.camera.world_matrix()
    }

    pub fn view_matrix(&self) -> &Mat4 {
        self.camera.view_matrix()
    }

    pub fn position(&self) -> Vec3 {
        self.camera.position()
    }

    pub fn layers(&self) -> EyeLayers {
        self.camera.layers()
    }

    /// Near-plane bounds used to build the projection
    pub fn horizontal_bounds(&self) -> HorizontalBounds {
        self.bounds
    }

    pub(crate) fn set_projection(&mut self, projection: Mat4, bounds: HorizontalBounds) {
        self.camera.set_projection(projection);
        self.bounds = bounds;
    }

    pub(crate) fn set_world_matrix(&mut self, world: Mat4) {
        self.camera.set_world_matrix(world);
    }
}
