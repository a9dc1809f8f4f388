/// RenderCamera - passive data container handed to one render pass.
///
/// The RenderCamera computes nothing beyond keeping its view matrix in sync
/// with its world transform. The stereo rig owns one per eye and rewrites it
/// every frame; `PerspectiveCamera::render_camera()` builds the mono one.

use bitflags::bitflags;
use glam::{Mat4, Vec3};

bitflags! {
    /// Visibility layers enabled on a render camera.
    ///
    /// Every camera sees `DEFAULT`. Eye cameras additionally enable their
    /// own layer so the host can show an object to one eye only.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EyeLayers: u32 {
        /// Layer 0, seen by every camera
        const DEFAULT = 1 << 0;
        /// Layer 1, seen by the left eye only
        const LEFT = 1 << 1;
        /// Layer 2, seen by the right eye only
        const RIGHT = 1 << 2;
    }
}

/// Camera snapshot for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCamera {
    world_matrix: Mat4,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    layers: EyeLayers,
}

impl RenderCamera {
    /// Create a new render camera.
    ///
    /// The view matrix is derived from `world` (its inverse).
    pub fn new(world: Mat4, projection: Mat4, layers: EyeLayers) -> Self {
        Self {
            world_matrix: world,
            view_matrix: world.inverse(),
            projection_matrix: projection,
            layers,
        }
    }

    // ===== GETTERS =====

    /// World transform of the camera.
    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    /// View matrix (inverse of the world transform).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix.
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        self.world_matrix.w_axis.truncate()
    }

    /// Layers this camera renders.
    pub fn layers(&self) -> EyeLayers {
        self.layers
    }

    // ===== SETTERS =====

    /// Set the world transform (the view matrix follows).
    pub fn set_world_matrix(&mut self, world: Mat4) {
        self.world_matrix = world;
        self.view_matrix = world.inverse();
    }

    /// Set the projection matrix.
    pub fn set_projection(&mut self, projection: Mat4) {
        self.projection_matrix = projection;
    }
}

#[cfg(test)]
#[path = "render_camera_tests.rs"]
mod tests;
