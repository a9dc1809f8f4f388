/// PerspectiveCamera - the monocular reference camera.
///
/// Holds the intrinsics the stereo rig reads every frame (fov, aspect,
/// near, far, focus distance, optional stereo base) plus the world
/// transform. Values are validated when set; the projection matrix is only
/// rebuilt by an explicit `update_projection_matrix()` call.

use glam::{Mat4, Vec3};
use crate::error::Result;
use crate::engine_param_bail;
use super::render_camera::{RenderCamera, EyeLayers};

/// Focus distance of a newly created camera
pub const DEFAULT_FOCUS: f32 = 10.0;

/// Perspective camera driven by the host application.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view, in degrees
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
    /// Distance of the zero-parallax plane
    focus: f32,
    /// Per-camera interocular distance, overrides the rig separation
    base: Option<f32>,
    world_matrix: Mat4,
    projection_matrix: Mat4,
}

impl PerspectiveCamera {
    /// Create a camera at the origin with the given intrinsics.
    ///
    /// Focus defaults to `DEFAULT_FOCUS`, no stereo base is set.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if fov is outside (0, 180),
    /// aspect is not > 0, or near/far do not satisfy 0 < near < far.
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Result<Self> {
        Self::check_fov(fov)?;
        Self::check_aspect(aspect)?;
        Self::check_clip_planes(near, far)?;

        let mut camera = Self {
            fov,
            aspect,
            near,
            far,
            focus: DEFAULT_FOCUS,
            base: None,
            world_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        Ok(camera)
    }

    // ===== VALIDATION =====

    fn check_fov(fov: f32) -> Result<()> {
        if !(fov > 0.0 && fov < 180.0) {
            engine_param_bail!("galaxy3d::camera::PerspectiveCamera",
                "Field of view must be in (0, 180) degrees (got {})", fov);
        }
        Ok(())
    }

    fn check_aspect(aspect: f32) -> Result<()> {
        if !(aspect > 0.0 && aspect.is_finite()) {
            engine_param_bail!("galaxy3d::camera::PerspectiveCamera",
                "Aspect ratio must be > 0 (got {})", aspect);
        }
        Ok(())
    }

    fn check_clip_planes(near: f32, far: f32) -> Result<()> {
        if !(near > 0.0 && far > near && far.is_finite()) {
            engine_param_bail!("galaxy3d::camera::PerspectiveCamera",
                "Clip planes must satisfy 0 < near < far (got near={}, far={})", near, far);
        }
        Ok(())
    }

    // ===== GETTERS =====

    /// Vertical field of view, in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Distance at which both eyes converge (zero parallax).
    pub fn focus(&self) -> f32 {
        self.focus
    }

    /// Per-camera stereo base, if any.
    pub fn base(&self) -> Option<f32> {
        self.base
    }

    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    /// Projection matrix as of the last `update_projection_matrix()`.
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        self.world_matrix.w_axis.truncate()
    }

    // ===== SETTERS =====

    pub fn set_fov(&mut self, fov: f32) -> Result<()> {
        Self::check_fov(fov)?;
        self.fov = fov;
        Ok(())
    }

    pub fn set_aspect(&mut self, aspect: f32) -> Result<()> {
        Self::check_aspect(aspect)?;
        self.aspect = aspect;
        Ok(())
    }

    pub fn set_clip_planes(&mut self, near: f32, far: f32) -> Result<()> {
        Self::check_clip_planes(near, far)?;
        self.near = near;
        self.far = far;
        Ok(())
    }

    /// Set the focus distance. Must be > 0.
    pub fn set_focus(&mut self, focus: f32) -> Result<()> {
        if !(focus > 0.0 && focus.is_finite()) {
            engine_param_bail!("galaxy3d::camera::PerspectiveCamera",
                "Focus distance must be > 0 (got {})", focus);
        }
        self.focus = focus;
        Ok(())
    }

    /// Set or clear the per-camera stereo base. Must be >= 0 when set.
    pub fn set_base(&mut self, base: Option<f32>) -> Result<()> {
        if let Some(value) = base {
            if !(value >= 0.0 && value.is_finite()) {
                engine_param_bail!("galaxy3d::camera::PerspectiveCamera",
                    "Stereo base must be >= 0 (got {})", value);
            }
        }
        self.base = base;
        Ok(())
    }

    pub fn set_world_matrix(&mut self, world: Mat4) {
        self.world_matrix = world;
    }

    /// Place the camera at `eye` looking at `target`.
    pub fn look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.world_matrix = Mat4::look_at_rh(eye, target, up).inverse();
    }

    /// Rebuild the projection matrix from fov, aspect, near and far.
    pub fn update_projection_matrix(&mut self) {
        self.projection_matrix = Mat4::perspective_rh(
            self.fov.to_radians(),
            self.aspect,
            self.near,
            self.far,
        );
    }

    /// Mono render camera for this frame.
    pub fn render_camera(&self) -> RenderCamera {
        RenderCamera::new(self.world_matrix, self.projection_matrix, EyeLayers::DEFAULT)
    }
}

#[cfg(test)]
#[path = "perspective_camera_tests.rs"]
mod tests;
