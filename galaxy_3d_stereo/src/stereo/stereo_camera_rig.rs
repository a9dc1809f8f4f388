/// StereoCameraRig - off-axis stereo pair derived from one reference camera.
///
/// Each eye keeps the reference camera's vertical frustum and depth mapping;
/// only the horizontal bounds of the near plane are shifted so that both
/// frustums coincide at the focus distance (zero parallax there). The eyes
/// themselves are offset by half the separation along the reference
/// camera's local X axis.
///
/// Projections are rebuilt only when the intrinsics tuple changes (exact
/// float comparison). World transforms are rebuilt on every `update()`.

use glam::{Mat4, Vec3};
use crate::camera::PerspectiveCamera;
use crate::error::Result;
use crate::{engine_param_bail, engine_trace};
use super::eye_camera::{Eye, EyeCamera, HorizontalBounds};

/// Interocular distance used when nothing else is configured (64 mm)
pub const DEFAULT_SEPARATION: f32 = 0.064;

/// Stereo parameters owned by the rig
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StereoParameters {
    /// Interocular distance, overridden by the camera base when it has one
    pub separation: f32,
    /// Multiplier applied to the camera aspect (0.5 for half-width layouts)
    pub aspect_multiplier: f32,
}

impl Default for StereoParameters {
    fn default() -> Self {
        Self {
            separation: DEFAULT_SEPARATION,
            aspect_multiplier: 1.0,
        }
    }
}

/// Intrinsics the projections were last built from
#[derive(Debug, Clone, Copy, PartialEq)]
struct ProjectionKey {
    focus: f32,
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
    separation: f32,
}

/// Left/right eye cameras derived from a reference camera
#[derive(Debug, Clone)]
pub struct StereoCameraRig {
    parameters: StereoParameters,
    cache: Option<ProjectionKey>,
    left: EyeCamera,
    right: EyeCamera,
    recompute_count: u64,
}

impl Default for StereoCameraRig {
    fn default() -> Self {
        Self::new()
    }
}

impl StereoCameraRig {
    /// Rig with the default separation and an aspect multiplier of 1
    pub fn new() -> Self {
        Self {
            parameters: StereoParameters::default(),
            cache: None,
            left: EyeCamera::new(Eye::Left),
            right: EyeCamera::new(Eye::Right),
            recompute_count: 0,
        }
    }

    /// Rig with a custom separation
    pub fn with_separation(separation: f32) -> Result<Self> {
        let mut rig = Self::new();
        rig.set_separation(separation)?;
        Ok(rig)
    }

    // ===== CONFIGURATION =====

    pub fn parameters(&self) -> StereoParameters {
        self.parameters
    }

    /// Set the interocular distance. Must be finite and >= 0.
    pub fn set_separation(&mut self, separation: f32) -> Result<()> {
        if !(separation >= 0.0 && separation.is_finite()) {
            engine_param_bail!("galaxy3d::stereo::Rig",
                "Separation must be finite and >= 0 (got {})", separation);
        }
        self.parameters.separation = separation;
        self.cache = None;
        Ok(())
    }

    /// Set the aspect multiplier. Must be finite and > 0.
    pub fn set_aspect_multiplier(&mut self, multiplier: f32) -> Result<()> {
        if !(multiplier > 0.0 && multiplier.is_finite()) {
            engine_param_bail!("galaxy3d::stereo::Rig",
                "Aspect multiplier must be > 0 (got {})", multiplier);
        }
        self.parameters.aspect_multiplier = multiplier;
        self.cache = None;
        Ok(())
    }

    // ===== ACCESSORS =====

    pub fn left(&self) -> &EyeCamera {
        &self.left
    }

    pub fn right(&self) -> &EyeCamera {
        &self.right
    }

    pub fn eye(&self, eye: Eye) -> &EyeCamera {
        match eye {
            Eye::Left => &self.left,
            Eye::Right => &self.right,
        }
    }

    /// Number of projection rebuilds since creation
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    /// Separation that applies to `camera` (its base wins over the rig's)
    pub fn effective_separation(&self, camera: &PerspectiveCamera) -> f32 {
        camera.base().unwrap_or(self.parameters.separation)
    }

    // ===== UPDATE =====

    /// Sync both eyes with the reference camera
    ///
    /// The camera's projection matrix must be current
    /// (see `PerspectiveCamera::update_projection_matrix()`).
    pub fn update(&mut self, camera: &PerspectiveCamera) {
        let separation = self.effective_separation(camera);
        let key = ProjectionKey {
            focus: camera.focus(),
            fov: camera.fov(),
            aspect: camera.aspect() * self.parameters.aspect_multiplier,
            near: camera.near(),
            far: camera.far(),
            separation,
        };

        if self.cache != Some(key) {
            debug_assert!(key.focus > 0.0, "focus distance must be > 0");

            let reference = camera.projection_matrix();
            let (left, left_bounds) = off_axis_projection(reference, &key, Eye::Left);
            let (right, right_bounds) = off_axis_projection(reference, &key, Eye::Right);
            self.left.set_projection(left, left_bounds);
            self.right.set_projection(right, right_bounds);

            self.cache = Some(key);
            self.recompute_count += 1;

            engine_trace!("galaxy3d::stereo::Rig",
                "Eye projections rebuilt (focus={}, fov={}, aspect={}, separation={})",
                key.focus, key.fov, key.aspect, key.separation);
        }

        let eye_sep = separation / 2.0;
        let world = *camera.world_matrix();
        self.left.set_world_matrix(world * eye_offset(Eye::Left, eye_sep));
        self.right.set_world_matrix(world * eye_offset(Eye::Right, eye_sep));
    }
}

/// Lateral translation of one eye in the reference camera's local frame
fn eye_offset(eye: Eye, eye_sep: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(eye.sign() * eye_sep, 0.0, 0.0))
}

/// Reference projection with the horizontal scale (element 0) and skew
/// (element 8) replaced by the off-axis values for `eye`
fn off_axis_projection(reference: &Mat4, key: &ProjectionKey, eye: Eye) -> (Mat4, HorizontalBounds) {
    let near = key.near as f64;
    let eye_sep = key.separation as f64 / 2.0;
    let eye_sep_on_projection = eye_sep * near / key.focus as f64;
    let ymax = near * (key.fov as f64 * 0.5).to_radians().tan();
    let half_width = ymax * key.aspect as f64;

    // The left eye frustum shifts towards +X, the right one towards -X
    let shift = -(eye.sign() as f64) * eye_sep_on_projection;
    let xmin = -half_width + shift;
    let xmax = half_width + shift;

    let mut projection = *reference;
    projection.x_axis.x = (2.0 * near / (xmax - xmin)) as f32;
    projection.z_axis.x = ((xmax + xmin) / (xmax - xmin)) as f32;

    let bounds = HorizontalBounds {
        xmin: xmin as f32,
        xmax: xmax as f32,
    };
    (projection, bounds)
}

#[cfg(test)]
#[path = "stereo_camera_rig_tests.rs"]
mod tests;
