use glam::{Mat4, Vec3};
use serde::Serialize;

use super::pose::CameraPose;
use crate::options::CameraOptions;

/// Squared sine below which the view direction counts as parallel to `up`.
const PARALLEL_EPSILON: f32 = 1e-8;

/// Live perspective camera read by the renderer every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Camera {
    /// Camera placed at `pose` with projection settings from `options`.
    #[must_use]
    pub fn from_options(options: &CameraOptions, pose: CameraPose) -> Self {
        Self {
            eye: pose.position,
            target: pose.look_at,
            up: Vec3::Y,
            aspect: options.aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Current eye position and look-at target.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.eye, self.target)
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Build the combined view-projection matrix.
    ///
    /// Stays finite for degenerate poses: a zero-length view direction looks
    /// down -Z, and a view direction parallel to `up` borrows an orthogonal
    /// up vector.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let dir = (self.target - self.eye).normalize_or(Vec3::NEG_Z);
        let up = if dir.cross(self.up).length_squared() < PARALLEL_EPSILON {
            dir.any_orthonormal_vector()
        } else {
            self.up
        };
        let view = Mat4::look_to_rh(self.eye, dir, up);
        // [0,1] depth range
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [0.0, 0.0, -1.0],
            fovy: 40.0,
        }
    }

    /// Uniform for the given camera's current state.
    #[must_use]
    pub fn from_camera(camera: &Camera) -> Self {
        let mut uniform = Self::new();
        uniform.update_view_proj(camera);
        uniform
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.eye.to_array();
        self.aspect = camera.aspect;
        // Eye and target coincide only for a degenerate pose
        let forward = (camera.target - camera.eye).normalize_or(Vec3::NEG_Z);
        self.forward = forward.to_array();
        self.fovy = camera.fovy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_tracks_camera_eye_and_forward() {
        let pose = CameraPose::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let camera = Camera::from_options(&CameraOptions::default(), pose);
        let uniform = CameraUniform::from_camera(&camera);
        assert_eq!(uniform.position, [0.0, 0.0, 5.0]);
        assert_eq!(uniform.forward, [0.0, 0.0, -1.0]);
        assert_eq!(uniform.fovy, 40.0);
    }

    #[test]
    fn matrix_is_finite_looking_straight_down() {
        let camera = Camera::from_options(
            &CameraOptions::default(),
            CameraPose::new(Vec3::new(0.0, 0.5, 0.0), Vec3::ZERO),
        );
        assert!(camera.build_matrix().is_finite());

        let coincident = Camera::from_options(
            &CameraOptions::default(),
            CameraPose::new(Vec3::ONE, Vec3::ONE),
        );
        assert!(coincident.build_matrix().is_finite());
    }

    #[test]
    fn preset_midpoints_give_finite_matrices() {
        let views = crate::camera::presets::ViewId::ALL;
        for a in views {
            for b in views {
                let pose = a.builtin_pose().lerp(&b.builtin_pose(), 0.5);
                let camera = Camera::from_options(&CameraOptions::default(), pose);
                let uniform = CameraUniform::from_camera(&camera);
                assert!(
                    uniform.view_proj.iter().flatten().all(|v| v.is_finite()),
                    "{a} -> {b}"
                );
            }
        }
    }

    #[test]
    fn uniform_is_plain_bytes() {
        let uniform = CameraUniform::new();
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 96);
    }

    #[test]
    fn resize_ignores_zero_height() {
        let mut camera = Camera::from_options(
            &CameraOptions::default(),
            CameraPose::new(Vec3::Z, Vec3::ZERO),
        );
        camera.resize(1920, 1080);
        assert!((camera.aspect - 16.0 / 9.0).abs() < 1e-6);
        camera.resize(1920, 0);
        assert!((camera.aspect - 16.0 / 9.0).abs() < 1e-6);
    }
}
