use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use super::core::Camera;
use super::sync::OrbitControls;
use crate::options::OrbitOptions;

/// Keeps the polar angle away from the poles where `look_at` degenerates.
const POLAR_EPSILON: f32 = 1e-4;

/// Orbit camera control in spherical coordinates around a target.
///
/// Drag rotation clamps the polar angle, zoom clamps the distance, and the
/// turntable advances the azimuth. Panning is not offered.
#[derive(Debug, Clone)]
pub struct OrbitController {
    target: Vec3,
    radius: f32,
    /// Azimuth around +Y, measured from +Z toward +X.
    azimuth: f32,
    /// Angle from +Y.
    polar: f32,
    auto_rotate: bool,
    options: OrbitOptions,
}

impl OrbitController {
    /// Controller orbiting `camera.target`, starting from the camera's
    /// current eye.
    #[must_use]
    pub fn new(options: &OrbitOptions, camera: &Camera) -> Self {
        let mut controller = Self {
            target: camera.target,
            radius: 0.0,
            azimuth: 0.0,
            polar: 0.0,
            auto_rotate: options.auto_rotate,
            options: options.clone(),
        };
        controller.sync_spherical(camera);
        controller
    }

    /// Distance from target to eye.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Polar angle in radians from straight above.
    #[must_use]
    pub fn polar(&self) -> f32 {
        self.polar
    }

    /// Azimuth in radians.
    #[must_use]
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Whether the turntable is on.
    #[must_use]
    pub fn auto_rotate_enabled(&self) -> bool {
        self.auto_rotate
    }

    /// Turn the turntable on or off.
    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    /// Orbit by a mouse drag of `delta` pixels.
    pub fn rotate(&mut self, delta: Vec2, camera: &mut Camera) {
        self.azimuth -= delta.x * self.options.rotate_speed;
        self.polar -= delta.y * self.options.rotate_speed;
        self.polar = self.polar.clamp(self.min_polar(), self.max_polar());
        self.write_camera(camera);
    }

    /// Dolly toward (positive) or away from (negative) the target.
    pub fn zoom(&mut self, delta: f32, camera: &mut Camera) {
        if !self.options.enable_zoom {
            return;
        }
        self.radius *= 1.0 - delta * self.options.zoom_speed;
        self.radius = self
            .radius
            .clamp(self.options.min_distance, self.options.max_distance);
        self.write_camera(camera);
    }

    /// Advance the turntable by `dt` seconds. Speed 1.0 is one revolution
    /// per minute. Returns whether the camera moved.
    pub fn auto_rotate(&mut self, dt: f32, camera: &mut Camera) -> bool {
        if !self.auto_rotate || dt <= 0.0 {
            return false;
        }
        self.azimuth += TAU / 60.0 * self.options.auto_rotate_speed * dt;
        self.azimuth = self.azimuth.rem_euclid(TAU);
        self.write_camera(camera);
        true
    }

    fn min_polar(&self) -> f32 {
        self.options.min_polar_angle.max(POLAR_EPSILON)
    }

    fn max_polar(&self) -> f32 {
        self.options
            .max_polar_angle
            .min(PI - POLAR_EPSILON)
            .max(self.min_polar())
    }

    /// Re-derive radius and angles from the camera's eye.
    fn sync_spherical(&mut self, camera: &Camera) {
        let offset = camera.eye - self.target;
        self.radius = offset.length();
        if self.radius > 0.0 {
            self.azimuth = offset.x.atan2(offset.z);
            self.polar = (offset.y / self.radius).clamp(-1.0, 1.0).acos();
        }
    }

    fn write_camera(&self, camera: &mut Camera) {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = self.azimuth.sin_cos();
        let offset = Vec3::new(
            sin_polar * sin_azimuth,
            cos_polar,
            sin_polar * cos_azimuth,
        ) * self.radius;
        camera.eye = self.target + offset;
        camera.target = self.target;
    }
}

impl OrbitControls for OrbitController {
    fn target(&self) -> Vec3 {
        self.target
    }

    fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Point the camera at the target and re-derive the spherical state
    /// from wherever the eye currently is. The eye itself is not moved.
    fn update(&mut self, camera: &mut Camera) {
        camera.target = self.target;
        self.sync_spherical(camera);
    }
}
