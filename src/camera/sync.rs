//! Seam between camera animation and the orbit-control component.

use glam::Vec3;

use super::core::Camera;

/// An orbit-control component: owns a look-at target and re-derives its
/// internal transform from the live camera on [`update`](Self::update).
///
/// Input handling (drag-to-orbit, zoom) is the implementor's own business.
pub trait OrbitControls {
    /// Current look-at target.
    fn target(&self) -> Vec3;

    /// Replace the look-at target without touching the camera.
    fn set_target(&mut self, target: Vec3);

    /// Apply the target to `camera` and recompute derived state.
    fn update(&mut self, camera: &mut Camera);
}

/// Pushes intermediate look-at values into an [`OrbitControls`] each
/// animation tick.
///
/// Borrowed for a single frame; it never starts or stops animations.
pub struct ControlsSync<'a> {
    controls: &'a mut dyn OrbitControls,
    applied: u32,
}

impl<'a> ControlsSync<'a> {
    /// Wrap a control component for the current frame.
    pub fn new(controls: &'a mut dyn OrbitControls) -> Self {
        Self {
            controls,
            applied: 0,
        }
    }

    /// Set the control target to `look_at` and ask the control to refresh.
    pub fn apply(&mut self, camera: &mut Camera, look_at: Vec3) {
        self.controls.set_target(look_at);
        self.controls.update(camera);
        self.applied += 1;
    }

    /// Number of `apply` calls made through this adapter.
    #[must_use]
    pub fn applied(&self) -> u32 {
        self.applied
    }
}
