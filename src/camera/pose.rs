use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Camera position plus the point it looks at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Look-at target in world space.
    pub look_at: Vec3,
}

impl CameraPose {
    /// Create a pose from an eye position and a look-at target.
    #[must_use]
    pub const fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    /// Interpolate position and look-at independently with the same
    /// fraction `s`. `s = 0` returns `self` exactly.
    #[must_use]
    pub fn lerp(&self, other: &Self, s: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, s),
            look_at: self.look_at.lerp(other.look_at, s),
        }
    }

    /// Component-wise approximate equality for both vectors.
    #[must_use]
    pub fn abs_diff_eq(&self, other: &Self, max_abs_diff: f32) -> bool {
        self.position.abs_diff_eq(other.position, max_abs_diff)
            && self.look_at.abs_diff_eq(other.look_at, max_abs_diff)
    }
}
