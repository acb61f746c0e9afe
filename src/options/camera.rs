use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::animation::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and view-transition parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Initial viewport aspect ratio (width / height).
    #[schemars(skip)]
    pub aspect: f32,
    /// Length of a view-to-view camera transition in seconds.
    #[schemars(title = "Transition Time", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub transition_secs: f32,
    /// Easing curve for view transitions.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl CameraOptions {
    /// Transition length as a [`Duration`]; negative or non-finite values
    /// collapse to zero (instant cut).
    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.transition_secs.max(0.0))
            .unwrap_or(Duration::ZERO)
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 40.0,
            znear: 0.1,
            zfar: 100.0,
            aspect: 16.0 / 9.0,
            transition_secs: 1.5,
            easing: EasingFunction::DEFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_transition_is_one_and_a_half_seconds() {
        let opts = CameraOptions::default();
        assert_eq!(opts.transition_duration(), Duration::from_millis(1500));
    }

    #[test]
    fn bad_transition_lengths_collapse_to_zero() {
        let mut opts = CameraOptions::default();
        opts.transition_secs = -3.0;
        assert_eq!(opts.transition_duration(), Duration::ZERO);
        opts.transition_secs = f32::NAN;
        assert_eq!(opts.transition_duration(), Duration::ZERO);
    }
}
