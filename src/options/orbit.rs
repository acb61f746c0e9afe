use std::f32::consts::{FRAC_PI_2, PI};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ShowroomError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
/// Orbit-control limits and turntable settings.
pub struct OrbitOptions {
    /// Spin the car slowly while no transition is running.
    #[schemars(title = "Auto Rotate")]
    pub auto_rotate: bool,
    /// Turntable speed; 1.0 is one revolution per minute.
    #[schemars(title = "Auto Rotate Speed", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub auto_rotate_speed: f32,
    /// Smallest polar angle (radians from straight above).
    #[schemars(skip)]
    pub min_polar_angle: f32,
    /// Largest polar angle; π/2 keeps the camera above the ground.
    #[schemars(skip)]
    pub max_polar_angle: f32,
    /// Whether scroll zoom is allowed.
    #[schemars(title = "Enable Zoom")]
    pub enable_zoom: bool,
    /// Closest allowed camera distance from the target.
    #[schemars(title = "Min Distance", range(min = 0.5, max = 10.0), extend("step" = 0.5))]
    pub min_distance: f32,
    /// Farthest allowed camera distance from the target.
    #[schemars(title = "Max Distance", range(min = 1.0, max = 50.0), extend("step" = 0.5))]
    pub max_distance: f32,
    /// Drag rotation in radians per pixel.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            auto_rotate_speed: 0.5,
            min_polar_angle: 0.0,
            max_polar_angle: FRAC_PI_2,
            enable_zoom: true,
            min_distance: 3.0,
            max_distance: 10.0,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
        }
    }
}

impl OrbitOptions {
    /// Reject limits the controller cannot clamp against.
    ///
    /// Distances must be finite with `0 < min_distance <= max_distance`,
    /// polar limits finite with `0 <= min <= max <= π`, and speeds finite.
    pub fn validate(&self) -> Result<(), ShowroomError> {
        let invalid = |msg: String| Err(ShowroomError::Configuration(msg));

        let (min_d, max_d) = (self.min_distance, self.max_distance);
        if !min_d.is_finite()
            || !max_d.is_finite()
            || min_d <= 0.0
            || min_d > max_d
        {
            return invalid(format!(
                "orbit distance limits [{min_d}, {max_d}] must be finite and \
                 satisfy 0 < min <= max"
            ));
        }

        let (min_p, max_p) = (self.min_polar_angle, self.max_polar_angle);
        if !min_p.is_finite()
            || !max_p.is_finite()
            || min_p < 0.0
            || min_p > max_p
            || max_p > PI
        {
            return invalid(format!(
                "orbit polar limits [{min_p}, {max_p}] must lie within [0, π] \
                 with min <= max"
            ));
        }

        let speeds = [
            ("auto_rotate_speed", self.auto_rotate_speed),
            ("rotate_speed", self.rotate_speed),
            ("zoom_speed", self.zoom_speed),
        ];
        if let Some((name, value)) = speeds.iter().find(|(_, v)| !v.is_finite()) {
            return invalid(format!("orbit {name} must be finite, got {value}"));
        }
        Ok(())
    }
}
