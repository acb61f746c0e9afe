//! A single time-bounded camera transition.

use web_time::{Duration, Instant};

use super::easing::EasingFunction;
use crate::camera::pose::CameraPose;

/// Default camera transition length.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(1500);

/// Interpolation from one pose to another over a fixed duration.
///
/// Position and look-at are driven by the same clock and the same eased
/// fraction, so the orbit stays geometrically consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSession {
    from: CameraPose,
    to: CameraPose,
    start: Instant,
    duration: Duration,
    easing: EasingFunction,
}

impl TransitionSession {
    /// Start a transition at `start`.
    #[must_use]
    pub fn new(
        from: CameraPose,
        to: CameraPose,
        start: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Pose the transition starts from.
    #[must_use]
    pub fn from(&self) -> CameraPose {
        self.from
    }

    /// Pose the transition ends at.
    #[must_use]
    pub fn to(&self) -> CameraPose {
        self.to
    }

    /// When the transition started.
    #[must_use]
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Total length of the transition.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Easing curve applied to the time fraction.
    #[must_use]
    pub fn easing(&self) -> EasingFunction {
        self.easing
    }

    /// Linear time fraction in `[0, 1]`. A zero duration is complete
    /// immediately.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Whether the transition has reached `t = 1` at `now`.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Interpolated pose at `now`: `from` exactly at `t = 0`, `to` exactly
    /// at `t = 1`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> CameraPose {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from.lerp(&self.to, self.easing.evaluate(t))
    }
}
