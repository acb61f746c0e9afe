//! Time-based interpolation primitives for camera motion.

/// Easing curves mapping linear time onto eased progress.
pub mod easing;
/// A single camera transition between two poses.
pub mod transition;

pub use easing::EasingFunction;
pub use transition::{TransitionSession, DEFAULT_TRANSITION};
