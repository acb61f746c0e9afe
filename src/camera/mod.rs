//! Camera system for the showroom.
//!
//! Provides the live perspective camera, named view presets, an orbit
//! controller, and the choreographer that animates between views.

/// Animates the camera between view presets.
pub mod choreographer;
/// Orbit controller: drag rotation, zoom, turntable.
pub mod controller;
/// Live camera and GPU uniform types.
pub mod core;
/// Camera position plus look-at target.
pub mod pose;
/// Named viewpoints and the preset table.
pub mod presets;
/// Orbit-control trait and the per-tick look-at adapter.
pub mod sync;

pub use choreographer::{CameraChoreographer, ChoreographerState};
pub use controller::OrbitController;
pub use pose::CameraPose;
pub use presets::{ViewId, ViewPreset, ViewPresetTable};
pub use sync::{ControlsSync, OrbitControls};
