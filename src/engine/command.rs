//! The showroom's complete interactive vocabulary.
//!
//! Button presses, key bindings, mouse gestures and scripted steps all
//! become a `ShowroomCommand` passed to
//! [`ShowroomEngine::execute`](super::ShowroomEngine::execute).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::camera::presets::ViewId;
use crate::configurator::PaintColor;

/// A discrete or parameterized operation the engine can perform.
///
/// ```ignore
/// engine.execute(ShowroomCommand::SelectView { view: ViewId::Side }, now)?;
/// engine.execute(ShowroomCommand::Zoom { delta: 1.0 }, now)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ShowroomCommand {
    // ── Configurator ────────────────────────────────────────────────
    /// Show the catalog model at `index`.
    SelectModel {
        /// Catalog index.
        index: usize,
    },
    /// Show the next catalog model, wrapping around.
    NextModel,
    /// Show the previous catalog model, wrapping around.
    PreviousModel,
    /// Repaint the model.
    SelectColor {
        /// New paint color.
        color: PaintColor,
    },
    /// Advance to the next palette swatch, wrapping around.
    NextColor,

    // ── Camera ──────────────────────────────────────────────────────
    /// Animate the camera to a named view.
    SelectView {
        /// Target view.
        view: ViewId,
    },
    /// Animate to the next view in the UI list, wrapping around.
    NextView,
    /// Toggle turntable auto-rotation.
    ToggleAutoRotate,
    /// Orbit the camera by `delta` pixels of mouse movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },
    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },
}

impl ShowroomCommand {
    /// Whether this command moves the camera directly, as opposed to
    /// choosing a view for the choreographer to animate to.
    #[must_use]
    pub fn is_manual_camera(&self) -> bool {
        matches!(self, Self::RotateCamera { .. } | Self::Zoom { .. })
    }
}
