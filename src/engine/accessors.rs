//! Read-only query methods for [`ShowroomEngine`].

use super::{RenderBridge, SceneDescription, ShowroomEngine};
use crate::camera::choreographer::CameraChoreographer;
use crate::camera::controller::OrbitController;
use crate::camera::core::Camera;
use crate::camera::pose::CameraPose;
use crate::camera::presets::ViewPresetTable;
use crate::configurator::{Catalog, ConfiguratorState, PaintColor};
use crate::options::Options;

// ── Configurator ──

impl ShowroomEngine {
    /// Current model, paint and view selection.
    #[must_use]
    pub fn state(&self) -> &ConfiguratorState {
        &self.state
    }

    /// Models on display.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Paint swatches offered by the UI.
    #[must_use]
    pub fn palette(&self) -> &[PaintColor] {
        &self.palette
    }

    /// Scene inputs for the current selection.
    #[must_use]
    pub fn scene(&self) -> SceneDescription {
        RenderBridge::project(&self.state, &self.catalog)
    }
}

// ── Camera ──

impl ShowroomEngine {
    /// Live camera as last written.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Live camera position and look-at target.
    #[must_use]
    pub fn live_pose(&self) -> CameraPose {
        self.camera.pose()
    }

    /// Whether a view transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.choreographer.is_animating()
    }

    /// View-transition driver.
    #[must_use]
    pub fn choreographer(&self) -> &CameraChoreographer {
        &self.choreographer
    }

    /// Orbit-control component.
    #[must_use]
    pub fn orbit(&self) -> &OrbitController {
        &self.orbit
    }

    /// Validated view presets.
    #[must_use]
    pub fn presets(&self) -> &ViewPresetTable {
        &self.presets
    }

    /// Options the session was started with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
