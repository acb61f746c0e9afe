//! Command dispatch for ShowroomEngine

use web_time::Instant;

use super::{ShowroomCommand, ShowroomEngine};
use crate::camera::pose::CameraPose;
use crate::camera::presets::ViewId;
use crate::camera::sync::OrbitControls;
use crate::configurator::PaintColor;
use crate::error::ShowroomError;

impl ShowroomEngine {
    /// Apply one user command at time `now`.
    ///
    /// View selections start (or supersede) a camera transition
    /// synchronously; model and color changes are visible in the next
    /// frame. Rejected selections leave every piece of state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ShowroomError::InvalidSelection`] for a model index outside
    /// the catalog or a view without a preset.
    pub fn execute(
        &mut self,
        command: ShowroomCommand,
        now: Instant,
    ) -> Result<(), ShowroomError> {
        if command.is_manual_camera() && self.choreographer.is_animating() {
            log::debug!("{command:?} ignored during view transition");
            return Ok(());
        }

        match command {
            ShowroomCommand::SelectModel { index } => {
                if self.state.set_model(index)? {
                    log::debug!("model -> {index}");
                }
            }
            ShowroomCommand::NextModel => {
                let _ = self.state.next_model();
            }
            ShowroomCommand::PreviousModel => {
                let _ = self.state.previous_model();
            }
            ShowroomCommand::SelectColor { color } => {
                if self.state.set_color(color) {
                    log::debug!("paint -> {color}");
                }
            }
            ShowroomCommand::NextColor => {
                let next = self.next_swatch();
                let _ = self.state.set_color(next);
            }
            ShowroomCommand::SelectView { view } => self.select_view(view, now)?,
            ShowroomCommand::NextView => {
                let next = self.next_view();
                self.select_view(next, now)?;
            }
            ShowroomCommand::ToggleAutoRotate => {
                let enabled = !self.orbit.auto_rotate_enabled();
                self.orbit.set_auto_rotate(enabled);
                log::debug!("auto-rotate {}", if enabled { "on" } else { "off" });
            }
            ShowroomCommand::RotateCamera { delta } => {
                self.orbit.rotate(delta, &mut self.camera);
            }
            ShowroomCommand::Zoom { delta } => {
                self.orbit.zoom(delta, &mut self.camera);
            }
        }
        Ok(())
    }

    /// Set the active view and let the choreographer react to the change.
    fn select_view(
        &mut self,
        view: ViewId,
        now: Instant,
    ) -> Result<(), ShowroomError> {
        if !self.state.set_view(view)? {
            return Ok(());
        }
        let live = CameraPose::new(self.camera.eye, self.orbit.target());
        let _ = self.choreographer.observe(
            self.state.active_view(),
            &self.presets,
            live,
            now,
        )?;
        Ok(())
    }

    /// Palette entry after the current paint, or the first swatch when the
    /// current paint is not in the palette.
    fn next_swatch(&self) -> PaintColor {
        let current = self.state.paint_color();
        let next = self
            .palette
            .iter()
            .position(|c| *c == current)
            .map_or(0, |i| (i + 1) % self.palette.len());
        self.palette[next]
    }

    /// UI view after the active one, wrapping around.
    fn next_view(&self) -> ViewId {
        let views = self.presets.ui_views();
        let active = self.state.active_view();
        views
            .iter()
            .position(|v| *v == active)
            .and_then(|i| views.get((i + 1) % views.len()))
            .or_else(|| views.first())
            .copied()
            .unwrap_or(active)
    }
}
