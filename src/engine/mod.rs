//! The showroom engine: configurator state, camera choreography and the
//! per-frame tick behind one facade.

mod accessors;
/// Read-side projection for the external renderer.
pub mod bridge;
/// The interactive command vocabulary.
pub mod command;
mod execute;

pub use bridge::{RenderBridge, RenderFrame, SceneDescription};
pub use command::ShowroomCommand;
use web_time::Instant;

use crate::camera::choreographer::CameraChoreographer;
use crate::camera::controller::OrbitController;
use crate::camera::core::Camera;
use crate::camera::presets::{ViewId, ViewPresetTable};
use crate::camera::sync::ControlsSync;
use crate::configurator::{Catalog, ConfiguratorState, PaintColor};
use crate::error::ShowroomError;
use crate::options::Options;

/// Session-scoped controller for one interactive showroom.
///
/// # Construction
///
/// [`ShowroomEngine::new`] validates the catalog, palette, view presets and
/// orbit limits and refuses to start on a configuration error.
///
/// # Frame loop
///
/// The host calls [`frame`](Self::frame) once per rendered frame with a
/// monotonic timestamp and draws the returned [`RenderFrame`]. User actions
/// go through [`execute`](Self::execute) between frames; the configurator
/// state is never touched from inside `frame`.
///
/// # Camera
///
/// Selecting a view animates the camera over the configured transition
/// time. A new selection mid-flight starts from wherever the camera is at
/// that instant. While idle, the turntable slowly orbits the car.
pub struct ShowroomEngine {
    /// Options the session was started with.
    options: Options,
    /// Models on display.
    catalog: Catalog,
    /// Paint swatches offered by the UI.
    palette: Vec<PaintColor>,
    /// Validated view → pose table.
    presets: ViewPresetTable,
    /// Current model, paint and view.
    state: ConfiguratorState,
    /// View-transition driver.
    choreographer: CameraChoreographer,
    /// Orbit-control component the look-at target lives in.
    orbit: OrbitController,
    /// Live camera read by the renderer.
    camera: Camera,
    /// Timestamp of the previous `frame` call.
    last_frame: Option<Instant>,
}

impl ShowroomEngine {
    /// Start a session from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`ShowroomError::Configuration`] for an empty catalog or
    /// palette, a view preset table that is missing a UI view, or orbit
    /// limits that are inverted or not finite.
    pub fn new(options: Options) -> Result<Self, ShowroomError> {
        let catalog = options.catalog.catalog()?;
        let palette = options.catalog.validated_palette()?.to_vec();
        let presets = options.views.table()?;
        options.orbit.validate()?;
        let pose = presets.lookup(ViewId::Default).ok_or_else(|| {
            ShowroomError::Configuration(
                "no camera preset for the 'default' view".to_owned(),
            )
        })?;

        let state = ConfiguratorState::new(
            &catalog,
            &presets,
            options.catalog.default_color,
        );
        let camera = Camera::from_options(&options.camera, pose);
        let orbit = OrbitController::new(&options.orbit, &camera);
        let choreographer = CameraChoreographer::from_options(
            state.active_view(),
            pose,
            &options.camera,
        );

        log::info!(
            "Showroom ready: {} models, {} swatches, {} views",
            catalog.len(),
            palette.len(),
            presets.ui_views().len()
        );

        Ok(Self {
            options,
            catalog,
            palette,
            presets,
            state,
            choreographer,
            orbit,
            camera,
            last_frame: None,
        })
    }

    /// Advance the camera to `now` and return this frame's renderer inputs.
    ///
    /// A running transition writes the camera and the orbit target; while
    /// idle the turntable advances by the time since the previous frame.
    pub fn frame(&mut self, now: Instant) -> RenderFrame {
        let dt = self
            .last_frame
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f32());
        self.last_frame = Some(now);

        let animating = if self.choreographer.is_animating() {
            let mut sync = ControlsSync::new(&mut self.orbit);
            self.choreographer.tick(now, &mut self.camera, &mut sync)
        } else {
            let _ = self.orbit.auto_rotate(dt, &mut self.camera);
            false
        };

        RenderBridge::frame(&self.state, &self.catalog, &self.camera, animating)
    }

    /// Update the camera aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use web_time::Duration;

    use super::*;
    use crate::camera::presets::ViewPreset;
    use crate::camera::sync::OrbitControls;

    fn still_options() -> Options {
        let mut options = Options::default();
        options.orbit.auto_rotate = false;
        options
    }

    #[test]
    fn starts_at_default_view() {
        let engine = ShowroomEngine::new(Options::default()).unwrap();
        assert_eq!(engine.state().active_view(), ViewId::Default);
        assert_eq!(engine.camera().eye, Vec3::new(3.0, -1.0, 4.0));
        assert!(!engine.is_animating());
    }

    #[test]
    fn refuses_to_start_with_missing_preset() {
        let mut options = Options::default();
        options.views.presets.retain(|p| p.view != ViewId::RearQuarter);
        assert!(matches!(
            ShowroomEngine::new(options),
            Err(ShowroomError::Configuration(_))
        ));
    }

    #[test]
    fn refuses_to_start_with_empty_palette() {
        let mut options = Options::default();
        options.catalog.palette.clear();
        assert!(ShowroomEngine::new(options).is_err());
    }

    #[test]
    fn refuses_to_start_with_bad_orbit_limits() {
        for toml in [
            "[orbit]\nmin_distance = 12.0\n",
            "[orbit]\nmax_distance = nan\n",
            "[orbit]\nmax_polar_angle = inf\n",
        ] {
            let options = Options::from_toml(toml).unwrap();
            assert!(
                matches!(
                    ShowroomEngine::new(options),
                    Err(ShowroomError::Configuration(_))
                ),
                "{toml}"
            );
        }
    }

    #[test]
    fn frames_drive_transition_to_completion() {
        let mut engine = ShowroomEngine::new(still_options()).unwrap();
        let t0 = Instant::now();
        let _ = engine.frame(t0);
        engine
            .execute(ShowroomCommand::SelectView { view: ViewId::Side }, t0)
            .unwrap();

        let mut now = t0;
        let mut frames = 0;
        loop {
            now += Duration::from_millis(16);
            frames += 1;
            if !engine.frame(now).animating {
                break;
            }
            assert!(frames < 200, "transition never finished");
        }
        let side = ViewPreset::builtin()[3].pose();
        assert_eq!(engine.live_pose(), side);
        assert_eq!(engine.orbit().target(), side.look_at);
    }

    #[test]
    fn turntable_runs_only_while_idle() {
        let mut engine = ShowroomEngine::new(Options::default()).unwrap();
        let t0 = Instant::now();
        let _ = engine.frame(t0);
        let before = engine.camera().eye;
        let _ = engine.frame(t0 + Duration::from_millis(500));
        assert_ne!(engine.camera().eye, before);

        let t1 = t0 + Duration::from_millis(500);
        engine
            .execute(ShowroomCommand::SelectView { view: ViewId::Top }, t1)
            .unwrap();
        let frame = engine.frame(t1 + Duration::from_millis(1500));
        assert!(!frame.animating);
        assert_eq!(engine.camera().eye, ViewPreset::builtin()[4].position);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut engine = ShowroomEngine::new(Options::default()).unwrap();
        engine.resize(800, 800);
        assert_eq!(engine.camera().aspect, 1.0);
    }
}
