//! Turns discrete view selections into continuous camera motion.
//!
//! The choreographer holds one transition slot. Selecting a new view while
//! a transition is in flight replaces the slot with a transition that starts
//! from the pose interpolated at that instant, so rapid input never makes
//! the camera jump.

use web_time::{Duration, Instant};

use super::core::Camera;
use super::pose::CameraPose;
use super::presets::{ViewId, ViewPresetTable};
use super::sync::ControlsSync;
use crate::animation::{EasingFunction, TransitionSession, DEFAULT_TRANSITION};
use crate::error::ShowroomError;
use crate::options::CameraOptions;

/// Observable state of the choreographer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChoreographerState {
    /// No transition in flight.
    Idle,
    /// Moving toward `view`'s preset.
    Animating {
        /// View being moved to.
        view: ViewId,
        /// Linear time fraction in `[0, 1]`. Reads 1.0 once the duration
        /// has elapsed until the next tick lands the camera and goes Idle.
        progress: f32,
    },
}

/// Drives the live camera toward the preset pose of the selected view.
#[derive(Debug, Clone)]
pub struct CameraChoreographer {
    observed_view: ViewId,
    live: CameraPose,
    session: Option<TransitionSession>,
    duration: Duration,
    easing: EasingFunction,
}

impl CameraChoreographer {
    /// Idle choreographer resting at `pose`, having observed `view`.
    #[must_use]
    pub fn new(view: ViewId, pose: CameraPose) -> Self {
        Self {
            observed_view: view,
            live: pose,
            session: None,
            duration: DEFAULT_TRANSITION,
            easing: EasingFunction::DEFAULT,
        }
    }

    /// Idle choreographer using the transition length and easing from
    /// `options`.
    #[must_use]
    pub fn from_options(
        view: ViewId,
        pose: CameraPose,
        options: &CameraOptions,
    ) -> Self {
        Self::new(view, pose)
            .with_timing(options.transition_duration(), options.easing)
    }

    /// Override transition length and easing for later transitions.
    #[must_use]
    pub fn with_timing(
        mut self,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        self.duration = duration;
        self.easing = easing;
        self
    }

    /// React to the currently selected view.
    ///
    /// Edge-triggered: returns `Ok(false)` without side effects when `view`
    /// equals the last observed one. Otherwise starts a transition (or
    /// supersedes the running one) and returns `Ok(true)`.
    ///
    /// `live` is the camera's actual pose, used as the start of a
    /// transition begun from Idle (it may have been moved by orbiting). A
    /// superseding transition starts from the pose interpolated at `now`
    /// instead.
    ///
    /// A view without a preset aborts the transition, leaves every pose
    /// untouched and returns [`ShowroomError::MissingPreset`].
    pub fn observe(
        &mut self,
        view: ViewId,
        presets: &ViewPresetTable,
        live: CameraPose,
        now: Instant,
    ) -> Result<bool, ShowroomError> {
        if view == self.observed_view {
            return Ok(false);
        }

        let Some(to) = presets.lookup(view) else {
            log::error!(
                "camera preset for view '{view}' vanished after validation; \
                 transition aborted"
            );
            return Err(ShowroomError::MissingPreset(view));
        };

        let from = match &self.session {
            Some(running) => {
                log::debug!(
                    "view '{}' superseded by '{view}' at t={:.3}",
                    self.observed_view,
                    running.progress(now)
                );
                running.sample(now)
            }
            None => live,
        };

        self.live = from;
        self.session = Some(TransitionSession::new(
            from,
            to,
            now,
            self.duration,
            self.easing,
        ));
        log::debug!(
            "camera transition '{}' -> '{view}' over {:?}",
            self.observed_view,
            self.duration
        );
        self.observed_view = view;
        Ok(true)
    }

    /// Advance the running transition to `now`.
    ///
    /// Writes the interpolated position to `camera` and the interpolated
    /// look-at through `controls`. Returns `true` while the transition is
    /// still running after this tick; on completion the live pose equals
    /// the target exactly and the choreographer is Idle.
    pub fn tick(
        &mut self,
        now: Instant,
        camera: &mut Camera,
        controls: &mut ControlsSync<'_>,
    ) -> bool {
        let Some(session) = self.session else {
            return false;
        };

        let pose = session.sample(now);
        self.live = pose;
        camera.eye = pose.position;
        controls.apply(camera, pose.look_at);

        if session.is_complete(now) {
            self.session = None;
            log::debug!("camera arrived at view '{}'", self.observed_view);
            return false;
        }
        true
    }

    /// Last pose written by a tick, or the pose a transition started from.
    #[must_use]
    pub fn live_pose(&self) -> CameraPose {
        self.live
    }

    /// The view most recently observed.
    #[must_use]
    pub fn observed_view(&self) -> ViewId {
        self.observed_view
    }

    /// The in-flight transition, if any.
    #[must_use]
    pub fn session(&self) -> Option<&TransitionSession> {
        self.session.as_ref()
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.session.is_some()
    }

    /// Idle or Animating, with progress measured at `now`.
    #[must_use]
    pub fn state(&self, now: Instant) -> ChoreographerState {
        match &self.session {
            Some(session) => ChoreographerState::Animating {
                view: self.observed_view,
                progress: session.progress(now),
            },
            None => ChoreographerState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::presets::ViewPreset;
    use crate::camera::sync::tests::RecordingControls;

    const EPS: f32 = 1e-5;

    struct Rig {
        choreographer: CameraChoreographer,
        presets: ViewPresetTable,
        camera: Camera,
        controls: RecordingControls,
        start: Instant,
    }

    impl Rig {
        fn new() -> Self {
            let presets = ViewPresetTable::builtin();
            let pose = presets.lookup(ViewId::Default).unwrap();
            let mut controls = RecordingControls::default();
            controls.target = pose.look_at;
            Self {
                choreographer: CameraChoreographer::new(ViewId::Default, pose),
                camera: Camera::from_options(&CameraOptions::default(), pose),
                presets,
                controls,
                start: Instant::now(),
            }
        }

        fn at(&self, millis: u64) -> Instant {
            self.start + Duration::from_millis(millis)
        }

        fn select(&mut self, view: ViewId, millis: u64) -> bool {
            let live = self.camera.pose();
            let now = self.at(millis);
            self.choreographer
                .observe(view, &self.presets, live, now)
                .unwrap()
        }

        fn tick(&mut self, millis: u64) -> bool {
            let now = self.at(millis);
            let mut sync = ControlsSync::new(&mut self.controls);
            self.choreographer.tick(now, &mut self.camera, &mut sync)
        }

        fn preset(&self, view: ViewId) -> CameraPose {
            self.presets.lookup(view).unwrap()
        }
    }

    #[test]
    fn same_view_is_a_no_op() {
        let mut rig = Rig::new();
        let before = rig.choreographer.live_pose();
        assert!(!rig.select(ViewId::Default, 0));
        assert!(rig.choreographer.session().is_none());
        assert!(!rig.tick(100));
        assert_eq!(rig.choreographer.live_pose(), before);
        assert_eq!(rig.controls.updates, 0);
    }

    #[test]
    fn transition_starts_from_actual_camera_pose() {
        let mut rig = Rig::new();
        // user orbited away from the preset before selecting
        rig.camera.eye = Vec3::new(-2.0, 1.0, 5.0);
        assert!(rig.select(ViewId::Side, 0));
        let session = rig.choreographer.session().unwrap();
        assert_eq!(session.from().position, Vec3::new(-2.0, 1.0, 5.0));
        assert_eq!(session.to(), rig.preset(ViewId::Side));
    }

    #[test]
    fn completes_exactly_at_duration() {
        let mut rig = Rig::new();
        let _ = rig.select(ViewId::Front, 0);
        assert!(rig.tick(500));
        assert!(rig.tick(1000));
        assert!(!rig.tick(1500));

        let target = rig.preset(ViewId::Front);
        assert_eq!(rig.choreographer.live_pose(), target);
        assert_eq!(rig.camera.eye, target.position);
        assert_eq!(rig.camera.target, target.look_at);
        assert_eq!(rig.choreographer.state(rig.at(1500)), ChoreographerState::Idle);
    }

    #[test]
    fn state_reads_full_progress_until_the_landing_tick() {
        let mut rig = Rig::new();
        let _ = rig.select(ViewId::Side, 0);
        assert!(rig.tick(800));
        assert_eq!(
            rig.choreographer.state(rig.at(2000)),
            ChoreographerState::Animating {
                view: ViewId::Side,
                progress: 1.0,
            }
        );
        assert!(!rig.tick(2000));
        assert_eq!(rig.choreographer.state(rig.at(2000)), ChoreographerState::Idle);
    }

    #[test]
    fn halfway_lies_strictly_between_presets() {
        let mut rig = Rig::new();
        let from = rig.preset(ViewId::Default).position;
        let to = rig.preset(ViewId::Side).position;
        let _ = rig.select(ViewId::Side, 0);
        assert!(rig.tick(750));

        let eye = rig.camera.eye;
        for axis in 0..3 {
            let (lo, hi) = if from[axis] < to[axis] {
                (from[axis], to[axis])
            } else {
                (to[axis], from[axis])
            };
            assert!(lo < eye[axis] && eye[axis] < hi, "axis {axis}: {eye}");
        }
    }

    #[test]
    fn supersede_rebases_on_interpolated_pose() {
        let mut rig = Rig::new();
        let _ = rig.select(ViewId::Front, 0);
        assert!(rig.tick(600));
        let mid_flight = rig.choreographer.live_pose();

        assert!(rig.select(ViewId::Back, 600));
        let session = *rig.choreographer.session().unwrap();
        assert!(session.from().abs_diff_eq(&mid_flight, EPS));
        assert_ne!(session.from(), rig.preset(ViewId::Default));
        assert_ne!(session.from(), rig.preset(ViewId::Front));

        // continuous across the boundary
        assert!(rig.tick(616));
        let next = rig.camera.eye;
        assert!(next.distance(mid_flight.position) < 0.05);
    }

    #[test]
    fn supersede_between_ticks_samples_at_selection_time() {
        let mut rig = Rig::new();
        let _ = rig.select(ViewId::Top, 0);
        assert!(rig.tick(400));
        let expected = rig.choreographer.session().unwrap().sample(rig.at(450));
        assert!(rig.select(ViewId::Side, 450));
        let from = rig.choreographer.session().unwrap().from();
        assert!(from.abs_diff_eq(&expected, EPS));
    }

    #[test]
    fn every_pair_of_views_is_continuous_under_supersede() {
        for a in ViewId::ALL {
            for b in ViewId::ALL {
                if a == b || a == ViewId::Default {
                    continue;
                }
                let mut rig = Rig::new();
                let _ = rig.select(a, 0);
                assert!(rig.tick(700));
                let live = rig.choreographer.live_pose();
                assert!(rig.select(b, 700), "{a} -> {b}");
                let from = rig.choreographer.session().unwrap().from();
                assert!(from.abs_diff_eq(&live, EPS), "{a} -> {b}");
            }
        }
    }

    #[test]
    fn controls_are_refreshed_every_tick() {
        let mut rig = Rig::new();
        let _ = rig.select(ViewId::FrontQuarter, 0);
        for frame in 1..=10 {
            let _ = rig.tick(frame * 16);
        }
        assert_eq!(rig.controls.updates, 10);
    }

    #[test]
    fn missing_preset_aborts_and_keeps_pose() {
        let presets = ViewPresetTable::new(
            &[ViewPreset::builtin()[0]],
            &[ViewId::Default],
        )
        .unwrap();
        let pose = presets.lookup(ViewId::Default).unwrap();
        let mut choreographer = CameraChoreographer::new(ViewId::Default, pose);

        let err = choreographer
            .observe(ViewId::Top, &presets, pose, Instant::now())
            .unwrap_err();
        assert!(matches!(err, ShowroomError::MissingPreset(ViewId::Top)));
        assert!(!choreographer.is_animating());
        assert_eq!(choreographer.live_pose(), pose);
        assert_eq!(choreographer.observed_view(), ViewId::Default);
    }

    #[test]
    fn custom_timing_applies_to_new_sessions() {
        let presets = ViewPresetTable::builtin();
        let pose = presets.lookup(ViewId::Default).unwrap();
        let mut choreographer = CameraChoreographer::new(ViewId::Default, pose)
            .with_timing(Duration::from_millis(200), EasingFunction::Linear);
        let now = Instant::now();
        let _ = choreographer.observe(ViewId::Back, &presets, pose, now).unwrap();
        let session = choreographer.session().unwrap();
        assert_eq!(session.duration(), Duration::from_millis(200));
        assert_eq!(session.easing(), EasingFunction::Linear);
    }
}
