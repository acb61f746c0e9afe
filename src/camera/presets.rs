//! Named camera viewpoints and the table mapping them to poses.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::pose::CameraPose;
use crate::error::{Selection, ShowroomError};

/// Symbolic tag selecting a predefined camera viewpoint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    /// Three-quarter view from slightly below, the session's opening shot.
    Default,
    /// Head-on from the front bumper.
    Front,
    /// Straight at the rear.
    Back,
    /// Broadside profile.
    Side,
    /// Bird's-eye view from above.
    Top,
    /// Raised front three-quarter.
    FrontQuarter,
    /// Raised rear three-quarter.
    RearQuarter,
}

impl ViewId {
    /// Every view, in UI order.
    pub const ALL: [ViewId; 7] = [
        Self::Default,
        Self::Front,
        Self::Back,
        Self::Side,
        Self::Top,
        Self::FrontQuarter,
        Self::RearQuarter,
    ];

    /// The `snake_case` tag used in options files and scripts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Front => "front",
            Self::Back => "back",
            Self::Side => "side",
            Self::Top => "top",
            Self::FrontQuarter => "front_quarter",
            Self::RearQuarter => "rear_quarter",
        }
    }

    /// Built-in pose for this view, framing a scale-2 car at the origin.
    ///
    /// Front, back and both quarters sit on the +X side so the straight
    /// path between any two presets passes beside the car, not through it.
    #[must_use]
    pub fn builtin_pose(self) -> CameraPose {
        let (x, y, z) = match self {
            Self::Default => (3.0, -1.0, 4.0),
            Self::Front => (2.0, 0.5, 6.0),
            Self::Back => (2.0, 0.5, -6.0),
            Self::Side => (6.5, 0.2, 0.0),
            Self::Top => (0.0, 8.0, 0.5),
            Self::FrontQuarter => (4.5, 1.2, 4.5),
            Self::RearQuarter => (4.5, 1.2, -4.5),
        };
        CameraPose::new(Vec3::new(x, y, z), Vec3::ZERO)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = ShowroomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| Selection::UnknownView(s.to_owned()).into())
    }
}

/// One entry of a preset table as it appears in options files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewPreset {
    /// Which view this entry defines.
    pub view: ViewId,
    /// Target camera position.
    pub position: Vec3,
    /// Target look-at point.
    pub look_at: Vec3,
}

impl ViewPreset {
    /// The pose this entry describes.
    #[must_use]
    pub const fn pose(&self) -> CameraPose {
        CameraPose::new(self.position, self.look_at)
    }

    /// Built-in entries for every view.
    #[must_use]
    pub fn builtin() -> Vec<Self> {
        ViewId::ALL
            .into_iter()
            .map(|view| {
                let pose = view.builtin_pose();
                Self {
                    view,
                    position: pose.position,
                    look_at: pose.look_at,
                }
            })
            .collect()
    }
}

/// Validated mapping from [`ViewId`] to [`CameraPose`].
///
/// Construction checks that every view the UI can reach has an entry, so
/// [`lookup`](Self::lookup) of a reachable view cannot fail afterwards.
#[derive(Debug, Clone)]
pub struct ViewPresetTable {
    poses: FxHashMap<ViewId, CameraPose>,
    ui_views: Vec<ViewId>,
}

impl ViewPresetTable {
    /// Build a table from preset entries and the list of views the UI
    /// exposes.
    ///
    /// Fails with [`ShowroomError::Configuration`] when an entry is
    /// duplicated, when `default` has no entry, or when a UI view has no
    /// entry.
    pub fn new(
        presets: &[ViewPreset],
        ui_views: &[ViewId],
    ) -> Result<Self, ShowroomError> {
        let mut poses = FxHashMap::default();
        for preset in presets {
            if poses.insert(preset.view, preset.pose()).is_some() {
                return Err(ShowroomError::Configuration(format!(
                    "duplicate camera preset for view '{}'",
                    preset.view
                )));
            }
        }

        if !poses.contains_key(&ViewId::Default) {
            return Err(ShowroomError::Configuration(
                "no camera preset for the 'default' view".to_owned(),
            ));
        }

        if let Some(missing) =
            ui_views.iter().find(|view| !poses.contains_key(view))
        {
            return Err(ShowroomError::Configuration(format!(
                "view '{missing}' is reachable from the UI but has no camera preset"
            )));
        }

        let mut ui_views = ui_views.to_vec();
        ui_views.dedup();

        Ok(Self { poses, ui_views })
    }

    /// Table with the built-in pose for every view.
    #[must_use]
    pub fn builtin() -> Self {
        let poses = ViewId::ALL
            .into_iter()
            .map(|view| (view, view.builtin_pose()))
            .collect();
        Self {
            poses,
            ui_views: ViewId::ALL.to_vec(),
        }
    }

    /// Pose for `view`, if the table has one.
    #[must_use]
    pub fn lookup(&self, view: ViewId) -> Option<CameraPose> {
        self.poses.get(&view).copied()
    }

    /// Whether `view` has an entry.
    #[must_use]
    pub fn contains(&self, view: ViewId) -> bool {
        self.poses.contains_key(&view)
    }

    /// Views with an entry, in [`ViewId::ALL`] order.
    #[must_use]
    pub fn views(&self) -> Vec<ViewId> {
        ViewId::ALL
            .into_iter()
            .filter(|view| self.contains(*view))
            .collect()
    }

    /// Views the UI exposes, in the configured order.
    #[must_use]
    pub fn ui_views(&self) -> &[ViewId] {
        &self.ui_views
    }
}
