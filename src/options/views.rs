use serde::{Deserialize, Serialize};

use crate::camera::presets::{ViewId, ViewPreset, ViewPresetTable};
use crate::error::ShowroomError;

/// Camera presets and the views the UI offers.
///
/// ```toml
/// [views]
/// ui_views = ["default", "front", "side"]
///
/// [[views.presets]]
/// view = "side"
/// position = [6.5, 0.2, 0.0]
/// look_at = [0.0, 0.0, 0.0]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewOptions {
    /// Views offered by the UI, in button order.
    pub ui_views: Vec<ViewId>,
    /// One entry per view.
    pub presets: Vec<ViewPreset>,
}

impl ViewOptions {
    /// Validated preset table; fails fast on a missing or duplicate entry.
    pub fn table(&self) -> Result<ViewPresetTable, ShowroomError> {
        ViewPresetTable::new(&self.presets, &self.ui_views)
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            ui_views: ViewId::ALL.to_vec(),
            presets: ViewPreset::builtin(),
        }
    }
}
