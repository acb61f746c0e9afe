//! Centralized showroom options with TOML file support.
//!
//! Camera, orbit limits, the model catalog and paint palette, view presets
//! and key bindings are consolidated here. Every section uses
//! `#[serde(default)]`, so a partial TOML file (e.g. only overriding
//! `[orbit]`) works.

mod camera;
mod catalog;
mod orbit;
mod views;

use std::path::Path;

pub use camera::CameraOptions;
pub use catalog::CatalogOptions;
pub use orbit::OrbitOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use views::ViewOptions;

use crate::error::ShowroomError;
use crate::input::KeyBindings;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Camera projection and view-transition parameters.
    pub camera: CameraOptions,
    /// Orbit-control limits and turntable settings.
    pub orbit: OrbitOptions,
    /// Models and paint palette.
    #[schemars(skip)]
    pub catalog: CatalogOptions,
    /// Camera presets and the views offered by the UI.
    #[schemars(skip)]
    pub views: ViewOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ShowroomError> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml(&content)?;
        log::info!("Loaded options from '{}'", path.display());
        Ok(options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, ShowroomError> {
        toml::from_str(content)
            .map_err(|e| ShowroomError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ShowroomError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ShowroomError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        log::info!("Saved options to '{}'", path.display());
        Ok(())
    }
}
