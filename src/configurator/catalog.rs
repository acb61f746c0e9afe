use serde::{Deserialize, Serialize};

use crate::error::ShowroomError;

/// One vehicle the showroom can display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Display name shown in the title block.
    pub name: String,
    /// Subtitle line under the name.
    #[serde(default)]
    pub tagline: String,
    /// Asset path handed to the renderer's loader.
    pub asset: String,
    /// Uniform scale applied when placing the model.
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_scale() -> f32 {
    2.0
}

impl ModelEntry {
    fn new(name: &str, tagline: &str, asset: &str) -> Self {
        Self {
            name: name.to_owned(),
            tagline: tagline.to_owned(),
            asset: asset.to_owned(),
            scale: default_scale(),
        }
    }
}

/// Ordered, non-empty list of models.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    models: Vec<ModelEntry>,
}

impl Catalog {
    /// Build a catalog; an empty model list is a configuration error.
    pub fn new(models: Vec<ModelEntry>) -> Result<Self, ShowroomError> {
        if models.is_empty() {
            return Err(ShowroomError::Configuration(
                "model catalog is empty".to_owned(),
            ));
        }
        Ok(Self { models })
    }

    /// Number of models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Always false for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Model at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ModelEntry> {
        self.models.get(index)
    }

    /// All models in order.
    #[must_use]
    pub fn models(&self) -> &[ModelEntry] {
        &self.models
    }

    /// Built-in showroom lineup.
    #[must_use]
    pub fn builtin_models() -> Vec<ModelEntry> {
        vec![
            ModelEntry::new(
                "Mustang",
                "1965 Classic Edition",
                "models/mustang_1965.glb",
            ),
            ModelEntry::new(
                "Mustang Fastback",
                "1967 GT",
                "models/mustang_fastback_1967.glb",
            ),
            ModelEntry::new(
                "Shelby GT500",
                "1968 Eleanor",
                "models/shelby_gt500_1968.glb",
            ),
            ModelEntry::new(
                "Mustang Mach 1",
                "1971 Sportsroof",
                "models/mustang_mach1_1971.glb",
            ),
            ModelEntry::new(
                "Mustang GT",
                "2018 Performance Pack",
                "models/mustang_gt_2018.glb",
            ),
        ]
    }
}
