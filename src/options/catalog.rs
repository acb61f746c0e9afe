use serde::{Deserialize, Serialize};

use crate::configurator::{Catalog, ModelEntry, PaintColor};
use crate::error::ShowroomError;

/// Models on display and the paint palette offered to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogOptions {
    /// Models in UI order; the first is selected at startup.
    pub models: Vec<ModelEntry>,
    /// Paint swatches in UI order.
    pub palette: Vec<PaintColor>,
    /// Paint color at startup.
    pub default_color: PaintColor,
}

impl CatalogOptions {
    /// Validated catalog built from `models`.
    pub fn catalog(&self) -> Result<Catalog, ShowroomError> {
        Catalog::new(self.models.clone())
    }

    /// Palette with at least one swatch.
    pub fn validated_palette(&self) -> Result<&[PaintColor], ShowroomError> {
        if self.palette.is_empty() {
            return Err(ShowroomError::Configuration(
                "paint palette is empty".to_owned(),
            ));
        }
        Ok(&self.palette)
    }
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            models: Catalog::builtin_models(),
            palette: vec![
                PaintColor::from_rgb(0xef, 0x44, 0x44),
                PaintColor::from_rgb(0x17, 0x3f, 0x5f),
                PaintColor::from_rgb(0x00, 0x00, 0x00),
                PaintColor::from_rgb(0xea, 0xb3, 0x08),
            ],
            default_color: PaintColor::from_rgb(0x17, 0x3f, 0x5f),
        }
    }
}
