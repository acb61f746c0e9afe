//! Read-side projection of the configurator for the external renderer.

use serde::Serialize;

use crate::camera::core::{Camera, CameraUniform};
use crate::configurator::{Catalog, ConfiguratorState, PaintColor};

/// Declarative scene inputs keyed by the selected model and paint.
///
/// Model and color swaps take effect on the next frame; they are never
/// animated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneDescription {
    /// Catalog index of the displayed model.
    pub selected_model: usize,
    /// Display name of the model.
    pub model_name: String,
    /// Subtitle shown under the model name.
    pub tagline: String,
    /// Asset path for the renderer's loader.
    pub asset: String,
    /// Uniform model scale.
    pub scale: f32,
    /// Paint color as `#rrggbb`.
    pub paint_color: PaintColor,
    /// Paint color in linear RGB for the body material.
    pub paint_linear: [f32; 3],
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    /// Scene inputs.
    pub scene: SceneDescription,
    /// Live camera, ready for GPU upload.
    pub camera: CameraUniform,
    /// Whether a view transition is still running.
    pub animating: bool,
}

/// Projects configurator state into renderer inputs. Holds no state.
pub struct RenderBridge;

impl RenderBridge {
    /// Scene inputs for the current selection.
    #[must_use]
    pub fn project(state: &ConfiguratorState, catalog: &Catalog) -> SceneDescription {
        let selected_model = state.selected_model();
        let (model_name, tagline, asset, scale) = catalog
            .get(selected_model)
            .map(|m| {
                (m.name.clone(), m.tagline.clone(), m.asset.clone(), m.scale)
            })
            .unwrap_or_default();
        let paint_color = state.paint_color();
        SceneDescription {
            selected_model,
            model_name,
            tagline,
            asset,
            scale,
            paint_color,
            paint_linear: paint_color.to_linear(),
        }
    }

    /// Full frame: scene inputs plus the camera as written this frame.
    #[must_use]
    pub fn frame(
        state: &ConfiguratorState,
        catalog: &Catalog,
        camera: &Camera,
        animating: bool,
    ) -> RenderFrame {
        RenderFrame {
            scene: Self::project(state, catalog),
            camera: CameraUniform::from_camera(camera),
            animating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::presets::{ViewId, ViewPresetTable};

    #[test]
    fn projection_follows_model_and_color() {
        let catalog = Catalog::new(Catalog::builtin_models()).unwrap();
        let presets = ViewPresetTable::builtin();
        let mut state = ConfiguratorState::new(
            &catalog,
            &presets,
            PaintColor::from_rgb(0x17, 0x3f, 0x5f),
        );
        let _ = state.set_model(2).unwrap();
        let _ = state.set_color("#ba3025".parse().unwrap());

        let scene = RenderBridge::project(&state, &catalog);
        assert_eq!(scene.selected_model, 2);
        assert_eq!(scene.paint_color.to_string(), "#ba3025");
        assert_eq!(scene.model_name, catalog.get(2).unwrap().name);
        assert_eq!(scene.tagline, catalog.get(2).unwrap().tagline);
        assert_eq!(state.active_view(), ViewId::Default);
    }

    #[test]
    fn frame_serializes_color_as_hex() {
        let catalog = Catalog::new(Catalog::builtin_models()).unwrap();
        let presets = ViewPresetTable::builtin();
        let state = ConfiguratorState::new(
            &catalog,
            &presets,
            PaintColor::from_rgb(0xef, 0x44, 0x44),
        );
        let camera = Camera::from_options(
            &crate::options::CameraOptions::default(),
            presets.lookup(ViewId::Default).unwrap(),
        );
        let frame = RenderBridge::frame(&state, &catalog, &camera, false);
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["scene"]["paint_color"], "#ef4444");
        assert_eq!(json["scene"]["model_name"], "Mustang");
        assert_eq!(json["scene"]["tagline"], "1965 Classic Edition");
        assert_eq!(json["camera"]["position"], serde_json::json!([3.0, -1.0, 4.0]));
    }
}
