//! The viewer's current selection: model, paint color and named view.
//!
//! [`ConfiguratorState`] is the single source of truth the camera
//! choreographer and the render bridge read from. It is mutated only by
//! discrete UI commands, never from inside the per-frame tick.

/// Vehicle catalog.
pub mod catalog;
/// Paint color values.
pub mod color;

pub use catalog::{Catalog, ModelEntry};
pub use color::PaintColor;

use crate::camera::presets::{ViewId, ViewPresetTable};
use crate::error::{Selection, ShowroomError};

/// Selected model, paint color and view for one viewing session.
///
/// Every setter replaces exactly one field, returns `Ok(true)` when the
/// value changed and `Ok(false)` when it was already held. Rejected calls
/// leave the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguratorState {
    selected_model: usize,
    paint_color: PaintColor,
    active_view: ViewId,
    model_count: usize,
    views: Vec<ViewId>,
}

impl ConfiguratorState {
    /// Fresh session state: first model, `paint_color`, `default` view.
    ///
    /// Valid views are those with an entry in `presets`.
    #[must_use]
    pub fn new(
        catalog: &Catalog,
        presets: &ViewPresetTable,
        paint_color: PaintColor,
    ) -> Self {
        Self {
            selected_model: 0,
            paint_color,
            active_view: ViewId::Default,
            model_count: catalog.len(),
            views: presets.views(),
        }
    }

    /// Index of the selected catalog model.
    #[must_use]
    pub fn selected_model(&self) -> usize {
        self.selected_model
    }

    /// Current paint color.
    #[must_use]
    pub fn paint_color(&self) -> PaintColor {
        self.paint_color
    }

    /// Currently selected view.
    #[must_use]
    pub fn active_view(&self) -> ViewId {
        self.active_view
    }

    /// Select the model at `index`.
    pub fn set_model(&mut self, index: usize) -> Result<bool, ShowroomError> {
        if index >= self.model_count {
            return Err(Selection::Model {
                index,
                count: self.model_count,
            }
            .into());
        }
        Ok(replace(&mut self.selected_model, index))
    }

    /// Select the next model, wrapping to the first.
    pub fn next_model(&mut self) -> bool {
        let next = (self.selected_model + 1) % self.model_count;
        replace(&mut self.selected_model, next)
    }

    /// Select the previous model, wrapping to the last.
    pub fn previous_model(&mut self) -> bool {
        let previous =
            (self.selected_model + self.model_count - 1) % self.model_count;
        replace(&mut self.selected_model, previous)
    }

    /// Change the paint color. Colors need no validation beyond parsing.
    pub fn set_color(&mut self, color: PaintColor) -> bool {
        replace(&mut self.paint_color, color)
    }

    /// Select `view`; it must have a camera preset.
    pub fn set_view(&mut self, view: ViewId) -> Result<bool, ShowroomError> {
        if !self.views.contains(&view) {
            return Err(Selection::View(view).into());
        }
        Ok(replace(&mut self.active_view, view))
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::presets::ViewPreset;

    fn state() -> ConfiguratorState {
        let catalog = Catalog::new(Catalog::builtin_models()).unwrap();
        ConfiguratorState::new(
            &catalog,
            &ViewPresetTable::builtin(),
            "#173f5f".parse().unwrap(),
        )
    }

    #[test]
    fn starts_with_defaults() {
        let s = state();
        assert_eq!(s.selected_model(), 0);
        assert_eq!(s.paint_color().to_string(), "#173f5f");
        assert_eq!(s.active_view(), ViewId::Default);
    }

    #[test]
    fn out_of_range_model_is_rejected_without_change() {
        let mut s = state();
        let _ = s.set_model(3).unwrap();
        let err = s.set_model(99).unwrap_err();
        assert!(matches!(
            err,
            ShowroomError::InvalidSelection(Selection::Model { index: 99, count: 5 })
        ));
        assert_eq!(s.selected_model(), 3);
    }

    #[test]
    fn setters_are_idempotent() {
        let mut s = state();
        assert!(s.set_view(ViewId::Side).unwrap());
        assert!(!s.set_view(ViewId::Side).unwrap());
        assert!(s.set_model(2).unwrap());
        assert!(!s.set_model(2).unwrap());
        let red: PaintColor = "#ef4444".parse().unwrap();
        assert!(s.set_color(red));
        assert!(!s.set_color(red));
    }

    #[test]
    fn each_setter_touches_one_field() {
        let mut s = state();
        let _ = s.set_view(ViewId::Top).unwrap();
        let _ = s.set_model(2).unwrap();
        assert!(s.set_color("#ba3025".parse().unwrap()));
        assert_eq!(s.active_view(), ViewId::Top);
        assert_eq!(s.selected_model(), 2);
        assert_eq!(s.paint_color().to_string(), "#ba3025");
    }

    #[test]
    fn view_without_preset_is_rejected() {
        let presets: Vec<_> = ViewPreset::builtin()
            .into_iter()
            .filter(|p| p.view != ViewId::Back)
            .collect();
        let table = ViewPresetTable::new(&presets, &[ViewId::Default]).unwrap();
        let catalog = Catalog::new(Catalog::builtin_models()).unwrap();
        let mut s = ConfiguratorState::new(
            &catalog,
            &table,
            PaintColor::from_rgb(0, 0, 0),
        );
        assert!(matches!(
            s.set_view(ViewId::Back),
            Err(ShowroomError::InvalidSelection(Selection::View(ViewId::Back)))
        ));
        assert_eq!(s.active_view(), ViewId::Default);
    }

    #[test]
    fn model_cycling_wraps() {
        let mut s = state();
        assert!(s.previous_model());
        assert_eq!(s.selected_model(), 4);
        assert!(s.next_model());
        assert_eq!(s.selected_model(), 0);
    }

    #[test]
    fn single_model_catalog_cycles_to_itself() {
        let catalog =
            Catalog::new(vec![Catalog::builtin_models().remove(0)]).unwrap();
        let mut s = ConfiguratorState::new(
            &catalog,
            &ViewPresetTable::builtin(),
            PaintColor::from_rgb(0, 0, 0),
        );
        assert!(!s.next_model());
        assert!(!s.previous_model());
    }
}
