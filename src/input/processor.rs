//! Converts raw platform events into showroom commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! button state) and the key-binding map. It is the only thing that sits
//! between raw window events and
//! [`ShowroomEngine::execute`](crate::engine::ShowroomEngine::execute).

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use crate::camera::presets::ViewId;
use crate::engine::ShowroomCommand;

/// Maps physical key strings to [`ShowroomCommand`] variants.
///
/// Key strings are physical key codes in `KeyboardEvent.code` form:
/// `"KeyM"`, `"Digit1"`, `"Tab"`, etc.
///
/// Only discrete commands are bindable; parameterized commands like
/// `RotateCamera` come from mouse gestures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the subset of [`ShowroomCommand`] that can be
/// key-bound (discrete, parameterless actions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Next catalog model.
    NextModel,
    /// Previous catalog model.
    PreviousModel,
    /// Next palette swatch.
    NextColor,
    /// Next view in the UI list.
    NextView,
    /// Toggle turntable auto-rotation.
    ToggleAutoRotate,
    /// Jump to the `default` view.
    ViewDefault,
    /// Jump to the `front` view.
    ViewFront,
    /// Jump to the `back` view.
    ViewBack,
    /// Jump to the `side` view.
    ViewSide,
    /// Jump to the `top` view.
    ViewTop,
    /// Jump to the `front_quarter` view.
    ViewFrontQuarter,
    /// Jump to the `rear_quarter` view.
    ViewRearQuarter,
}

impl KeyCommandTag {
    /// Convert to the corresponding parameterless [`ShowroomCommand`].
    fn to_command(self) -> ShowroomCommand {
        let view = |view| ShowroomCommand::SelectView { view };
        match self {
            Self::NextModel => ShowroomCommand::NextModel,
            Self::PreviousModel => ShowroomCommand::PreviousModel,
            Self::NextColor => ShowroomCommand::NextColor,
            Self::NextView => ShowroomCommand::NextView,
            Self::ToggleAutoRotate => ShowroomCommand::ToggleAutoRotate,
            Self::ViewDefault => view(ViewId::Default),
            Self::ViewFront => view(ViewId::Front),
            Self::ViewBack => view(ViewId::Back),
            Self::ViewSide => view(ViewId::Side),
            Self::ViewTop => view(ViewId::Top),
            Self::ViewFrontQuarter => view(ViewId::FrontQuarter),
            Self::ViewRearQuarter => view(ViewId::RearQuarter),
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("Digit1".into(), KeyCommandTag::ViewDefault),
            ("Digit2".into(), KeyCommandTag::ViewFront),
            ("Digit3".into(), KeyCommandTag::ViewBack),
            ("Digit4".into(), KeyCommandTag::ViewSide),
            ("Digit5".into(), KeyCommandTag::ViewTop),
            ("Digit6".into(), KeyCommandTag::ViewFrontQuarter),
            ("Digit7".into(), KeyCommandTag::ViewRearQuarter),
            ("KeyM".into(), KeyCommandTag::NextModel),
            ("KeyN".into(), KeyCommandTag::PreviousModel),
            ("KeyC".into(), KeyCommandTag::NextColor),
            ("KeyV".into(), KeyCommandTag::NextView),
            ("KeyR".into(), KeyCommandTag::ToggleAutoRotate),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<ShowroomCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind `key` to `tag`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: &str, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.to_owned(), tag);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw window events into [`ShowroomCommand`]s.
///
/// Left-drag orbits the camera, the scroll wheel zooms. Panning is not
/// offered.
pub struct InputProcessor {
    /// Last cursor position in physical pixels.
    mouse_pos: Vec2,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeyBindings::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            mouse_pos: Vec2::ZERO,
            mouse_pressed: false,
            key_bindings,
        }
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ShowroomCommand> {
        self.key_bindings.lookup(key)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ShowroomCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let pos = Vec2::new(x, y);
                let delta = pos - self.mouse_pos;
                self.mouse_pos = pos;
                (self.mouse_pressed && delta != Vec2::ZERO)
                    .then_some(ShowroomCommand::RotateCamera { delta })
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => {
                self.mouse_pressed = pressed;
                None
            }
            InputEvent::MouseButton { .. } => None,
            InputEvent::Scroll { delta } => Some(ShowroomCommand::Zoom { delta }),
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
