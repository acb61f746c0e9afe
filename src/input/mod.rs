//! Input handling: platform-agnostic events and the processor that turns
//! them into showroom commands.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events and key presses into commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::{InputProcessor, KeyBindings, KeyCommandTag};
