//! Crate-level error types.

use std::fmt;

use crate::camera::presets::ViewId;

/// Which selection a rejected setter call referred to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A model index outside the catalog.
    Model {
        /// The rejected index.
        index: usize,
        /// Number of models in the catalog.
        count: usize,
    },
    /// A view with no entry in the preset table.
    View(ViewId),
    /// A string that names no known view.
    UnknownView(String),
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model { index, count } => {
                write!(f, "model index {index} out of range (catalog has {count})")
            }
            Self::View(view) => write!(f, "view '{view}' has no preset"),
            Self::UnknownView(name) => write!(f, "unknown view '{name}'"),
        }
    }
}

/// Errors produced by the showroom crate.
#[derive(Debug)]
pub enum ShowroomError {
    /// A setter was called with a model or view outside the valid set.
    InvalidSelection(Selection),
    /// Startup configuration is inconsistent (missing preset, empty
    /// catalog, ...). The engine refuses to start.
    Configuration(String),
    /// A preset lookup failed while starting a transition. Unreachable for
    /// a validated preset table.
    MissingPreset(ViewId),
    /// A paint color string is not `#rrggbb`.
    InvalidColor(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for ShowroomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSelection(selection) => {
                write!(f, "invalid selection: {selection}")
            }
            Self::Configuration(msg) => {
                write!(f, "configuration error: {msg}")
            }
            Self::MissingPreset(view) => {
                write!(f, "no camera preset for view '{view}' during transition")
            }
            Self::InvalidColor(value) => {
                write!(f, "invalid paint color '{value}', expected #rrggbb")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ShowroomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ShowroomError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<Selection> for ShowroomError {
    fn from(selection: Selection) -> Self {
        Self::InvalidSelection(selection)
    }
}
