//! Crate-level error types.

use std::fmt;

use crate::editor::ModelKind;

/// Errors produced by the stagehand crate.
///
/// The manipulation core (picking, dragging, camera toggling, tweening)
/// never fails; these cover the surrounding glue.
#[derive(Debug)]
pub enum EditorError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// An operation needed a model in a slot that is empty.
    EmptySlot(ModelKind),
    /// A model slot name did not match any known slot.
    UnknownModel(String),
    /// The external renderer failed to draw a frame.
    Render(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::EmptySlot(kind) => {
                write!(f, "no model loaded in the {kind} slot")
            }
            Self::UnknownModel(name) => {
                write!(f, "unknown model slot: {name}")
            }
            Self::Render(msg) => write!(f, "render error: {msg}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EditorError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
