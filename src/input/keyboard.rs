use serde::{Deserialize, Serialize};

use crate::editor::EditorCommand;

/// Editor-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_top_view = ["Digit0", "Numpad0"]
/// toggle_inspector = ["KeyN"]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Flip between the perspective and top-down camera.
    ToggleTopView,
    /// Show or hide the inspector panel.
    ToggleInspector,
}

impl KeyAction {
    /// The parameterless command this action triggers.
    #[must_use]
    pub fn to_command(self) -> EditorCommand {
        match self {
            Self::ToggleTopView => EditorCommand::ToggleTopView,
            Self::ToggleInspector => EditorCommand::ToggleInspector,
        }
    }
}
