//! Centralized editor options with TOML preset support.
//!
//! All tweakable settings (camera, gizmo, tween, model defaults,
//! keybindings) are consolidated here. Options serialize to/from TOML so a
//! session can be started from a preset file.

mod camera;
mod editing;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use editing::{GizmoOptions, ModelOptions, TweenOptions};
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[gizmo]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and view-mode parameters.
    pub camera: CameraOptions,
    /// Axis gizmo appearance.
    pub gizmo: GizmoOptions,
    /// Move-to-target tween parameters.
    pub tween: TweenOptions,
    /// Defaults for loaded models and the scene.
    pub models: ModelOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the inspector-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`EditorError::Io`] if the file cannot be read,
    /// [`EditorError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, EditorError> {
        let content = std::fs::read_to_string(path).map_err(EditorError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`EditorError::OptionsParse`] on malformed input.
    pub fn from_toml(content: &str) -> Result<Self, EditorError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| EditorError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed), creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// [`EditorError::OptionsParse`] if serialization fails,
    /// [`EditorError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), EditorError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| EditorError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(EditorError::Io)?;
        }
        std::fs::write(path, content).map_err(EditorError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::ModelKind;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[tween]
factor = 0.1
model = "car"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.tween.factor, 0.1);
        assert_eq!(opts.tween.model, ModelKind::Car);
        // Everything else should be default
        assert_eq!(opts.tween.epsilon, 1e-4);
        assert_eq!(opts.gizmo.axis_length, 10.0);
        assert_eq!(opts.camera.start_position, [0.0, 0.0, 10.0]);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("Digit0"),
            Some(KeyAction::ToggleTopView)
        );
        assert_eq!(
            opts.keybindings.lookup("Numpad0"),
            Some(KeyAction::ToggleTopView)
        );
        assert_eq!(
            opts.keybindings.lookup("KeyN"),
            Some(KeyAction::ToggleInspector)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn loaded_keybindings_resolve() {
        let toml_str = r#"
[keybindings.bindings]
toggle_top_view = ["KeyT"]
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("KeyT"),
            Some(KeyAction::ToggleTopView)
        );
        assert_eq!(opts.keybindings.lookup("Digit0"), None);
    }

    #[test]
    fn save_then_load_from_disk() {
        let dir = std::env::temp_dir()
            .join(format!("stagehand-options-{}", std::process::id()));
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.gizmo.axis_length = 4.0;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded.gizmo.axis_length, 4.0);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("camera = 3").unwrap_err();
        assert!(matches!(err, EditorError::OptionsParse(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("gizmo"));
        assert!(props.contains_key("tween"));
        assert!(!props.contains_key("keybindings"));

        let gizmo = &props["gizmo"]["properties"];
        assert!(gizmo.get("axis_length").is_some());
        assert!(gizmo.get("color").is_none());
    }
}
