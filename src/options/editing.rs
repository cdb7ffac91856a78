use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::editor::ModelKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gizmo", inline)]
#[serde(default)]
/// Appearance of the axis gizmo attached to the selection.
pub struct GizmoOptions {
    /// Length of each axis line in local units.
    #[schemars(title = "Axis Length", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub axis_length: f32,
    /// Line colour (linear RGB).
    #[schemars(skip)]
    pub color: [f32; 3],
    /// Requested line width in pixels.
    #[schemars(title = "Line Width", range(min = 1.0, max = 8.0), extend("step" = 1.0))]
    pub line_width: f32,
}

impl Default for GizmoOptions {
    fn default() -> Self {
        Self {
            axis_length: 10.0,
            color: [0.0, 0.0, 1.0],
            line_width: 2.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Move Animation", inline)]
#[serde(default)]
/// Parameters of the move-to-target tween.
pub struct TweenOptions {
    /// Fraction of the remaining distance covered each frame.
    #[schemars(title = "Speed", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub factor: f32,
    /// Remaining distance at which the model snaps onto the target.
    #[schemars(skip)]
    pub epsilon: f32,
    /// Slot whose model the move command drives.
    pub model: ModelKind,
}

impl Default for TweenOptions {
    fn default() -> Self {
        Self {
            factor: 0.05,
            epsilon: 1e-4,
            model: ModelKind::Obstacle,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Models", inline)]
#[serde(default)]
/// Defaults applied to freshly loaded models and the scene.
pub struct ModelOptions {
    /// Flat colour given to every mesh of a new model (linear RGB).
    #[schemars(skip)]
    pub mesh_color: [f32; 3],
    /// Scene clear colour (linear RGB).
    #[schemars(skip)]
    pub background: [f32; 3],
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            mesh_color: [0.0, 1.0, 0.0],
            background: [0.671, 0.804, 0.937],
        }
    }
}
