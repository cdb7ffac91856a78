use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and view-mode parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 110.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Eye position at startup; leaving top view returns here.
    #[schemars(skip)]
    pub start_position: [f32; 3],
    /// Height above the origin used by the top view.
    #[schemars(title = "Top View Height", range(min = 1.0, max = 100.0), extend("step" = 0.5))]
    pub top_view_height: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            start_position: [0.0, 0.0, 10.0],
            top_view_height: 5.0,
        }
    }
}
