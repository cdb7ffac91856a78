//! Camera system for the editor viewport.
//!
//! Provides the perspective camera with pointer-ray construction and the
//! perspective / top-view mode controller.

/// Core camera struct, pose, and pointer-to-ray mapping.
pub mod core;
/// Perspective / top-view switching and drag-plane selection.
pub mod view_mode;

pub use self::core::{screen_to_ndc, Camera, CameraPose};
pub use view_mode::{CameraModeController, ViewMode};
