//! The editor's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, pointer
//! gesture, UI button, or programmatic call, is represented as an
//! `EditorCommand`. Consumers construct commands and pass them to
//! [`Editor::execute`](super::Editor::execute).

use glam::Vec3;

use super::models::ModelKind;

/// A discrete or parameterized operation the editor can perform.
///
/// The editor never cares *how* a command was triggered:
///
/// ```ignore
/// editor.execute(EditorCommand::ToggleTopView);
/// editor.execute(EditorCommand::MoveModel { target_x: 5.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorCommand {
    // ── Pointer ─────────────────────────────────────────────────────
    /// Pick under the pointer, or release the current drag.
    PointerClick {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },

    /// Pointer moved; drags the selection while a drag is active.
    PointerMove {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },

    // ── Camera ──────────────────────────────────────────────────────
    /// Flip between the perspective and top-down camera.
    ToggleTopView,

    // ── Models ──────────────────────────────────────────────────────
    /// Tween the designated model toward `(target_x, 0, 0)`.
    MoveModel {
        /// Target X coordinate.
        target_x: f32,
    },

    /// Set a slot's position fields (applied now if a model is loaded).
    SetModelPosition {
        /// Slot to position.
        kind: ModelKind,
        /// New position.
        position: Vec3,
    },

    // ── UI ──────────────────────────────────────────────────────────
    /// Show or hide the inspector panel.
    ToggleInspector,

    /// The viewport changed size.
    Resize {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}
