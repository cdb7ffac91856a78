// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive 3D scene editing core.
//!
//! Stagehand owns the manipulation side of a small scene editor: picking
//! meshes under the pointer, attaching an axis gizmo to the selection,
//! dragging the selection across a constraint plane, flipping between a
//! perspective and a top-down camera, and tweening a model toward a
//! commanded position. Drawing is left to an external
//! [`SceneRenderer`](editor::SceneRenderer).
//!
//! # Key entry points
//!
//! - [`editor::Editor`] - owns all editor state and executes commands
//! - [`editor::EditorCommand`] - the complete interactive vocabulary
//! - [`input::InputProcessor`] - turns raw pointer/key events into commands
//! - [`scene::Scene`] - the node graph the editor manipulates
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Frame model
//!
//! Everything runs on one thread. Pointer and key events mutate the editor
//! immediately; [`editor::Editor::frame`] is called once per display
//! refresh to sync the gizmo, advance the tween, and hand the scene to the
//! renderer.

pub mod camera;
pub mod editor;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use editor::{Editor, EditorCommand, SceneRenderer};
pub use error::EditorError;
pub use input::{InputEvent, InputProcessor, PointerButton};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
