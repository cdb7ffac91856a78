//! Shared utilities for the editor.
//!
//! Helpers for frame timing and lenient text-field parsing.

pub mod frame_timing;
pub mod text;
