//! Input handling: event types, key actions, and the input processor
//! that converts raw window events into editor commands.

/// Pointer events.
pub mod event;
/// Bindable keyboard actions.
pub mod keyboard;
/// Converts raw events into editor commands.
pub mod processor;

pub use event::{InputEvent, PointerButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
