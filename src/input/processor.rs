//! Converts raw platform events into editor commands.
//!
//! The `InputProcessor` owns the transient input state (cursor position,
//! button state) and the key-binding map. It is the only thing that sits
//! between raw window events and [`Editor::execute`](crate::Editor::execute).

use glam::Vec2;

use super::event::{InputEvent, PointerButton};
use super::keyboard::KeyAction;
use crate::editor::EditorCommand;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`EditorCommand`]s.
///
/// A primary-button release counts as a click at the last known cursor
/// position; every cursor motion becomes a pointer move (the editor ignores
/// it unless a drag is active).
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(event) {
///     editor.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("Digit0") {
///     editor.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Last cursor position in physical pixels.
    mouse_pos: Vec2,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            mouse_pos: Vec2::ZERO,
            mouse_pressed: false,
            key_bindings,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> Vec2 {
        self.mouse_pos
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<EditorCommand> {
        self.key_bindings.lookup(key).map(KeyAction::to_command)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<EditorCommand> {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.mouse_pos = Vec2::new(x, y);
                Some(EditorCommand::PointerMove { x, y })
            }
            InputEvent::Button { button, pressed } => {
                self.handle_button(button, pressed)
            }
        }
    }

    /// Track the primary button; a release completes a click.
    fn handle_button(
        &mut self,
        button: PointerButton,
        pressed: bool,
    ) -> Option<EditorCommand> {
        if !button.is_primary() {
            return None;
        }

        if pressed {
            self.mouse_pressed = true;
            return None;
        }

        // A release without a matching press (e.g. focus changed mid-click)
        // is not a click.
        if !std::mem::replace(&mut self.mouse_pressed, false) {
            return None;
        }
        Some(EditorCommand::PointerClick {
            x: self.mouse_pos.x,
            y: self.mouse_pos.y,
        })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(processor: &mut InputProcessor, button: PointerButton) {
        assert_eq!(
            processor.handle_event(InputEvent::Button {
                button,
                pressed: true
            }),
            None
        );
    }

    fn release(
        processor: &mut InputProcessor,
        button: PointerButton,
    ) -> Option<EditorCommand> {
        processor.handle_event(InputEvent::Button {
            button,
            pressed: false,
        })
    }

    #[test]
    fn pointer_motion_becomes_pointer_move() {
        let mut processor = InputProcessor::new();
        let cmd =
            processor.handle_event(InputEvent::PointerMoved { x: 3.0, y: 4.0 });
        assert_eq!(cmd, Some(EditorCommand::PointerMove { x: 3.0, y: 4.0 }));
        assert_eq!(processor.mouse_pos(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn primary_release_clicks_at_last_pointer_position() {
        let mut processor = InputProcessor::new();
        let _ =
            processor.handle_event(InputEvent::PointerMoved { x: 10.0, y: 20.0 });
        press(&mut processor, PointerButton::Primary);
        assert!(processor.mouse_pressed());
        assert_eq!(
            release(&mut processor, PointerButton::Primary),
            Some(EditorCommand::PointerClick { x: 10.0, y: 20.0 })
        );
        assert!(!processor.mouse_pressed());
    }

    #[test]
    fn unmatched_release_and_other_buttons_are_ignored() {
        let mut processor = InputProcessor::new();
        assert_eq!(release(&mut processor, PointerButton::Primary), None);
        press(&mut processor, PointerButton::Secondary);
        assert_eq!(release(&mut processor, PointerButton::Secondary), None);
    }

    #[test]
    fn bound_keys_map_to_commands() {
        let processor = InputProcessor::new();
        assert_eq!(
            processor.handle_key_press("Digit0"),
            Some(EditorCommand::ToggleTopView)
        );
        assert_eq!(
            processor.handle_key_press("KeyN"),
            Some(EditorCommand::ToggleInspector)
        );
        assert_eq!(processor.handle_key_press("KeyQ"), None);
    }
}
