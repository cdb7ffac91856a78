//! Pointer events as the editor sees them.
//!
//! Editing only needs to know where the pointer is and when the primary
//! button goes down or up. Window backends translate their native events
//! into these and hand them to an [`InputProcessor`](super::InputProcessor).

/// One pointer event, in physical pixels from the viewport's top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer is now at `(x, y)`. Drives dragging while an object is
    /// held.
    PointerMoved {
        /// Pixels from the left edge.
        x: f32,
        /// Pixels from the top edge.
        y: f32,
    },
    /// A pointer button changed state at the last reported position.
    Button {
        /// The button.
        button: PointerButton,
        /// Down (`true`) or up (`false`).
        pressed: bool,
    },
}

impl InputEvent {
    /// Pointer position carried by the event, if any.
    #[must_use]
    pub fn position(&self) -> Option<(f32, f32)> {
        match *self {
            Self::PointerMoved { x, y } => Some((x, y)),
            Self::Button { .. } => None,
        }
    }
}

/// Which pointer button an [`InputEvent::Button`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Selects, grabs and releases objects.
    Primary,
    /// Reserved for the host (context menus and the like).
    Secondary,
    /// Any other button. Ignored by the editor.
    Other,
}

impl PointerButton {
    /// Whether this button picks and drags.
    #[must_use]
    pub fn is_primary(self) -> bool {
        self == Self::Primary
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Primary,
            winit::event::MouseButton::Right => Self::Secondary,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_motion_carries_a_position() {
        let moved = InputEvent::PointerMoved { x: 4.0, y: 9.0 };
        assert_eq!(moved.position(), Some((4.0, 9.0)));
        let button = InputEvent::Button {
            button: PointerButton::Primary,
            pressed: true,
        };
        assert_eq!(button.position(), None);
    }

    #[test]
    fn primary_is_the_editing_button() {
        assert!(PointerButton::Primary.is_primary());
        assert!(!PointerButton::Secondary.is_primary());
        assert!(!PointerButton::Other.is_primary());
    }

    #[cfg(feature = "viewer")]
    #[test]
    fn winit_left_button_is_primary() {
        assert_eq!(
            PointerButton::from(winit::event::MouseButton::Left),
            PointerButton::Primary
        );
        assert_eq!(
            PointerButton::from(winit::event::MouseButton::Middle),
            PointerButton::Other
        );
    }
}
