//! Input event types for the widget system.
//!
//! The host application translates whatever its windowing layer produces
//! into these events and feeds them to each widget once per frame, in the
//! order they arrived. Positions are in window coordinates; widgets know
//! their own rectangle and do their own hit testing.

use soapbox_paint::Point;

/// Keyboard modifier state at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardModifiers {
    /// Shift key is pressed.
    pub shift: bool,
    /// Control key is pressed.
    pub control: bool,
    /// Alt/Option key is pressed.
    pub alt: bool,
    /// Meta/Command/Windows key is pressed.
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Only Shift pressed.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Only Control pressed.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// True when the platform's primary shortcut modifier is held
    /// (Control, or Command on macOS).
    pub fn command(&self) -> bool {
        self.control || self.meta
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left (primary) button.
    Left,
    /// Right (secondary) button.
    Right,
    /// Middle button (wheel click).
    Middle,
}

/// Keys the widgets react to.
///
/// Printable input arrives through [`KeyPressEvent::text`] rather than as
/// key variants; the letter variants here exist only for shortcut matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Backspace,
    Delete,
    Enter,
    A,
    C,
    V,
    X,
    /// Any key the widgets have no special handling for.
    Other,
}

/// A mouse button was pressed.
#[derive(Debug, Clone)]
pub struct MousePressEvent {
    /// Pointer position in window coordinates.
    pub pos: Point,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Modifier state at press time.
    pub modifiers: KeyboardModifiers,
}

/// A mouse button was released.
#[derive(Debug, Clone)]
pub struct MouseReleaseEvent {
    /// Pointer position in window coordinates.
    pub pos: Point,
    /// The button that was released.
    pub button: MouseButton,
}

/// The pointer moved.
#[derive(Debug, Clone)]
pub struct MouseMoveEvent {
    /// Pointer position in window coordinates.
    pub pos: Point,
}

/// The scroll wheel turned.
#[derive(Debug, Clone)]
pub struct WheelEvent {
    /// Pointer position in window coordinates at the time of the event.
    pub pos: Point,
    /// Scroll amount in lines. Positive scrolls content up (wheel toward
    /// the user), negative scrolls content down.
    pub delta_lines: f32,
}

/// A key was pressed.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// The logical key.
    pub key: Key,
    /// Modifier state at press time.
    pub modifiers: KeyboardModifiers,
    /// The text this key press produced, if any. Empty for pure
    /// navigation/editing keys.
    pub text: String,
}

impl KeyPressEvent {
    /// Create a key press with no produced text.
    pub fn key(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            key,
            modifiers,
            text: String::new(),
        }
    }

    /// Create a key press carrying printable text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            key: Key::Other,
            modifiers: KeyboardModifiers::NONE,
            text: text.into(),
        }
    }
}

/// Any input event a widget can receive.
#[derive(Debug, Clone)]
pub enum WidgetEvent {
    MousePress(MousePressEvent),
    MouseRelease(MouseReleaseEvent),
    MouseMove(MouseMoveEvent),
    Wheel(WheelEvent),
    KeyPress(KeyPressEvent),
}

impl WidgetEvent {
    /// Convenience constructor for a left-button press with no modifiers.
    pub fn left_press(pos: Point) -> Self {
        Self::MousePress(MousePressEvent {
            pos,
            button: MouseButton::Left,
            modifiers: KeyboardModifiers::NONE,
        })
    }

    /// Convenience constructor for a left-button release.
    pub fn left_release(pos: Point) -> Self {
        Self::MouseRelease(MouseReleaseEvent {
            pos,
            button: MouseButton::Left,
        })
    }

    /// Convenience constructor for a pointer move.
    pub fn pointer_move(pos: Point) -> Self {
        Self::MouseMove(MouseMoveEvent { pos })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_any() {
        assert!(!KeyboardModifiers::NONE.any());
        assert!(KeyboardModifiers::SHIFT.any());
        assert!(KeyboardModifiers::CTRL.any());
    }

    #[test]
    fn test_modifiers_command() {
        assert!(KeyboardModifiers::CTRL.command());
        let meta = KeyboardModifiers {
            meta: true,
            ..KeyboardModifiers::NONE
        };
        assert!(meta.command());
        assert!(!KeyboardModifiers::SHIFT.command());
    }
}
