//! A small state machine for pointer-capture interactions.
//!
//! Scrollbar-handle dragging and text-selection dragging are the same shape
//! of interaction: press inside a region, track pointer motion until
//! release. Modeling that as an explicit `Idle -> Active -> Idle` machine
//! (instead of boolean flags) makes forced cancellation, e.g. the pointer
//! leaving the window, a single transition.

/// Tracks whether a pointer-capture interaction is in progress.
///
/// `S` carries whatever the interaction needs to remember from the initial
/// press, such as the grab offset inside a scrollbar handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drag<S> {
    /// No interaction in progress.
    Idle,
    /// The pointer is captured; motion events drive the interaction.
    Active(S),
}

impl<S> Drag<S> {
    /// Start an interaction, capturing the press state.
    pub fn begin(&mut self, state: S) {
        *self = Self::Active(state);
    }

    /// End the interaction normally (pointer released).
    pub fn end(&mut self) {
        *self = Self::Idle;
    }

    /// Forcibly end the interaction (pointer lost, focus change).
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// The captured press state, if an interaction is in progress.
    pub fn active(&self) -> Option<&S> {
        match self {
            Self::Idle => None,
            Self::Active(state) => Some(state),
        }
    }

    /// True while an interaction is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}

impl<S> Default for Drag<S> {
    fn default() -> Self {
        Self::Idle
    }
}

/// Press state for a scrollbar-handle drag: the vertical distance from the
/// top of the handle to the grab point, so the handle does not jump under
/// the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleGrab {
    /// Pointer y minus handle top at press time, in pixels.
    pub grab_offset: f32,
}

/// Press state for a text-selection drag. The selection anchor lives in the
/// edit buffer, so there is nothing extra to remember.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionDrag;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_transitions() {
        let mut drag: Drag<HandleGrab> = Drag::Idle;
        assert!(!drag.is_active());

        drag.begin(HandleGrab { grab_offset: 4.0 });
        assert!(drag.is_active());
        assert_eq!(drag.active().map(|g| g.grab_offset), Some(4.0));

        drag.end();
        assert!(!drag.is_active());
    }

    #[test]
    fn test_drag_cancel_from_any_state() {
        let mut drag: Drag<SelectionDrag> = Drag::Idle;
        drag.cancel();
        assert!(!drag.is_active());

        drag.begin(SelectionDrag);
        drag.cancel();
        assert!(!drag.is_active());
    }
}
