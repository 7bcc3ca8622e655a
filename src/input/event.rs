//! Platform-agnostic input events.
//!
//! The host windowing layer translates its native pointer/keyboard events
//! into these and feeds them to the engine, which converts them into
//! queued selection intents via the [`InputProcessor`](super::InputProcessor).

/// A raw input event from the host environment.
///
/// Pointer events reference items by their configured id string; keyboard
/// events carry the physical key name (`"ArrowRight"`, `"Escape"`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer moved onto an item.
    PointerEnter {
        /// Configured item id.
        id: String,
    },
    /// Pointer left an item.
    PointerLeave {
        /// Configured item id.
        id: String,
    },
    /// Primary click on an item.
    Click {
        /// Configured item id.
        id: String,
    },
    /// A key was pressed.
    KeyDown {
        /// Physical key name in `KeyCode` debug format.
        key: String,
    },
}

impl InputEvent {
    /// Convenience constructor for a pointer-enter event.
    #[must_use]
    pub fn pointer_enter(id: &str) -> Self {
        Self::PointerEnter { id: id.to_owned() }
    }

    /// Convenience constructor for a pointer-leave event.
    #[must_use]
    pub fn pointer_leave(id: &str) -> Self {
        Self::PointerLeave { id: id.to_owned() }
    }

    /// Convenience constructor for a click event.
    #[must_use]
    pub fn click(id: &str) -> Self {
        Self::Click { id: id.to_owned() }
    }

    /// Convenience constructor for a key-down event.
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown { key: key.to_owned() }
    }
}
