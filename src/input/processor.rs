//! Converts raw host events into intent messages.
//!
//! The `InputProcessor` owns the key-binding table and the gating rule for
//! keyboard navigation: key intents exist only while a selection is active,
//! mirroring a global key listener that is installed on select and removed
//! on close. It resolves nothing — item ids pass through as strings and are
//! interned by the engine.

use super::event::InputEvent;
use crate::options::KeybindingOptions;

/// Discrete keyboard actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Cycle the selection to the next item.
    NextItem,
    /// Cycle the selection to the previous item.
    PreviousItem,
    /// Dismiss the current selection.
    CloseSelection,
}

/// An intent message with unresolved item ids, produced from one raw event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputIntent {
    /// Pointer moved onto the named item.
    PointerEnter(String),
    /// Pointer left the named item.
    PointerLeave(String),
    /// Primary click on the named item.
    Click(String),
    /// A bound keyboard action.
    Key(KeyAction),
}

/// Stateless translator from [`InputEvent`]s to [`InputIntent`]s.
#[derive(Debug, Clone)]
pub struct InputProcessor {
    bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor with the given key bindings.
    #[must_use]
    pub fn new(bindings: KeybindingOptions) -> Self {
        Self { bindings }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn bindings(&self) -> &KeybindingOptions {
        &self.bindings
    }

    /// Convert one raw event into zero or one intents.
    ///
    /// `selection_active` gates keyboard actions: while nothing is
    /// selected, key presses produce no intent at all (they are not even
    /// queued, so a selection arriving later the same tick cannot consume
    /// a stale navigation key).
    #[must_use]
    pub fn process(
        &self,
        event: &InputEvent,
        selection_active: bool,
    ) -> Option<InputIntent> {
        match event {
            InputEvent::PointerEnter { id } => {
                Some(InputIntent::PointerEnter(id.clone()))
            }
            InputEvent::PointerLeave { id } => {
                Some(InputIntent::PointerLeave(id.clone()))
            }
            InputEvent::Click { id } => Some(InputIntent::Click(id.clone())),
            InputEvent::KeyDown { key } => {
                if !selection_active {
                    return None;
                }
                self.bindings.lookup(key).map(InputIntent::Key)
            }
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(KeybindingOptions::default())
    }
}
