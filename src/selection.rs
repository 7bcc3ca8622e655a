//! Selection state machine for the showcase carousel.
//!
//! Pointer and keyboard input arrives as [`Intent`] messages referencing
//! item slots. Intents are queued as they arrive and applied in arrival
//! order at the start of the next tick, so no transition is ever observable
//! mid-tick. Selection is modal: while an item is selected, only navigation
//! and close intents (plus the idempotent re-click) are honored.

use std::collections::VecDeque;

/// A discrete user input, queued for processing at the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Pointer moved onto the item in the given slot.
    PointerEnter(usize),
    /// Pointer left the item in the given slot.
    PointerLeave(usize),
    /// Primary click on the item in the given slot.
    Click(usize),
    /// Cycle the selection forward (wraps).
    Next,
    /// Cycle the selection backward (wraps).
    Previous,
    /// Dismiss the current selection.
    Close,
}

/// Interaction phase of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing hovered or selected; the camera turntable is running.
    #[default]
    Idle,
    /// Pointer resting on an item, nothing selected.
    Hovered(usize),
    /// An item holds the focused view.
    Selected(usize),
    /// Terminal state after teardown; every intent is ignored.
    Released,
}

/// Owns which item is idle/hovered/selected and processes queued intents.
///
/// Slot indices are 0-based over a fixed item count. With a count of zero
/// the machine stays [`Phase::Idle`] forever.
#[derive(Debug)]
pub struct SelectionMachine {
    phase: Phase,
    item_count: usize,
    queue: VecDeque<Intent>,
}

impl SelectionMachine {
    /// Create a machine over `item_count` slots, starting idle.
    #[must_use]
    pub fn new(item_count: usize) -> Self {
        Self {
            phase: Phase::Idle,
            item_count,
            queue: VecDeque::new(),
        }
    }

    /// Current phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Slot of the hovered item, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        match self.phase {
            Phase::Hovered(i) => Some(i),
            _ => None,
        }
    }

    /// Slot of the selected item, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        match self.phase {
            Phase::Selected(i) => Some(i),
            _ => None,
        }
    }

    /// Whether an item currently holds the focused view. Keyboard
    /// navigation is accepted exactly while this is true.
    #[must_use]
    pub fn is_selection_active(&self) -> bool {
        matches!(self.phase, Phase::Selected(_))
    }

    /// Whether the machine has been torn down.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.phase == Phase::Released
    }

    /// Enqueue an intent for the next tick. Ignored after teardown.
    pub fn queue(&mut self, intent: Intent) {
        if self.phase == Phase::Released {
            return;
        }
        self.queue.push_back(intent);
    }

    /// Apply all queued intents in arrival order. Returns `true` if the
    /// phase changed.
    pub fn apply_queued(&mut self) -> bool {
        let before = self.phase;
        while let Some(intent) = self.queue.pop_front() {
            self.apply(intent);
        }
        self.phase != before
    }

    /// Tear the machine down: enters the terminal [`Phase::Released`] state
    /// and drops any queued intents. Idempotent.
    pub fn release(&mut self) {
        self.phase = Phase::Released;
        self.queue.clear();
    }

    fn apply(&mut self, intent: Intent) {
        let n = self.item_count;
        self.phase = match (self.phase, intent) {
            // Teardown is terminal.
            (Phase::Released, _) => Phase::Released,

            // Out-of-range slots are silently ignored.
            (
                phase,
                Intent::PointerEnter(i)
                | Intent::PointerLeave(i)
                | Intent::Click(i),
            ) if i >= n => phase,

            (Phase::Idle, Intent::PointerEnter(i)) => Phase::Hovered(i),
            (Phase::Hovered(h), Intent::PointerLeave(i)) if h == i => {
                Phase::Idle
            }
            // Hover may jump directly between items when the pointer
            // crosses from one to the next without a leave in between.
            (Phase::Hovered(_), Intent::PointerEnter(i)) => Phase::Hovered(i),

            (Phase::Idle | Phase::Hovered(_), Intent::Click(i)) => {
                Phase::Selected(i)
            }

            // Selection is modal: re-clicking the selected item is a no-op,
            // every other pointer intent is ignored.
            (Phase::Selected(s), Intent::Next) => {
                Phase::Selected((s + 1) % n)
            }
            (Phase::Selected(s), Intent::Previous) => {
                Phase::Selected((s + n - 1) % n)
            }
            (Phase::Selected(_), Intent::Close) => Phase::Idle,

            (phase, _) => phase,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> SelectionMachine {
        SelectionMachine::new(3)
    }

    fn drive(m: &mut SelectionMachine, intents: &[Intent]) {
        for &i in intents {
            m.queue(i);
        }
        let _ = m.apply_queued();
    }

    #[test]
    fn click_from_idle_selects() {
        let mut m = machine();
        drive(&mut m, &[Intent::Click(1)]);
        assert_eq!(m.phase(), Phase::Selected(1));
    }

    #[test]
    fn reclick_of_selected_is_noop() {
        let mut m = machine();
        drive(&mut m, &[Intent::Click(1)]);
        let changed = {
            m.queue(Intent::Click(1));
            m.apply_queued()
        };
        assert!(!changed);
        assert_eq!(m.phase(), Phase::Selected(1));
    }

    #[test]
    fn hover_enter_and_leave() {
        let mut m = machine();
        drive(&mut m, &[Intent::PointerEnter(0)]);
        assert_eq!(m.phase(), Phase::Hovered(0));

        // Leave for a different slot is ignored.
        drive(&mut m, &[Intent::PointerLeave(2)]);
        assert_eq!(m.phase(), Phase::Hovered(0));

        drive(&mut m, &[Intent::PointerLeave(0)]);
        assert_eq!(m.phase(), Phase::Idle);
    }

    #[test]
    fn hover_jumps_between_adjacent_items() {
        let mut m = machine();
        drive(&mut m, &[Intent::PointerEnter(0), Intent::PointerEnter(1)]);
        assert_eq!(m.phase(), Phase::Hovered(1));
        // The stale leave for the first item must not clear the new hover.
        drive(&mut m, &[Intent::PointerLeave(0)]);
        assert_eq!(m.phase(), Phase::Hovered(1));
    }

    #[test]
    fn click_clears_hover() {
        let mut m = machine();
        drive(&mut m, &[Intent::PointerEnter(0), Intent::Click(1)]);
        assert_eq!(m.phase(), Phase::Selected(1));
        assert_eq!(m.hovered(), None);
    }

    #[test]
    fn next_previous_wrap() {
        let mut m = machine();
        drive(&mut m, &[Intent::Click(2)]);

        drive(&mut m, &[Intent::Next]);
        assert_eq!(m.phase(), Phase::Selected(0), "wraps forward at N-1");

        drive(&mut m, &[Intent::Previous]);
        assert_eq!(m.phase(), Phase::Selected(2), "wraps backward at 0");

        drive(&mut m, &[Intent::Previous]);
        assert_eq!(m.phase(), Phase::Selected(1));
    }

    #[test]
    fn close_returns_to_idle() {
        let mut m = machine();
        drive(&mut m, &[Intent::Click(0), Intent::Close]);
        assert_eq!(m.phase(), Phase::Idle);
    }

    #[test]
    fn selection_is_modal() {
        let mut m = machine();
        drive(&mut m, &[Intent::Click(1)]);

        // Pointer intents for other items are ignored while selected.
        drive(
            &mut m,
            &[
                Intent::PointerEnter(0),
                Intent::Click(2),
                Intent::PointerLeave(1),
            ],
        );
        assert_eq!(m.phase(), Phase::Selected(1));
    }

    #[test]
    fn navigation_ignored_outside_selection() {
        let mut m = machine();
        drive(&mut m, &[Intent::Next, Intent::Previous, Intent::Close]);
        assert_eq!(m.phase(), Phase::Idle);

        drive(&mut m, &[Intent::PointerEnter(1), Intent::Next]);
        assert_eq!(m.phase(), Phase::Hovered(1));
    }

    #[test]
    fn out_of_range_slots_ignored() {
        let mut m = machine();
        drive(&mut m, &[Intent::PointerEnter(7), Intent::Click(3)]);
        assert_eq!(m.phase(), Phase::Idle);
    }

    #[test]
    fn empty_carousel_stays_idle() {
        let mut m = SelectionMachine::new(0);
        drive(
            &mut m,
            &[Intent::Click(0), Intent::PointerEnter(0), Intent::Next],
        );
        assert_eq!(m.phase(), Phase::Idle);
    }

    #[test]
    fn intents_apply_in_arrival_order() {
        // PointerEnter(A) then Click(B): the final state is Selected(B)
        // and the hover is gone once the queue is drained.
        let mut m = machine();
        m.queue(Intent::PointerEnter(0));
        m.queue(Intent::Click(1));
        assert_eq!(m.phase(), Phase::Idle, "nothing applies before the tick");

        let changed = m.apply_queued();
        assert!(changed);
        assert_eq!(m.phase(), Phase::Selected(1));
        assert_eq!(m.hovered(), None);
    }

    #[test]
    fn release_is_terminal_and_idempotent() {
        let mut m = machine();
        drive(&mut m, &[Intent::Click(1)]);

        m.release();
        assert!(m.is_released());

        drive(&mut m, &[Intent::Click(0), Intent::Close]);
        assert_eq!(m.phase(), Phase::Released);

        m.release();
        assert!(m.is_released());
    }
}
