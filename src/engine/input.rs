//! Host-facing input and lifecycle methods.

use super::ShowcaseEngine;
use crate::input::{InputEvent, InputIntent, KeyAction};
use crate::selection::Intent;

impl ShowcaseEngine {
    /// Feed one raw input event into the session.
    ///
    /// Events are converted to intents immediately (preserving arrival
    /// order) but applied only at the start of the next
    /// [`advance`](Self::advance). Pointer events referencing unknown item
    /// ids are silently dropped; keyboard events are dropped unless a
    /// selection is active.
    pub fn handle_event(&mut self, event: &InputEvent) {
        let selection_active = self.selection.is_selection_active();
        let Some(intent) = self.processor.process(event, selection_active)
        else {
            return;
        };

        let resolved = match intent {
            InputIntent::PointerEnter(id) => {
                self.resolve(&id).map(Intent::PointerEnter)
            }
            InputIntent::PointerLeave(id) => {
                self.resolve(&id).map(Intent::PointerLeave)
            }
            InputIntent::Click(id) => self.resolve(&id).map(Intent::Click),
            InputIntent::Key(action) => Some(match action {
                KeyAction::NextItem => Intent::Next,
                KeyAction::PreviousItem => Intent::Previous,
                KeyAction::CloseSelection => Intent::Close,
            }),
        };

        match resolved {
            Some(intent) => self.selection.queue(intent),
            None => log::debug!("dropping intent for unknown item id"),
        }
    }

    /// Record an asset-readiness report from the external loader. Until an
    /// item is ready the engine emits a hidden placeholder transform for
    /// it. Unknown ids are ignored with a warning.
    pub fn set_item_ready(&mut self, id: &str, ready: bool) {
        match self.slot_by_id.get(id) {
            Some(&slot) => self.ready[slot] = ready,
            None => log::warn!("readiness report for unknown item `{id}`"),
        }
    }

    /// Tear the session down: the selection machine enters its terminal
    /// state, decorative fields are dropped, and all further input is
    /// ignored. Idempotent.
    pub fn release(&mut self) {
        self.selection.release();
        self.burst = None;
        self.droplets = None;
        self.steam = None;
        self.frame.particles.clear();
        log::info!("showcase session released");
    }

    fn resolve(&self, id: &str) -> Option<usize> {
        self.slot_by_id.get(id).copied()
    }
}
