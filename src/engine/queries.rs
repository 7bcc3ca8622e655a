//! Read-only accessors for hosts and tests.

use super::{Item, ShowcaseEngine};
use crate::camera::core::CameraPose;
use crate::options::Options;
use crate::scene::RenderFrame;
use crate::selection::Phase;

impl ShowcaseEngine {
    /// Current interaction phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.selection.phase()
    }

    /// The selected item, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.selection.selected().map(|slot| &self.items[slot])
    }

    /// The hovered item, if any.
    #[must_use]
    pub fn hovered_item(&self) -> Option<&Item> {
        self.selection.hovered().map(|slot| &self.items[slot])
    }

    /// Whether the session has been torn down.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.selection.is_released()
    }

    /// All items, in slot order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Whether the given item's assets have been reported ready.
    #[must_use]
    pub fn is_item_ready(&self, id: &str) -> bool {
        self.slot_by_id
            .get(id)
            .is_some_and(|&slot| self.ready[slot])
    }

    /// The session's immutable configuration.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The frame computed by the most recent [`advance`](Self::advance).
    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    /// Absolute session time in seconds.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Current camera pose.
    #[must_use]
    pub fn camera_pose(&self) -> CameraPose {
        self.camera.pose()
    }

    /// The camera's current distance goal (wide or near).
    #[must_use]
    pub fn camera_distance_target(&self) -> f32 {
        self.camera.distance_target()
    }

    /// Current turntable angle in radians.
    #[must_use]
    pub fn auto_rotate_angle(&self) -> f32 {
        self.camera.auto_rotate_angle()
    }

    /// Whether the camera turntable is advancing (true iff nothing is
    /// selected).
    #[must_use]
    pub fn is_auto_rotating(&self) -> bool {
        self.camera.is_auto_rotating()
    }

    /// Whether every spring channel (items and camera) is settled. Hosts
    /// may skip adapter writes while this holds and nothing is animating.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        let tol = self.options.springs.settle;
        self.camera.is_settled(tol)
            && self.channels.iter().all(|channel| {
                channel.position.is_settled(tol)
                    && channel.scale.is_settled(tol)
                    && channel.yaw.is_settled(tol)
            })
    }
}
