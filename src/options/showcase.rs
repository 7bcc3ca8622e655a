use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VitrineError;

/// One showcase item as configured by the host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ItemOptions {
    /// Stable identifier, referenced by input events and readiness signals.
    pub id: String,
    /// RGB theme color tinting accent lights and particle effects.
    pub theme_color: [f32; 3],
}

/// Item list and carousel layout/interaction parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Showcase", inline)]
#[serde(default)]
pub struct ShowcaseOptions {
    /// The items on display, in slot order. Must be non-empty with unique
    /// ids.
    #[schemars(skip)]
    pub items: Vec<ItemOptions>,
    /// Horizontal distance between neighboring slots, world units.
    #[schemars(title = "Slot Spacing", range(min = 1.0, max = 20.0))]
    pub spacing: f32,
    /// World-space point a selected item glides to.
    #[schemars(skip)]
    pub focus_point: [f32; 3],
    /// Uniform scale of an unselected, unhovered item.
    #[schemars(title = "Base Scale", range(min = 0.1, max = 20.0))]
    pub base_scale: f32,
    /// Uniform scale while hovered.
    #[schemars(title = "Hover Scale", range(min = 0.1, max = 20.0))]
    pub hover_scale: f32,
    /// Uniform scale while selected.
    #[schemars(title = "Selected Scale", range(min = 0.1, max = 20.0))]
    pub selected_scale: f32,
    /// Vertical lift while hovered, world units.
    #[schemars(title = "Hover Lift", range(min = 0.0, max = 5.0))]
    pub hover_lift: f32,
    /// Continuous yaw rate of the selected item, radians per second.
    #[schemars(title = "Spin Speed", range(min = 0.0, max = 3.0))]
    pub spin_speed: f32,
    /// Full turns performed while gliding into the focused view.
    #[schemars(title = "Entry Turns", range(min = 0.0, max = 3.0))]
    pub entry_turns: f32,
    /// Seed for the decorative-particle RNG. `None` draws from entropy;
    /// setting it makes particle layouts reproducible.
    #[schemars(skip)]
    pub particle_seed: Option<u64>,
}

impl Default for ShowcaseOptions {
    fn default() -> Self {
        Self {
            items: vec![
                ItemOptions {
                    id: "original".to_owned(),
                    theme_color: [0.0, 0.239, 0.647],
                },
                ItemOptions {
                    id: "sugarfree".to_owned(),
                    theme_color: [0.0, 0.627, 0.863],
                },
                ItemOptions {
                    id: "orange".to_owned(),
                    theme_color: [1.0, 0.42, 0.208],
                },
            ],
            spacing: 6.0,
            focus_point: [0.0, 0.0, 2.0],
            base_scale: 4.5,
            hover_scale: 5.5,
            selected_scale: 9.0,
            hover_lift: 0.5,
            spin_speed: 0.48,
            entry_turns: 1.0,
            particle_seed: None,
        }
    }
}

impl ShowcaseOptions {
    /// Number of configured items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Resting position of a slot: items line up on the x axis, centered
    /// on the origin.
    #[must_use]
    pub fn slot_position(&self, slot: usize) -> Vec3 {
        let offset = (self.items.len().saturating_sub(1)) as f32
            * self.spacing
            / 2.0;
        Vec3::new(slot as f32 * self.spacing - offset, 0.0, 0.0)
    }

    /// The focus point as a vector.
    #[must_use]
    pub fn focus_point(&self) -> Vec3 {
        Vec3::from_array(self.focus_point)
    }

    /// Reject empty item lists and duplicate ids.
    pub fn validate(&self) -> Result<(), VitrineError> {
        if self.items.is_empty() {
            return Err(VitrineError::InvalidConfig(
                "item list must not be empty".to_owned(),
            ));
        }
        for (i, item) in self.items.iter().enumerate() {
            if self.items[..i].iter().any(|other| other.id == item.id) {
                return Err(VitrineError::InvalidConfig(format!(
                    "duplicate item id `{}`",
                    item.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_items_are_valid() {
        let opts = ShowcaseOptions::default();
        assert!(opts.validate().is_ok());
        assert_eq!(opts.item_count(), 3);
    }

    #[test]
    fn slots_center_on_origin() {
        let opts = ShowcaseOptions::default();
        assert_eq!(opts.slot_position(0), Vec3::new(-6.0, 0.0, 0.0));
        assert_eq!(opts.slot_position(1), Vec3::ZERO);
        assert_eq!(opts.slot_position(2), Vec3::new(6.0, 0.0, 0.0));
    }

    #[test]
    fn empty_item_list_rejected() {
        let opts = ShowcaseOptions {
            items: vec![],
            ..ShowcaseOptions::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut opts = ShowcaseOptions::default();
        opts.items[2].id = "original".to_owned();
        assert!(opts.validate().is_err());
    }
}
