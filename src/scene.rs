//! Scene-graph adapter boundary.
//!
//! The engine never talks to a renderer directly. Once per tick it
//! assembles a [`RenderFrame`] — item transforms, material parameters,
//! particle sprites, and the camera pose — and hands it to whatever
//! implements [`SceneGraphAdapter`]. Adapters own no carousel state and
//! perform no physics.

use std::fmt;
use std::sync::Arc;

use glam::{Quat, Vec3};

use crate::camera::core::CameraPose;
use crate::effects::ParticleSprite;

/// Opaque, cheaply cloneable item identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(Arc<str>);

impl ItemId {
    /// Intern an id string.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(Arc::from(id))
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Material parameters forwarded to the renderer for one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialParams {
    /// RGB theme color.
    pub theme_color: [f32; 3],
    /// Accent-light boost in [0, 1]: 0 at rest, raised while hovered,
    /// maximal while selected.
    pub glow: f32,
    /// Overall opacity in [0, 1]. Zero while the item's assets are not
    /// ready.
    pub opacity: f32,
}

/// Per-item transform + material output for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRenderState {
    /// Which item this state belongs to.
    pub id: ItemId,
    /// World-space position.
    pub position: Vec3,
    /// World-space rotation.
    pub rotation: Quat,
    /// Uniform scale factor. Zero while assets are not ready.
    pub scale: f32,
    /// Material parameters.
    pub material: MaterialParams,
    /// True while the item's assets have not been reported ready; the
    /// renderer should skip the mesh entirely.
    pub hidden: bool,
}

/// Everything the renderer needs for one tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderFrame {
    /// Item states, in slot order.
    pub items: Vec<ItemRenderState>,
    /// Decorative particle sprites (empty unless a selection is active).
    pub particles: Vec<ParticleSprite>,
    /// Camera pose.
    pub camera: Option<CameraPose>,
}

/// External boundary translating computed transforms and materials into
/// renderer calls.
///
/// Implementations are handed an immutable frame once per tick, after all
/// carousel state has been updated. They must not call back into the
/// engine.
pub trait SceneGraphAdapter {
    /// Apply one tick's worth of output to the renderer.
    fn apply_frame(&mut self, frame: &RenderFrame);
}

/// Adapter that discards every frame. Useful for headless runs and tests
/// that only inspect engine state.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAdapter;

impl SceneGraphAdapter for NullAdapter {
    fn apply_frame(&mut self, _frame: &RenderFrame) {}
}
