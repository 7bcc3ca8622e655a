//! The showcase engine: one carousel session.
//!
//! [`ShowcaseEngine`] exclusively owns every piece of session state — the
//! item list, the selection machine, the spring channels, the camera rig,
//! the particle fields, and per-item readiness flags. Hosts feed it
//! [`InputEvent`](crate::input::InputEvent)s as they arrive and call
//! [`advance`](ShowcaseEngine::advance) once per scheduler tick; the
//! resulting [`RenderFrame`](crate::scene::RenderFrame) goes to a
//! [`SceneGraphAdapter`](crate::scene::SceneGraphAdapter).

mod core;
mod input;
mod queries;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashMap;

use crate::animation::spring::SpringChannel;
use crate::camera::rig::CameraRig;
use crate::effects::ParticleField;
use crate::error::VitrineError;
use crate::input::InputProcessor;
use crate::options::Options;
use crate::scene::{ItemId, RenderFrame};
use crate::selection::SelectionMachine;

/// One showcase item: immutable identity and display attributes, fixed for
/// the life of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Interned identifier.
    pub id: ItemId,
    /// RGB theme color.
    pub theme_color: [f32; 3],
    /// Base transform slot (0-based, left to right).
    pub slot: usize,
}

/// Spring channels animating one item.
#[derive(Debug)]
struct ItemChannels {
    position: SpringChannel<Vec3>,
    scale: SpringChannel<f32>,
    yaw: SpringChannel<f32>,
}

/// Owns and advances all carousel session state.
pub struct ShowcaseEngine {
    options: Options,
    items: Vec<Item>,
    slot_by_id: FxHashMap<String, usize>,
    selection: SelectionMachine,
    camera: CameraRig,
    channels: Vec<ItemChannels>,
    /// Accumulated yaw of the selected item: the entry turn plus the
    /// continuous spin. The selected item's yaw spring chases this.
    spin_angle: f32,
    burst: Option<ParticleField>,
    droplets: Option<ParticleField>,
    steam: Option<ParticleField>,
    /// Per-slot asset readiness reported by the external loader.
    ready: Vec<bool>,
    /// Absolute session time in seconds, advanced by clamped deltas.
    elapsed: f32,
    frame: RenderFrame,
    processor: InputProcessor,
    rng: StdRng,
}

impl ShowcaseEngine {
    /// Build a session from validated options.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::InvalidConfig`] for an empty item list,
    /// duplicate item ids, or non-positive spring coefficients.
    pub fn new(options: Options) -> Result<Self, VitrineError> {
        options.validate()?;

        let items: Vec<Item> = options
            .showcase
            .items
            .iter()
            .enumerate()
            .map(|(slot, item)| Item {
                id: ItemId::new(&item.id),
                theme_color: item.theme_color,
                slot,
            })
            .collect();

        let mut slot_by_id = FxHashMap::default();
        for item in &items {
            let _ = slot_by_id.insert(item.id.as_str().to_owned(), item.slot);
        }

        let channels = (0..items.len())
            .map(|slot| ItemChannels {
                position: SpringChannel::new(
                    options.showcase.slot_position(slot),
                    options.springs.item_position,
                ),
                scale: SpringChannel::new(
                    options.showcase.base_scale,
                    options.springs.item_scale,
                ),
                yaw: SpringChannel::new(0.0, options.springs.item_yaw),
            })
            .collect();

        let camera = CameraRig::new(&options.camera, options.springs.camera);
        let rng = options
            .showcase
            .particle_seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let processor = InputProcessor::new(options.keybindings.clone());
        let selection = SelectionMachine::new(items.len());
        let ready = vec![false; items.len()];

        log::info!("showcase engine ready: {} item(s)", items.len());

        Ok(Self {
            options,
            items,
            slot_by_id,
            selection,
            camera,
            channels,
            spin_angle: 0.0,
            burst: None,
            droplets: None,
            steam: None,
            ready,
            elapsed: 0.0,
            frame: RenderFrame::default(),
            processor,
            rng,
        })
    }
}
