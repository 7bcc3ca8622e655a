//! Per-tick update pipeline.
//!
//! One `advance` call runs the full data flow: queued intents → selection →
//! spring/camera targets → integration → frame rebuild. All mutation is
//! replacing the previous tick's derived state; nothing is recomputed
//! outside the tick.

use glam::{Quat, Vec3};

use super::ShowcaseEngine;
use crate::animation::float::FloatMotion;
use crate::animation::spring::clamp_frame_delta;
use crate::effects::{EffectShape, ParticleField};
use crate::scene::{
    ItemRenderState, MaterialParams, RenderFrame, SceneGraphAdapter,
};
use crate::selection::Phase;

impl ShowcaseEngine {
    /// Advance the session by `dt` seconds and rebuild the render frame.
    ///
    /// Queued intents are applied first, in arrival order, so a selection
    /// arriving mid-transition retargets the springs without resetting
    /// their velocity.
    pub fn advance(&mut self, dt: f32) -> &RenderFrame {
        let dt = clamp_frame_delta(dt);
        self.elapsed += dt;

        if self.selection.apply_queued() {
            self.retarget();
        }

        // The selected item's yaw chases an ever-advancing spin target.
        if let Some(slot) = self.selection.selected() {
            self.spin_angle += self.options.showcase.spin_speed * dt;
            self.channels[slot].yaw.set_target(self.spin_angle);
        }

        for channel in &mut self.channels {
            channel.position.step(dt);
            channel.scale.step(dt);
            channel.yaw.step(dt);
        }
        self.camera.advance(dt);

        self.rebuild_frame();
        &self.frame
    }

    /// Hand the current frame to a scene-graph adapter.
    pub fn apply_to(&self, adapter: &mut dyn SceneGraphAdapter) {
        adapter.apply_frame(&self.frame);
    }

    /// Rewrite every spring target and the camera goal from the new
    /// selection phase. Velocities are untouched.
    fn retarget(&mut self) {
        let phase = self.selection.phase();

        for slot in 0..self.channels.len() {
            let base = self.options.showcase.slot_position(slot);
            let (position, scale) = match phase {
                Phase::Selected(s) if s == slot => (
                    self.options.showcase.focus_point(),
                    self.options.showcase.selected_scale,
                ),
                Phase::Hovered(h) if h == slot => (
                    base + Vec3::Y * self.options.showcase.hover_lift,
                    self.options.showcase.hover_scale,
                ),
                _ => (base, self.options.showcase.base_scale),
            };
            let channel = &mut self.channels[slot];
            channel.position.set_target(position);
            channel.scale.set_target(scale);
            if !matches!(phase, Phase::Selected(s) if s == slot) {
                channel.yaw.set_target(0.0);
            }
        }

        match phase {
            Phase::Selected(slot) => {
                // Entry flourish: the item performs full turns on the way
                // in, then keeps spinning from wherever that leaves it.
                self.spin_angle = std::f32::consts::TAU
                    * self.options.showcase.entry_turns;
                self.channels[slot].yaw.set_target(self.spin_angle);
                let focus = self.options.showcase.focus_point();
                self.camera.focus_item(&self.options.camera, focus);
                self.spawn_fields(slot);
                log::debug!("selected `{}`", self.items[slot].id);
            }
            Phase::Idle | Phase::Hovered(_) => {
                self.spin_angle = 0.0;
                self.camera.focus_wide(&self.options.camera);
                self.burst = None;
                self.droplets = None;
                self.steam = None;
            }
            Phase::Released => {
                self.burst = None;
                self.droplets = None;
                self.steam = None;
            }
        }
    }

    /// Mount the decorative fields around the focused item, tinted with its
    /// theme color. Fields sample relative to their spawn time, so the
    /// choreography restarts cleanly on every selection.
    fn spawn_fields(&mut self, slot: usize) {
        let tint = self.items[slot].theme_color;
        let focus = self.options.showcase.focus_point();

        self.burst = Some(ParticleField::new(
            EffectShape::Burst,
            &self.options.effects.burst,
            tint,
            focus,
            self.elapsed,
            &mut self.rng,
        ));
        self.droplets = Some(ParticleField::new(
            EffectShape::Droplet,
            &self.options.effects.droplets,
            tint,
            focus + Vec3::Y * 1.5,
            self.elapsed,
            &mut self.rng,
        ));
        self.steam = Some(ParticleField::new(
            EffectShape::Steam,
            &self.options.effects.steam,
            tint,
            focus - Vec3::Y * 1.0,
            self.elapsed,
            &mut self.rng,
        ));
    }

    /// Recompute the render frame from current state.
    fn rebuild_frame(&mut self) {
        let phase = self.selection.phase();
        let idle_float = FloatMotion::IDLE.sample(self.elapsed);
        let selected_float = FloatMotion::SELECTED.sample(self.elapsed);

        self.frame.items.clear();
        for (slot, item) in self.items.iter().enumerate() {
            let channel = &self.channels[slot];

            // Placeholder until the loader reports the item's assets
            // ready: hidden, scale zero, no automatic retry here.
            if !self.ready[slot] {
                self.frame.items.push(ItemRenderState {
                    id: item.id.clone(),
                    position: channel.position.value(),
                    rotation: Quat::IDENTITY,
                    scale: 0.0,
                    material: MaterialParams {
                        theme_color: item.theme_color,
                        glow: 0.0,
                        opacity: 0.0,
                    },
                    hidden: true,
                });
                continue;
            }

            let selected = phase == Phase::Selected(slot);
            let hovered = phase == Phase::Hovered(slot);
            let float = if selected { selected_float } else { idle_float };
            // The selected item spins via its yaw spring; unselected items
            // sway instead.
            let yaw = channel.yaw.value()
                + if selected { 0.0 } else { float.yaw };
            let glow = if selected {
                1.0
            } else if hovered {
                0.5
            } else {
                0.0
            };

            self.frame.items.push(ItemRenderState {
                id: item.id.clone(),
                position: channel.position.value() + Vec3::Y * float.lift,
                rotation: Quat::from_rotation_y(yaw),
                scale: channel.scale.value(),
                material: MaterialParams {
                    theme_color: item.theme_color,
                    glow,
                    opacity: 1.0,
                },
                hidden: false,
            });
        }

        self.frame.particles.clear();
        for field in [
            self.burst.as_ref(),
            self.droplets.as_ref(),
            self.steam.as_ref(),
        ]
        .into_iter()
        .flatten()
        {
            field.sample_at(self.elapsed, &mut self.frame.particles);
        }

        self.frame.camera = Some(self.camera.pose());
    }
}
