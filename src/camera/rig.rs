//! Turntable camera rig driven by spring channels.
//!
//! The rig derives its pose from an orbit angle, a sprung distance, and a
//! sprung focus point. Selection state decides the targets: the wide
//! overview with auto-rotation while nothing is selected, a near dolly onto
//! the focused item otherwise. Targets are rewritten without resetting
//! spring velocity, so interrupting a transition bends the motion instead
//! of restarting it.

use glam::{Quat, Vec3};

use crate::animation::spring::{
    SettleTolerance, SpringChannel, SpringParams,
};
use crate::camera::core::CameraPose;
use crate::options::CameraOptions;

/// Derives camera pose targets from selection state and integrates them.
#[derive(Debug)]
pub struct CameraRig {
    distance: SpringChannel<f32>,
    focus: SpringChannel<Vec3>,
    /// Turntable angle in radians. Frozen while a selection is active,
    /// resumed from the same value afterwards.
    auto_rotate_angle: f32,
    auto_rotate_enabled: bool,
    auto_rotate_speed: f32,
    fovy: f32,
}

impl CameraRig {
    /// Create a rig resting at the wide overview pose. `spring` must
    /// already be validated.
    #[must_use]
    pub fn new(options: &CameraOptions, spring: SpringParams) -> Self {
        Self {
            distance: SpringChannel::new(options.wide_distance, spring),
            focus: SpringChannel::new(Vec3::ZERO, spring),
            auto_rotate_angle: 0.0,
            auto_rotate_enabled: true,
            auto_rotate_speed: options.auto_rotate_speed,
            fovy: options.fovy,
        }
    }

    /// Retarget toward the wide overview: distance out, focus back to the
    /// carousel center, turntable resumed from its frozen angle.
    pub fn focus_wide(&mut self, options: &CameraOptions) {
        self.distance.set_target(options.wide_distance);
        self.focus.set_target(Vec3::ZERO);
        self.auto_rotate_enabled = true;
    }

    /// Retarget onto a selected item's focus point: distance in, turntable
    /// frozen at its current angle.
    pub fn focus_item(&mut self, options: &CameraOptions, point: Vec3) {
        self.distance.set_target(options.near_distance);
        self.focus.set_target(point);
        self.auto_rotate_enabled = false;
    }

    /// Integrate the rig by `dt` seconds: advance the turntable (when
    /// enabled) and step both spring channels.
    pub fn advance(&mut self, dt: f32) {
        if self.auto_rotate_enabled {
            self.auto_rotate_angle = (self.auto_rotate_angle
                + self.auto_rotate_speed * dt)
                % std::f32::consts::TAU;
        }
        self.distance.step(dt);
        self.focus.step(dt);
    }

    /// Current pose: the eye orbits the focus point in the ground plane at
    /// the sprung distance.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        let focus = self.focus.value();
        let orbit = Quat::from_rotation_y(self.auto_rotate_angle);
        let position = focus + orbit * Vec3::Z * self.distance.value();
        CameraPose {
            position,
            look_at: focus,
            fovy: self.fovy,
        }
    }

    /// Current turntable angle in radians.
    #[must_use]
    pub fn auto_rotate_angle(&self) -> f32 {
        self.auto_rotate_angle
    }

    /// Whether the turntable is advancing (true iff nothing is selected).
    #[must_use]
    pub fn is_auto_rotating(&self) -> bool {
        self.auto_rotate_enabled
    }

    /// Current distance target (wide or near, depending on selection).
    #[must_use]
    pub fn distance_target(&self) -> f32 {
        self.distance.target()
    }

    /// Current sprung distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance.value()
    }

    /// Whether both channels are settled within `tol`.
    #[must_use]
    pub fn is_settled(&self, tol: SettleTolerance) -> bool {
        self.distance.is_settled(tol) && self.focus.is_settled(tol)
    }
}
