//! Damped-spring interpolation channels.
//!
//! Every animated property (item position, item scale, camera distance) is a
//! spring channel integrated with semi-implicit Euler once per tick. Targets
//! can be rewritten at any time without touching the current velocity, so a
//! transition interrupting another transition stays smooth.

use glam::Vec3;

use crate::error::VitrineError;

/// Maximum integration sub-step in seconds. Elapsed times longer than this
/// are integrated in multiple sub-steps of at most this size.
pub const MAX_SUB_STEP: f32 = 1.0 / 30.0;

/// Maximum elapsed time honored per tick. Longer gaps (e.g. a backgrounded
/// session) are truncated instead of replayed; the time-parametric systems
/// (particles, float motion) are unaffected by the truncation.
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// Sanitize a raw frame delta: non-finite and negative values collapse to
/// zero, oversized gaps are capped at [`MAX_FRAME_DELTA`].
#[inline]
#[must_use]
pub fn clamp_frame_delta(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt.min(MAX_FRAME_DELTA)
    } else {
        0.0
    }
}

/// A value a spring channel can animate.
///
/// Implemented for `f32` (scalar channels) and [`Vec3`] (vector channels).
pub trait SpringValue:
    Copy
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<f32, Output = Self>
{
    /// The additive identity (used to zero velocity).
    fn zero() -> Self;
    /// Euclidean magnitude, used for settle checks.
    fn magnitude(self) -> f32;
    /// Whether every component is finite.
    fn is_value_finite(self) -> bool;
}

impl SpringValue for f32 {
    fn zero() -> Self {
        0.0
    }

    fn magnitude(self) -> f32 {
        self.abs()
    }

    fn is_value_finite(self) -> bool {
        self.is_finite()
    }
}

impl SpringValue for Vec3 {
    fn zero() -> Self {
        Self::ZERO
    }

    fn magnitude(self) -> f32 {
        self.length()
    }

    fn is_value_finite(self) -> bool {
        self.is_finite()
    }
}

/// Damped harmonic oscillator coefficients for one channel class.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
)]
#[serde(default)]
pub struct SpringParams {
    /// Oscillator mass. Must be positive.
    pub mass: f32,
    /// Spring stiffness (tension). Must be positive.
    pub stiffness: f32,
    /// Velocity damping (friction). Must be non-negative.
    pub damping: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        // react-spring's carousel config: { mass: 1, tension: 180,
        // friction: 35 }
        Self {
            mass: 1.0,
            stiffness: 180.0,
            damping: 35.0,
        }
    }
}

impl SpringParams {
    /// Validate the coefficients, naming the offending channel class in the
    /// error message.
    pub fn validate(self, channel: &str) -> Result<Self, VitrineError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.mass) || !positive(self.stiffness) {
            return Err(VitrineError::InvalidConfig(format!(
                "spring channel `{channel}`: mass and stiffness must be \
                 positive (mass={}, stiffness={})",
                self.mass, self.stiffness
            )));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(VitrineError::InvalidConfig(format!(
                "spring channel `{channel}`: damping must be non-negative \
                 (damping={})",
                self.damping
            )));
        }
        Ok(self)
    }
}

/// Epsilons below which a channel counts as settled.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
)]
#[serde(default)]
pub struct SettleTolerance {
    /// Maximum |value − target| for a settled channel.
    pub value_epsilon: f32,
    /// Maximum |velocity| for a settled channel.
    pub velocity_epsilon: f32,
}

impl Default for SettleTolerance {
    fn default() -> Self {
        Self {
            value_epsilon: 1e-3,
            velocity_epsilon: 1e-3,
        }
    }
}

/// One spring-driven animation channel.
#[derive(Debug, Clone, Copy)]
pub struct SpringChannel<V: SpringValue> {
    value: V,
    velocity: V,
    target: V,
    params: SpringParams,
}

impl<V: SpringValue> SpringChannel<V> {
    /// Create a channel at rest on `initial`. `params` must already be
    /// validated.
    pub fn new(initial: V, params: SpringParams) -> Self {
        Self {
            value: initial,
            velocity: V::zero(),
            target: initial,
            params,
        }
    }

    /// Current value.
    #[inline]
    pub fn value(&self) -> V {
        self.value
    }

    /// Current velocity.
    #[inline]
    pub fn velocity(&self) -> V {
        self.velocity
    }

    /// Current target.
    #[inline]
    pub fn target(&self) -> V {
        self.target
    }

    /// Rewrite the target, preserving the current value and velocity so an
    /// in-flight transition bends toward the new goal instead of restarting.
    #[inline]
    pub fn set_target(&mut self, target: V) {
        self.target = target;
    }

    /// Teleport to `value` at rest (value, target and zero velocity).
    pub fn snap_to(&mut self, value: V) {
        self.value = value;
        self.target = value;
        self.velocity = V::zero();
    }

    /// Advance the channel by `dt` seconds.
    ///
    /// The delta is sanitized via [`clamp_frame_delta`] and integrated in
    /// sub-steps of at most [`MAX_SUB_STEP`], which keeps the explicit
    /// integration stable for any raw input delta.
    pub fn step(&mut self, dt: f32) {
        let dt = clamp_frame_delta(dt);
        if dt <= 0.0 {
            return;
        }

        let steps = (dt / MAX_SUB_STEP).ceil().max(1.0);
        let h = dt / steps;
        for _ in 0..steps as u32 {
            self.integrate(h);
        }
    }

    /// One semi-implicit Euler step of length `h` (≤ [`MAX_SUB_STEP`]).
    fn integrate(&mut self, h: f32) {
        let SpringParams {
            mass,
            stiffness,
            damping,
        } = self.params;

        let displacement = self.target - self.value;
        let accel = (displacement * stiffness - self.velocity * damping)
            * (1.0 / mass);
        self.velocity = self.velocity + accel * h;
        self.value = self.value + self.velocity * h;
    }

    /// Whether value and velocity are within the given tolerance of the
    /// target and zero respectively. Settled channels may skip output-side
    /// writes but keep accepting new targets.
    #[inline]
    pub fn is_settled(&self, tol: SettleTolerance) -> bool {
        self.velocity.magnitude() < tol.velocity_epsilon
            && (self.value - self.target).magnitude() < tol.value_epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar_channel() -> SpringChannel<f32> {
        SpringChannel::new(0.0, SpringParams::default())
    }

    #[test]
    fn converges_to_held_target() {
        let mut ch = scalar_channel();
        ch.set_target(10.0);

        // 5 simulated seconds at 60 Hz is far beyond the settle time for
        // the default coefficients.
        for _ in 0..300 {
            ch.step(1.0 / 60.0);
        }

        let tol = SettleTolerance::default();
        assert!(ch.is_settled(tol), "value={} vel={}", ch.value(), ch.velocity());
        assert!((ch.value() - 10.0).abs() < tol.value_epsilon);
    }

    #[test]
    fn vec3_channel_converges() {
        let mut ch =
            SpringChannel::new(Vec3::ZERO, SpringParams::default());
        ch.set_target(Vec3::new(0.0, 0.0, 2.0));

        for _ in 0..300 {
            ch.step(1.0 / 60.0);
        }

        assert!(ch.is_settled(SettleTolerance::default()));
    }

    #[test]
    fn stays_finite_under_arbitrary_deltas() {
        let mut ch = scalar_channel();
        ch.set_target(1.0e6);

        // Deterministic mix of tiny, huge, negative, and non-finite raw
        // deltas. None of them may produce a non-finite state.
        let deltas = [
            1.0e-6,
            0.016,
            3.0,
            1.0e12,
            -1.0,
            f32::NAN,
            f32::INFINITY,
            0.25,
        ];
        for i in 0..10_000 {
            ch.step(deltas[i % deltas.len()]);
            assert!(ch.value().is_finite(), "value diverged at step {i}");
            assert!(ch.velocity().is_finite(), "velocity diverged at step {i}");
        }
    }

    #[test]
    fn retarget_preserves_velocity() {
        let mut ch = scalar_channel();
        ch.set_target(10.0);
        for _ in 0..10 {
            ch.step(1.0 / 60.0);
        }
        let vel_before = ch.velocity();
        assert!(vel_before.abs() > 0.0);

        ch.set_target(-10.0);
        assert_eq!(ch.velocity(), vel_before);
        assert_eq!(ch.target(), -10.0);
    }

    #[test]
    fn snap_to_rests_on_value() {
        let mut ch = scalar_channel();
        ch.set_target(5.0);
        for _ in 0..20 {
            ch.step(1.0 / 60.0);
        }

        ch.snap_to(3.0);
        assert_eq!(ch.value(), 3.0);
        assert_eq!(ch.target(), 3.0);
        assert_eq!(ch.velocity(), 0.0);
        assert!(ch.is_settled(SettleTolerance::default()));
    }

    #[test]
    fn settled_channel_accepts_new_target() {
        let mut ch = scalar_channel();
        assert!(ch.is_settled(SettleTolerance::default()));

        ch.set_target(1.0);
        ch.step(1.0 / 60.0);
        assert!(!ch.is_settled(SettleTolerance::default()));
    }

    #[test]
    fn oversized_delta_matches_truncated_simulation() {
        // A 10 s gap is truncated to MAX_FRAME_DELTA and sub-stepped; the
        // result must be identical to explicitly stepping the truncated
        // duration at the sub-step size.
        let mut gapped = scalar_channel();
        gapped.set_target(1.0);
        gapped.step(10.0);

        let mut stepped = scalar_channel();
        stepped.set_target(1.0);
        let steps = (MAX_FRAME_DELTA / MAX_SUB_STEP).ceil() as u32;
        let h = MAX_FRAME_DELTA / steps as f32;
        for _ in 0..steps {
            stepped.step(h);
        }

        assert!((gapped.value() - stepped.value()).abs() < 1e-5);
    }

    #[test]
    fn rejects_non_positive_coefficients() {
        let bad_mass = SpringParams {
            mass: 0.0,
            ..SpringParams::default()
        };
        assert!(bad_mass.validate("test").is_err());

        let bad_stiffness = SpringParams {
            stiffness: -1.0,
            ..SpringParams::default()
        };
        assert!(bad_stiffness.validate("test").is_err());

        let bad_damping = SpringParams {
            damping: -0.1,
            ..SpringParams::default()
        };
        assert!(bad_damping.validate("test").is_err());

        assert!(SpringParams::default().validate("test").is_ok());
    }

    #[test]
    fn zero_damping_oscillates_without_diverging() {
        let params = SpringParams {
            mass: 1.0,
            stiffness: 100.0,
            damping: 0.0,
        };
        assert!(params.validate("test").is_ok());

        let mut ch = SpringChannel::new(0.0, params);
        ch.set_target(1.0);
        let mut peak = 0.0f32;
        for _ in 0..2_000 {
            ch.step(1.0 / 60.0);
            peak = peak.max(ch.value().abs());
            assert!(ch.value().is_finite());
        }
        // Undamped motion oscillates around the target; the sub-step clamp
        // keeps the explicit integrator from pumping energy unboundedly.
        assert!(peak < 10.0, "undamped spring diverged (peak {peak})");
    }
}
