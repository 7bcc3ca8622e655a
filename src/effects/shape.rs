//! Periodic shape functions for decorative particle motion.
//!
//! Each shape maps a cycle position `u ∈ [0, 1)` to a normalized drift
//! direction factor plus opacity and scale envelopes. All three are pure
//! functions of `u`, which is what makes the particle fields restartable
//! and frame-rate independent.

use glam::Vec3;

use crate::util::easing::EasingFunction;

/// Decorative particle effect variants.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EffectShape {
    /// Radial energy burst: sparks fly outward from the field origin,
    /// flaring up and dying over the cycle.
    Burst,
    /// Condensation droplets: short falls with an ease-in, as if shaken
    /// off a cold surface.
    Droplet,
    /// Cold steam: soft blobs rising and growing before dissipating.
    Steam,
}

impl EffectShape {
    /// Drift progress along the particle's seeded direction at cycle
    /// position `u`.
    #[inline]
    #[must_use]
    pub fn drift(self, u: f32) -> f32 {
        match self {
            // Sparks decelerate as they fly out.
            Self::Burst | Self::Steam => {
                EasingFunction::QuadraticOut.evaluate(u)
            }
            // Droplets accelerate as they fall.
            Self::Droplet => EasingFunction::QuadraticIn.evaluate(u),
        }
    }

    /// Opacity envelope at cycle position `u` (fade in, hold, fade out).
    #[inline]
    #[must_use]
    pub fn opacity(self, u: f32) -> f32 {
        let bell = (u * std::f32::consts::PI).sin().max(0.0);
        match self {
            Self::Burst | Self::Droplet => bell,
            // Steam never reaches full opacity.
            Self::Steam => bell * 0.6,
        }
    }

    /// Scale envelope at cycle position `u`, as a multiple of the seeded
    /// base size.
    #[inline]
    #[must_use]
    pub fn scale(self, u: f32) -> f32 {
        let bell = (u * std::f32::consts::PI).sin().max(0.0);
        match self {
            // 0 → 1.5 → 0: sparks pop and vanish.
            Self::Burst => bell * 1.5,
            // 0.5 → 1.5 → 0.5: droplets swell mid-fall.
            Self::Droplet => 0.5 + bell,
            // 0.5 → 2.0: steam keeps growing until it dissipates.
            Self::Steam => 0.5 + 1.5 * EasingFunction::QuadraticOut.evaluate(u),
        }
    }

    /// Whether the seeded drift direction is free (unit sphere) or biased
    /// along the vertical axis.
    #[must_use]
    pub fn vertical_bias(self) -> Option<Vec3> {
        match self {
            Self::Burst => None,
            Self::Droplet => Some(Vec3::NEG_Y),
            Self::Steam => Some(Vec3::Y),
        }
    }
}
