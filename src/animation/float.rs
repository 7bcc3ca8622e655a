//! Idle float motion: gentle sway and bob for showcase items.
//!
//! Samples are pure functions of absolute elapsed time, so float motion is
//! restartable and immune to frame-rate variation — re-evaluating at the
//! same instant always yields the same pose offset.

/// Sway/bob intensity profile for one interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMotion {
    /// Time multiplier applied before the periodic functions.
    pub speed: f32,
    /// Peak yaw sway in radians.
    pub sway_amplitude: f32,
    /// Peak vertical bob in world units.
    pub bob_amplitude: f32,
}

/// Pose offset produced by sampling a [`FloatMotion`] profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatSample {
    /// Yaw offset in radians.
    pub yaw: f32,
    /// Vertical offset in world units.
    pub lift: f32,
}

impl FloatMotion {
    /// Profile for unselected items: a subtle rock in place.
    pub const IDLE: Self = Self {
        speed: 1.2,
        sway_amplitude: 0.3,
        bob_amplitude: 0.08,
    };

    /// Profile for the focused item: faster and with a deeper bob; the
    /// sway is trimmed since the item spins on its own.
    pub const SELECTED: Self = Self {
        speed: 2.5,
        sway_amplitude: 0.15,
        bob_amplitude: 0.12,
    };

    /// Sample the profile at absolute elapsed time `t` seconds.
    ///
    /// Sway and bob run at incommensurate rates (0.5 and 0.6 of `speed`) so
    /// the combined motion never visibly repeats in short sessions.
    #[inline]
    #[must_use]
    pub fn sample(&self, t: f32) -> FloatSample {
        let t = t * self.speed;
        FloatSample {
            yaw: (t * 0.5).sin() * self.sway_amplitude,
            lift: (t * 0.6).sin() * self.bob_amplitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampling_is_deterministic() {
        let motion = FloatMotion::IDLE;
        let a = motion.sample(12.345);
        let b = motion.sample(12.345);
        assert_eq!(a, b);
    }

    #[test]
    fn sample_stays_within_amplitudes() {
        let motion = FloatMotion::SELECTED;
        let mut t = 0.0;
        while t < 60.0 {
            let s = motion.sample(t);
            assert!(s.yaw.abs() <= motion.sway_amplitude + 1e-6);
            assert!(s.lift.abs() <= motion.bob_amplitude + 1e-6);
            t += 0.137;
        }
    }

    #[test]
    fn starts_at_rest_offset() {
        let s = FloatMotion::IDLE.sample(0.0);
        assert_eq!(s.yaw, 0.0);
        assert_eq!(s.lift, 0.0);
    }
}
