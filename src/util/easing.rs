//! Easing functions for animation envelopes.
//!
//! Used by the particle effects to shape drift, opacity, and scale over a
//! cycle. All functions clamp their input to [0, 1].

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing: CubicHermite with c1=0.33, c2=1.0 for a natural
    /// ease-out feel.
    pub const DEFAULT: Self = Self::CubicHermite { c1: 0.33, c2: 1.0 };

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]; the result is also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::CubicHermite { c1, c2 } => {
                // f(t) = c0(1-t)³ + c1·3t(1-t)² + c2·3(1-t)t² + c3·t³
                // with c0=0.0, c3=1.0
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn cubic_hermite_endpoints() {
        let hermite = EasingFunction::DEFAULT;
        assert_eq!(hermite.evaluate(0.0), 0.0);
        assert!((hermite.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn quadratic_shapes() {
        assert_eq!(EasingFunction::QuadraticIn.evaluate(0.5), 0.25);
        assert_eq!(EasingFunction::QuadraticOut.evaluate(0.5), 0.75);
    }

    #[test]
    fn input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let hermite = EasingFunction::DEFAULT;
        assert_eq!(hermite.evaluate(-0.5), 0.0);
        assert!((hermite.evaluate(1.5) - 1.0).abs() < 1e-6);
    }
}
