use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VitrineError;

/// Randomization ranges for one particle field.
///
/// Ranges are inclusive `[min, max]` pairs sampled once per particle at
/// field construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct FieldOptions {
    /// Number of particles.
    pub count: usize,
    /// Drift distance range over one cycle, world units.
    pub amplitude: [f32; 2],
    /// Cycle length range, seconds.
    pub period: [f32; 2],
    /// Base sprite size range, world units.
    pub size: [f32; 2],
    /// Radius of the spawn region around the field origin.
    pub spread: f32,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            count: 40,
            amplitude: [2.5, 5.0],
            period: [2.0, 4.0],
            size: [0.04, 0.12],
            spread: 0.5,
        }
    }
}

impl FieldOptions {
    /// Reject empty or inverted ranges and non-positive periods.
    pub fn validate(&self, field: &str) -> Result<(), VitrineError> {
        let ordered = |[min, max]: [f32; 2]| {
            min.is_finite() && max.is_finite() && min <= max
        };
        if !ordered(self.amplitude)
            || !ordered(self.period)
            || !ordered(self.size)
        {
            return Err(VitrineError::InvalidConfig(format!(
                "effect field `{field}`: ranges must be finite [min, max] \
                 pairs"
            )));
        }
        if self.period[0] <= 0.0 {
            return Err(VitrineError::InvalidConfig(format!(
                "effect field `{field}`: period must be positive (min={})",
                self.period[0]
            )));
        }
        if !self.spread.is_finite() || self.spread < 0.0 {
            return Err(VitrineError::InvalidConfig(format!(
                "effect field `{field}`: spread must be non-negative"
            )));
        }
        Ok(())
    }
}

/// Particle field configuration for the selection-time effects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Effects", inline)]
#[serde(default)]
pub struct EffectsOptions {
    /// Radial energy burst around the focused item.
    pub burst: FieldOptions,
    /// Condensation droplets shed from the focused item.
    pub droplets: FieldOptions,
    /// Cold steam rising off the focused item.
    pub steam: FieldOptions,
}

impl Default for EffectsOptions {
    fn default() -> Self {
        Self {
            burst: FieldOptions::default(),
            droplets: FieldOptions {
                count: 15,
                amplitude: [3.0, 5.0],
                period: [2.0, 4.0],
                size: [0.05, 0.1],
                spread: 1.2,
            },
            steam: FieldOptions {
                count: 8,
                amplitude: [2.0, 3.5],
                period: [3.0, 5.0],
                size: [0.3, 0.8],
                spread: 0.6,
            },
        }
    }
}

impl EffectsOptions {
    /// Validate every field's ranges.
    pub fn validate(&self) -> Result<(), VitrineError> {
        self.burst.validate("burst")?;
        self.droplets.validate("droplets")?;
        self.steam.validate("steam")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(EffectsOptions::default().validate().is_ok());
    }

    #[test]
    fn inverted_range_rejected() {
        let opts = EffectsOptions {
            burst: FieldOptions {
                amplitude: [5.0, 2.0],
                ..FieldOptions::default()
            },
            ..EffectsOptions::default()
        };
        let err = opts.validate().unwrap_err();
        assert!(err.to_string().contains("burst"));
    }

    #[test]
    fn zero_period_rejected() {
        let opts = FieldOptions {
            period: [0.0, 1.0],
            ..FieldOptions::default()
        };
        assert!(opts.validate("steam").is_err());
    }
}
