use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::spring::{SettleTolerance, SpringParams};
use crate::error::VitrineError;

/// Spring coefficients per channel class.
///
/// Every animated property belongs to one of four classes; all channels of
/// a class share coefficients. The defaults reproduce the reference feel:
/// snappy item motion, a slightly softer camera dolly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Springs", inline)]
#[serde(default)]
pub struct SpringsOptions {
    /// Item position channels (slot glide, hover lift, focus glide).
    pub item_position: SpringParams,
    /// Item scale channels.
    pub item_scale: SpringParams,
    /// Item yaw channels (entry turn, spin follow, unwind on close).
    pub item_yaw: SpringParams,
    /// Camera distance and focus channels.
    pub camera: SpringParams,
    /// Epsilons below which a channel counts as settled.
    #[schemars(skip)]
    pub settle: SettleTolerance,
}

impl Default for SpringsOptions {
    fn default() -> Self {
        Self {
            item_position: SpringParams::default(),
            item_scale: SpringParams::default(),
            item_yaw: SpringParams {
                mass: 1.0,
                stiffness: 120.0,
                damping: 26.0,
            },
            camera: SpringParams {
                mass: 1.0,
                stiffness: 120.0,
                damping: 28.0,
            },
            settle: SettleTolerance::default(),
        }
    }
}

impl SpringsOptions {
    /// Validate every channel class, naming the offender on failure.
    pub fn validate(&self) -> Result<(), VitrineError> {
        let _ = self.item_position.validate("item_position")?;
        let _ = self.item_scale.validate("item_scale")?;
        let _ = self.item_yaw.validate("item_yaw")?;
        let _ = self.camera.validate("camera")?;
        Ok(())
    }
}
