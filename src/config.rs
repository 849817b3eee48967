//! Caller-supplied selector configuration.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::domain::Domain;
use crate::error::Result;

/// Everything needed to build a selector.
///
/// Field names follow the host screens' camelCase so a filter definition
/// can be deserialized straight into this type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub min_gap: f64,
    #[serde(default)]
    pub initial_low: Option<f64>,
    #[serde(default)]
    pub initial_high: Option<f64>,
    /// Thumb width in logical pixels.
    #[serde(default = "default_thumb_size")]
    pub thumb_size: f64,
}

fn default_thumb_size() -> f64 {
    constants::THUMB_SIZE
}

impl RangeConfig {
    pub fn new(min: f64, max: f64, step: f64, min_gap: f64) -> Self {
        Self {
            min,
            max,
            step,
            min_gap,
            initial_low: None,
            initial_high: None,
            thumb_size: constants::THUMB_SIZE,
        }
    }

    /// The monthly-budget filter used by the listing search screen.
    pub fn budget() -> Self {
        Self::new(
            constants::BUDGET_MIN,
            constants::BUDGET_MAX,
            constants::BUDGET_STEP,
            constants::BUDGET_MIN_GAP,
        )
    }

    pub fn with_initial(mut self, low: f64, high: f64) -> Self {
        self.initial_low = Some(low);
        self.initial_high = Some(high);
        self
    }

    pub fn with_thumb_size(mut self, thumb_size: f64) -> Self {
        self.thumb_size = thumb_size;
        self
    }

    /// Validates the numeric domain.
    pub fn domain(&self) -> Result<Domain> {
        Domain::new(self.min, self.max, self.step, self.min_gap)
    }
}
