//! Value model: the bounded, steppable domain and the selected sub-range.
//!
//! Everything here is pure. The clamping functions are shared by
//! construction and by every runtime update, so the initial state and the
//! state after a drag can never disagree about what "valid" means.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};

/// One of the two draggable thumbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    Low,
    High,
}

impl Handle {
    /// The handle on the other end of the selection.
    pub fn other(self) -> Handle {
        match self {
            Handle::Low => Handle::High,
            Handle::High => Handle::Low,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Handle::Low => 0,
            Handle::High => 1,
        }
    }
}

/// The `(low, high)` pair handed to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeValues {
    pub low: f64,
    pub high: f64,
}

impl RangeValues {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn get(&self, handle: Handle) -> f64 {
        match handle {
            Handle::Low => self.low,
            Handle::High => self.high,
        }
    }
}

/// Current selection. Only [`Domain`] and the resolver produce new states,
/// so `min <= low <= high - min_gap` and `low + min_gap <= high <= max`
/// hold for every value of this type the crate hands out.
pub type SelectionState = RangeValues;

/// Relative tolerance when deciding which grid index a bound falls on.
const GRID_EPSILON: f64 = 1e-9;

/// Largest number of decimal places grid values are normalized to.
const MAX_GRID_DECIMALS: i32 = 12;

/// Immutable `[min, max]` domain with its step grid and minimum gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    min: f64,
    max: f64,
    step: f64,
    min_gap: f64,
    /// `10^d` where `d` is the decimal precision shared by `min` and `step`;
    /// `None` when they have no short decimal form.
    grid_scale: Option<f64>,
}

impl Domain {
    /// Validates and builds a domain.
    pub fn new(min: f64, max: f64, step: f64, min_gap: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigurationError::NonFiniteBounds { min, max });
        }
        if min >= max {
            return Err(ConfigurationError::EmptyDomain { min, max });
        }
        let span = max - min;
        if !span.is_finite() {
            return Err(ConfigurationError::NonFiniteSpan { min, max });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigurationError::InvalidStep(step));
        }
        if !min_gap.is_finite() {
            return Err(ConfigurationError::InvalidMinGap(min_gap));
        }
        if min_gap < step {
            return Err(ConfigurationError::GapBelowStep { min_gap, step });
        }
        if min_gap >= span {
            return Err(ConfigurationError::GapExceedsSpan { min_gap, span });
        }
        Ok(Self {
            min,
            max,
            step,
            min_gap,
            grid_scale: grid_scale(&[min, step]),
        })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn min_gap(&self) -> f64 {
        self.min_gap
    }

    /// `max - min`; always positive and finite.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Rounds to the nearest grid point `min + k * step`, bounded to `[min, max]`.
    pub fn clamp_to_step(&self, value: f64) -> f64 {
        self.grid_value(self.grid_index(value).round())
    }

    /// Fractional grid index of `value`.
    fn grid_index(&self, value: f64) -> f64 {
        (value - self.min) / self.step
    }

    /// Grid point `k`, normalized to the grid's decimal precision so that
    /// `0.1`-style steps yield `0.7` rather than `0.7000000000000001`.
    fn grid_value(&self, k: f64) -> f64 {
        let raw = self.min + k * self.step;
        let value = match self.grid_scale {
            Some(scale) => {
                let normalized = (raw * scale).round() / scale;
                if normalized.is_finite() { normalized } else { raw }
            }
            None => raw,
        };
        value.clamp(self.min, self.max)
    }

    /// Clamps a proposed low value below `current_high - min_gap` and snaps it.
    ///
    /// The highest grid index at or below the bound is found in index space,
    /// so an off-grid bound rounds down and a bound that only misses a grid
    /// point by float error still counts as on it.
    pub fn clamp_low(&self, candidate: f64, current_high: f64) -> f64 {
        let upper = current_high - self.min_gap;
        let bounded = self.min.max(candidate.min(upper));
        let top = (self.grid_index(upper) + GRID_EPSILON).floor();
        let k = self.grid_index(bounded).round().min(top);
        self.grid_value(k).min(upper).max(self.min)
    }

    /// Clamps a proposed high value above `current_low + min_gap` and snaps it.
    ///
    /// Mirror of [`clamp_low`](Self::clamp_low): an off-grid bound rounds
    /// up, never past `max`.
    pub fn clamp_high(&self, candidate: f64, current_low: f64) -> f64 {
        let lower = current_low + self.min_gap;
        let bounded = self.max.min(candidate.max(lower));
        let bottom = (self.grid_index(lower) - GRID_EPSILON).ceil();
        let k = self.grid_index(bounded).round().max(bottom);
        self.grid_value(k).max(lower).min(self.max)
    }

    /// Builds a valid selection from an optional `(low, high)` pair; missing
    /// values default to the domain bounds.
    ///
    /// High is settled first against the lowest possible low so that the
    /// low clamp always has room.
    pub fn clamp_pair(&self, low: Option<f64>, high: Option<f64>) -> SelectionState {
        let high = self.clamp_high(high.unwrap_or(self.max), self.min);
        let low = self.clamp_low(low.unwrap_or(self.min), high);
        RangeValues { low, high }
    }

    /// True when `state` satisfies the ordering and gap invariant.
    ///
    /// The gap comparison allows float error well below one step: on a
    /// `0.1` grid, `(0.4, 0.7)` keeps a `0.3` gap even though
    /// `0.7 - 0.3 < 0.4` in `f64`.
    pub fn is_valid(&self, state: &SelectionState) -> bool {
        let slack = GRID_EPSILON * self.step;
        self.min <= state.low
            && state.low <= state.high - self.min_gap + slack
            && state.high <= self.max
    }
}

/// Smallest `10^d` (up to `10^12`) that turns every value into an integer.
fn grid_scale(values: &[f64]) -> Option<f64> {
    (0..=MAX_GRID_DECIMALS).map(|d| 10f64.powi(d)).find(|scale| {
        values.iter().all(|v| {
            let scaled = v * scale;
            (scaled - scaled.round()).abs() <= GRID_EPSILON * scaled.abs().max(1.0)
        })
    })
}
