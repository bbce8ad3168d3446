//! Market state and the per-turn market event draw.

use crate::rng::{StreamSlot, SubsystemRng};
use serde::{Deserialize, Serialize};

/// Shared scalar demand modifier for the current turn. Events shift it
/// additively; at most one event applies per turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketState {
    pub global_demand_multiplier: f64,
}

impl Default for MarketState {
    fn default() -> Self {
        Self {
            global_demand_multiplier: 1.0,
        }
    }
}

/// The closed set of market events. Immutable once drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketEvent {
    Holiday,
    SlowDay,
    Layoffs,
}

impl MarketEvent {
    /// Draw the event for `seed` (conventionally the 1-based turn number).
    /// Stable per seed: the same seed always yields the same event. The
    /// seed-to-event mapping itself is an implementation detail, not a
    /// contract.
    pub fn generate(seed: u64) -> MarketEvent {
        let mut rng = SubsystemRng::new(seed, StreamSlot::MarketEvent as u64)
            .with_name(StreamSlot::MarketEvent.name());
        match rng.next_u64_below(3) {
            0 => Self::Holiday,
            1 => Self::SlowDay,
            _ => Self::Layoffs,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Holiday => "Holiday",
            Self::SlowDay => "Slow Day",
            Self::Layoffs => "Corporate Layoffs",
        }
    }

    /// Additive shift applied to the global demand multiplier.
    pub fn demand_delta(&self) -> f64 {
        match self {
            Self::Holiday => 0.35,
            Self::SlowDay => -0.25,
            Self::Layoffs => -0.45,
        }
    }

    /// Apply this event to the market.
    pub fn apply(&self, market: &mut MarketState) {
        market.global_demand_multiplier += self.demand_delta();
    }
}
