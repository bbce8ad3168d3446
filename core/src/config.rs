//! Simulation tunables.
//!
//! RULE: No ambient global configuration. The config value is built once
//! at startup and threaded explicitly into the engine and the turn
//! simulator. Changing `base_demand` between turns affects all subsequent
//! turns immediately; past reports are never recomputed.

use crate::types::Turn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Base demand per product per turn, before the market multiplier.
    pub base_demand: f64,
    /// Turns in a full game.
    pub max_turns: Turn,
    /// Hard floor for any product price. Enforced on every mutation,
    /// not just at creation.
    pub price_floor: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            base_demand: 100.0,
            max_turns: 7,
            price_floor: 0.5,
        }
    }
}
