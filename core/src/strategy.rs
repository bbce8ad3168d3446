//! Opponent decision policies, selected by difficulty.
//!
//! RULE: A strategy mutates only the side it is handed — its own prices
//! and task assignments. It never reads the other side or engine state.

use crate::{
    rng::SubsystemRng,
    side::Side,
    staff::{task, Role},
};
use serde::{Deserialize, Serialize};

/// Game difficulty, chosen once at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Legend,
}

impl Difficulty {
    pub fn parse(value: &str) -> Option<Difficulty> {
        match value.to_ascii_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "normal" => Some(Self::Normal),
            "hard" => Some(Self::Hard),
            "legend" => Some(Self::Legend),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
            Self::Legend => "Legend",
        }
    }

    /// The opponent strategy this difficulty plays.
    pub fn strategy(&self) -> Strategy {
        match self {
            Self::Easy => Strategy::Conservative,
            Self::Normal => Strategy::Mixed,
            Self::Hard => Strategy::Aggressive,
            Self::Legend => Strategy::UltraAggressive,
        }
    }

    /// Flat skill delta applied to opponent staff at creation. Skills
    /// clamp to [1, 10] afterwards like any other skill.
    pub fn skill_delta(&self) -> i32 {
        match self {
            Self::Easy => -1,
            Self::Normal => 0,
            Self::Hard => 1,
            Self::Legend => 2,
        }
    }
}

/// The closed set of opponent policies. Dispatch is a match on the tag;
/// a fixed set needs no trait objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Conservative,
    Mixed,
    Aggressive,
    UltraAggressive,
}

impl Strategy {
    /// Adjust `side`'s prices and task assignments for the coming turn.
    /// `rng` drives Mixed's coin flip; the other strategies ignore it.
    pub fn decide(&self, side: &mut Side, rng: &mut SubsystemRng) {
        match self {
            Self::Conservative => Self::conservative(side),
            Self::Aggressive => Self::aggressive(side),
            Self::UltraAggressive => Self::ultra_aggressive(side),
            Self::Mixed => {
                // Re-rolled on every call; Mixed keeps no lean between turns.
                if rng.chance(0.5) {
                    Self::aggressive(side);
                } else {
                    Self::conservative(side);
                }
            }
        }
    }

    /// Undercut on price, protect stock.
    fn conservative(side: &mut Side) {
        side.scale_prices(0.9);
        for member in side.staff_mut() {
            member.assign_task(task::STOCK);
        }
    }

    /// Premium-price the flagship product, push sales everywhere.
    fn aggressive(side: &mut Side) {
        side.raise_top_price(1.10);
        Self::assign_sales_push(side);
    }

    /// Raise the whole price table, push sales everywhere.
    fn ultra_aggressive(side: &mut Side) {
        side.scale_prices(1.15);
        Self::assign_sales_push(side);
    }

    /// Managers lead, everyone else sells.
    fn assign_sales_push(side: &mut Side) {
        for member in side.staff_mut() {
            let assignment = if member.role() == Role::Manager {
                task::LEAD
            } else {
                task::SALES
            };
            member.assign_task(assignment);
        }
    }
}
