//! The turn simulator — runs every staff member's task effect and splits
//! market demand between the two sides.
//!
//! The player's price table is the canonical product set. For each
//! product, demand splits by price-weighted effectiveness:
//!
//!   weight(side) = aggregate_sales(side) / max(0.01, price(side))
//!   share(side)  = weight(side) / (weight(player) + weight(opponent))
//!
//! Higher effectiveness and lower price both increase a side's share.
//! Spoilage scales realized units after the split, independent of it.
//! A product the opponent does not carry is treated as price-matched.

use crate::{
    config::SimConfig,
    context::TurnContext,
    market::MarketState,
    report::FinancialReport,
    side::Side,
    staff::TaskOutcome,
};

/// Everything one simulated turn produced. The outcome lists are for
/// display and audit only; later turns never read them.
#[derive(Debug, Clone)]
pub struct TurnSimulationResult {
    pub player_report: FinancialReport,
    pub opponent_report: FinancialReport,
    pub player_outcomes: Vec<TaskOutcome>,
    pub opponent_outcomes: Vec<TaskOutcome>,
}

/// Split one unit of demand between the two weights. The summed weight
/// can only be non-positive when both weights are zero (inputs are
/// clamped upstream: skill >= 1, floored prices); that case splits 50/50.
pub fn demand_shares(player_weight: f64, opponent_weight: f64) -> (f64, f64) {
    let sum = player_weight + opponent_weight;
    if sum <= 0.0 {
        (0.5, 0.5)
    } else {
        (player_weight / sum, opponent_weight / sum)
    }
}

/// Simulate one turn for both sides against the given market.
pub fn simulate_turn(
    player: &Side,
    opponent: &Side,
    market: &MarketState,
    config: &SimConfig,
) -> TurnSimulationResult {
    let mut player_ctx = TurnContext::new();
    let mut opponent_ctx = TurnContext::new();

    for member in player.staff() {
        member.execute_turn(&mut player_ctx);
    }
    for member in opponent.staff() {
        member.execute_turn(&mut opponent_ctx);
    }

    let player_sales = player_ctx.aggregate_sales();
    let opponent_sales = opponent_ctx.aggregate_sales();
    let player_spoilage = player_ctx.aggregate_spoilage();
    let opponent_spoilage = opponent_ctx.aggregate_spoilage();

    let total_demand = config.base_demand * market.global_demand_multiplier;

    let mut player_revenue = 0.0;
    let mut opponent_revenue = 0.0;

    for (product, &player_price) in player.prices() {
        // No opponent entry: the opponent price-matches.
        let opponent_price = opponent.price(product).unwrap_or(player_price);

        // The 0.01 floor guards the division against transient
        // near-zero prices; floored prices never get that low.
        let player_weight = player_sales / player_price.max(0.01);
        let opponent_weight = opponent_sales / opponent_price.max(0.01);
        let (player_share, opponent_share) = demand_shares(player_weight, opponent_weight);

        let player_units = total_demand * player_share * player_spoilage;
        let opponent_units = total_demand * opponent_share * opponent_spoilage;

        player_revenue += player_units * player_price;
        opponent_revenue += opponent_units * opponent_price;
    }

    let player_report = FinancialReport::new(player_revenue, player_ctx.total_cost());
    let opponent_report = FinancialReport::new(opponent_revenue, opponent_ctx.total_cost());

    log::debug!(
        "turn simulated: demand {:.1}, player profit {:.2}, opponent profit {:.2}",
        total_demand,
        player_report.profit(),
        opponent_report.profit()
    );

    TurnSimulationResult {
        player_report,
        opponent_report,
        player_outcomes: player_ctx.into_outcomes(),
        opponent_outcomes: opponent_ctx.into_outcomes(),
    }
}
