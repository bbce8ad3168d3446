//! Demand-split algorithm: share computation, price-match fallback,
//! spoilage application, and expense accounting.

use dragonmgr_core::{
    config::SimConfig,
    market::MarketState,
    side::Side,
    simulator::{demand_shares, simulate_turn},
    staff::{task, Role, StaffMember},
};

const FLOOR: f64 = 0.5;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn bare_side(name: &str) -> Side {
    let mut side = Side::new(name, FLOOR);
    side.add_product("Noodles", 5.00);
    side.add_product("Drink", 2.50);
    side.add_product("Snack", 3.25);
    side
}

#[test]
fn equal_weights_split_half_and_half() {
    let (player, opponent) = demand_shares(2.0, 2.0);
    assert_eq!(player, 0.5);
    assert_eq!(opponent, 0.5);
}

#[test]
fn zero_weight_side_gets_zero_share() {
    let (player, opponent) = demand_shares(0.0, 2.0);
    assert_eq!(player, 0.0);
    assert_eq!(opponent, 1.0);
}

/// Both weights zero is the only way the sum goes non-positive with
/// clamped inputs; demand then splits evenly instead of dividing by
/// zero.
#[test]
fn both_weights_zero_split_half_and_half() {
    let (player, opponent) = demand_shares(0.0, 0.0);
    assert_eq!(player, 0.5);
    assert_eq!(opponent, 0.5);
}

/// Two staffless sides with identical prices are symmetric: half the
/// demand each, at full base demand per product.
#[test]
fn symmetric_sides_earn_identical_revenue() {
    let player = bare_side("A");
    let opponent = bare_side("B");

    let result = simulate_turn(
        &player,
        &opponent,
        &MarketState::default(),
        &SimConfig::default(),
    );

    let expected = 50.0 * (5.00 + 2.50 + 3.25);
    assert!(approx(result.player_report.revenue, expected));
    assert!(approx(result.opponent_report.revenue, expected));
    assert_eq!(result.player_report.expenses, 0.0);
    assert_eq!(result.opponent_report.expenses, 0.0);
}

/// A product missing from the opponent's table never fails — the
/// opponent is treated as price-matching, which makes an empty-table
/// opponent fully symmetric.
#[test]
fn missing_opponent_price_falls_back_to_player_price() {
    let player = bare_side("A");
    let opponent = Side::new("B", FLOOR);

    let result = simulate_turn(
        &player,
        &opponent,
        &MarketState::default(),
        &SimConfig::default(),
    );

    assert!(approx(
        result.player_report.revenue,
        result.opponent_report.revenue
    ));
}

/// Higher sales effectiveness pulls share toward that side.
#[test]
fn sales_effectiveness_increases_share() {
    let mut player = Side::new("A", FLOOR);
    player.add_product("Tea", 4.0);
    let mut cashier = StaffMember::new(Role::Cashier, "Yasuo", 10);
    cashier.assign_task(task::SALES);
    player.hire(cashier);

    let mut opponent = Side::new("B", FLOOR);
    opponent.add_product("Tea", 4.0);

    let result = simulate_turn(
        &player,
        &opponent,
        &MarketState::default(),
        &SimConfig::default(),
    );

    // weights 1.5/4 vs 1.0/4: player share 0.6
    assert!(approx(result.player_report.revenue, 100.0 * 0.6 * 4.0));
    assert!(approx(result.opponent_report.revenue, 100.0 * 0.4 * 4.0));
}

/// Spoilage multiplies realized units down without entering the share
/// computation.
#[test]
fn spoilage_scales_units_independently_of_share() {
    let mut player = Side::new("A", FLOOR);
    player.add_product("Tea", 4.0);
    let mut stocker = StaffMember::new(Role::Stocker, "Mika", 10);
    stocker.assign_task(task::STOCK);
    player.hire(stocker);

    let mut opponent = Side::new("B", FLOOR);
    opponent.add_product("Tea", 4.0);

    let result = simulate_turn(
        &player,
        &opponent,
        &MarketState::default(),
        &SimConfig::default(),
    );

    // Equal weights (sales aggregate 1.0 on both sides) keep the split
    // at 50/50; only the player's units shrink, by 1 - 0.03 x 10.
    assert!(approx(result.player_report.revenue, 100.0 * 0.5 * 0.7 * 4.0));
    assert!(approx(result.opponent_report.revenue, 100.0 * 0.5 * 4.0));
    assert_eq!(result.player_report.expenses, 10.0);
}

/// Expenses come from the turn context once per side, not once per
/// product.
#[test]
fn expenses_are_counted_once_across_products() {
    let mut player = bare_side("A");
    player.hire(StaffMember::new(Role::Cashier, "Yasuo", 6));
    let opponent = bare_side("B");

    let result = simulate_turn(
        &player,
        &opponent,
        &MarketState::default(),
        &SimConfig::default(),
    );

    assert_eq!(result.player_report.expenses, 10.0);
}

/// The global demand multiplier scales every product's demand.
#[test]
fn market_multiplier_scales_total_demand() {
    let player = bare_side("A");
    let opponent = bare_side("B");
    let config = SimConfig::default();

    let baseline = simulate_turn(&player, &opponent, &MarketState::default(), &config);
    let boosted = simulate_turn(
        &player,
        &opponent,
        &MarketState {
            global_demand_multiplier: 1.35,
        },
        &config,
    );

    assert!(approx(
        boosted.player_report.revenue,
        baseline.player_report.revenue * 1.35
    ));
}

/// Outcome lists carry one entry per staff member, in roster order.
#[test]
fn outcome_lists_follow_roster_order() {
    let mut player = bare_side("A");
    player.hire(StaffMember::new(Role::Cashier, "Yasuo", 6));
    player.hire(StaffMember::new(Role::Stocker, "Mika", 5));
    let opponent = bare_side("B");

    let result = simulate_turn(
        &player,
        &opponent,
        &MarketState::default(),
        &SimConfig::default(),
    );

    let names: Vec<&str> = result
        .player_outcomes
        .iter()
        .map(|o| o.staff_name.as_str())
        .collect();
    assert_eq!(names, ["Yasuo", "Mika"]);
    assert!(result.opponent_outcomes.is_empty());
}
