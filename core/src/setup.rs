//! Starting rosters and price tables.

use crate::{
    config::SimConfig,
    side::Side,
    staff::{Role, StaffMember},
    strategy::Difficulty,
};

pub const PLAYER_NAME: &str = "You";
pub const OPPONENT_NAME: &str = "Rival Co.";

fn stock_products(side: &mut Side) {
    side.add_product("Noodles", 5.00);
    side.add_product("Drink", 2.50);
    side.add_product("Snack", 3.25);
}

/// The human side: fixed starting roster and menu prices.
pub fn create_player(config: &SimConfig) -> Side {
    let mut side = Side::new(PLAYER_NAME, config.price_floor);
    stock_products(&mut side);
    side.hire(StaffMember::new(Role::Cashier, "Yasuo", 6));
    side.hire(StaffMember::new(Role::Stocker, "Mika", 5));
    side.hire(StaffMember::new(Role::Manager, "Takeshi", 7));
    side
}

/// The AI side. Difficulty picks the strategy and shifts staff skills.
pub fn create_opponent(config: &SimConfig, difficulty: Difficulty) -> Side {
    let delta = difficulty.skill_delta();
    let mut side =
        Side::new(OPPONENT_NAME, config.price_floor).with_strategy(difficulty.strategy());
    stock_products(&mut side);
    side.hire(StaffMember::new(Role::Cashier, "Rival Cashier", 5 + delta));
    side.hire(StaffMember::new(Role::Manager, "Rival Manager", 6 + delta));
    side.hire(StaffMember::new(Role::Stocker, "Rival Stocker", 4 + delta));
    side
}
