//! The game engine — the heart of the business duel.
//!
//! TURN PIPELINE (fixed order, never reordered):
//!   1. Draw the market event for the turn and apply it.
//!   2. The opponent's strategy adjusts its own prices/assignments.
//!   3. The turn simulator runs every staff member and splits demand.
//!   4. Reports append to per-side history; observers hear the results.
//!
//! RULES:
//!   - The engine exclusively owns both sides and the turn history.
//!   - Externally, only the player side is mutable, and only through
//!     the engine's assign/set methods.
//!   - All randomness flows through the RngBank.
//!   - Observers are notified synchronously, in registration order.

use crate::{
    config::SimConfig,
    error::{SimError, SimResult},
    market::{MarketEvent, MarketState},
    observer::GameObserver,
    report::FinancialReport,
    rng::{RngBank, StreamSlot},
    setup,
    side::Side,
    simulator::{simulate_turn, TurnSimulationResult},
    strategy::Difficulty,
    types::Turn,
};

/// Winner decision over cumulative profit. Strictly greater wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    PlayerWin,
    OpponentWin,
    Tie,
}

pub struct GameEngine {
    config: SimConfig,
    difficulty: Difficulty,
    turn: Turn,
    player: Side,
    opponent: Side,
    rng_bank: RngBank,
    observers: Vec<Box<dyn GameObserver>>,
    player_history: Vec<FinancialReport>,
    opponent_history: Vec<FinancialReport>,
}

impl GameEngine {
    /// Build a game with the documented starting rosters and default
    /// tunables.
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_config(SimConfig::default(), difficulty, seed)
    }

    pub fn with_config(config: SimConfig, difficulty: Difficulty, seed: u64) -> Self {
        let player = setup::create_player(&config);
        let opponent = setup::create_opponent(&config, difficulty);
        Self {
            config,
            difficulty,
            turn: 0,
            player,
            opponent,
            rng_bank: RngBank::new(seed),
            observers: Vec::new(),
            player_history: Vec::new(),
            opponent_history: Vec::new(),
        }
    }

    // ── Observers ──────────────────────────────────────────────

    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    fn notify(&mut self, message: &str) {
        for observer in &mut self.observers {
            observer.on_message(message);
        }
    }

    // ── Read surface ───────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Retune base demand mid-game. Takes effect from the next turn on;
    /// past reports are never recomputed.
    pub fn set_base_demand(&mut self, base_demand: f64) {
        self.config.base_demand = base_demand;
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Turns simulated so far.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn player(&self) -> &Side {
        &self.player
    }

    pub fn opponent(&self) -> &Side {
        &self.opponent
    }

    pub fn player_history(&self) -> &[FinancialReport] {
        &self.player_history
    }

    pub fn opponent_history(&self) -> &[FinancialReport] {
        &self.opponent_history
    }

    /// True once the final turn has been simulated.
    pub fn is_over(&self) -> bool {
        self.turn >= self.config.max_turns
    }

    pub fn cumulative_player_report(&self) -> FinancialReport {
        FinancialReport::cumulative(&self.player_history)
    }

    pub fn cumulative_opponent_report(&self) -> FinancialReport {
        FinancialReport::cumulative(&self.opponent_history)
    }

    pub fn outcome(&self) -> GameOutcome {
        let player = self.cumulative_player_report().profit();
        let opponent = self.cumulative_opponent_report().profit();
        if player > opponent {
            GameOutcome::PlayerWin
        } else if player < opponent {
            GameOutcome::OpponentWin
        } else {
            GameOutcome::Tie
        }
    }

    // ── External mutation surface (player side only) ───────────

    /// Assign a task to a player staff member by roster index.
    pub fn assign_player_task(&mut self, index: usize, task: &str) -> SimResult<()> {
        self.player.assign_task(index, task)
    }

    /// Set a player price. Values below the floor are clamped, not
    /// rejected.
    pub fn set_player_price(&mut self, product: &str, price: f64) -> SimResult<()> {
        self.player.set_price(product, price)
    }

    // ── Turn lifecycle ─────────────────────────────────────────

    /// Advance one turn. This is the only driving transition; it errors
    /// once the game has reached its terminal state.
    pub fn advance_turn(&mut self) -> SimResult<TurnSimulationResult> {
        if self.is_over() {
            return Err(SimError::GameFinished {
                max_turns: self.config.max_turns,
            });
        }

        self.turn += 1;
        let turn = self.turn;
        self.notify(&format!("--- TURN {turn} START ---"));

        let mut market = MarketState::default();
        let event = MarketEvent::generate(u64::from(turn));
        event.apply(&mut market);
        self.notify(&format!("Market Event: {}", event.name()));
        log::debug!(
            "turn={turn} event={} demand multiplier {:.2}",
            event.name(),
            market.global_demand_multiplier
        );

        if let Some(strategy) = self.opponent.strategy() {
            let mut rng = self
                .rng_bank
                .for_stream_at_turn(StreamSlot::Strategy, u64::from(turn));
            strategy.decide(&mut self.opponent, &mut rng);
            let notice = format!("{} made their decisions.", self.opponent.name());
            self.notify(&notice);
        }

        let result = simulate_turn(&self.player, &self.opponent, &market, &self.config);

        for outcome in &result.player_outcomes {
            let line = format!(
                "Player - {}: {} (Sales x{:.2}, Spoilage x{:.2}, Cost ${:.2})",
                outcome.staff_name,
                outcome.message,
                outcome.sales_multiplier,
                outcome.spoilage_multiplier,
                outcome.cost
            );
            self.notify(&line);
        }
        for outcome in &result.opponent_outcomes {
            let line = format!(
                "Opponent - {}: {} (Sales x{:.2}, Spoilage x{:.2}, Cost ${:.2})",
                outcome.staff_name,
                outcome.message,
                outcome.sales_multiplier,
                outcome.spoilage_multiplier,
                outcome.cost
            );
            self.notify(&line);
        }

        self.notify("--- Results ---");
        let player_line = format!(
            "Player: Rev ${:.2} | Exp ${:.2} | Profit ${:.2}",
            result.player_report.revenue,
            result.player_report.expenses,
            result.player_report.profit()
        );
        self.notify(&player_line);
        let opponent_line = format!(
            "Opponent: Rev ${:.2} | Exp ${:.2} | Profit ${:.2}",
            result.opponent_report.revenue,
            result.opponent_report.expenses,
            result.opponent_report.profit()
        );
        self.notify(&opponent_line);

        self.player_history.push(result.player_report);
        self.opponent_history.push(result.opponent_report);

        if self.is_over() {
            let over = format!("GAME OVER — {} days passed.", self.config.max_turns);
            self.notify(&over);
            self.announce_final_results();
        }

        Ok(result)
    }

    fn announce_final_results(&mut self) {
        self.notify("");
        self.notify("===== FINAL RESULTS =====");

        let player = self.cumulative_player_report();
        let opponent = self.cumulative_opponent_report();
        self.notify(&format!("Your Final Profit: ${:.2}", player.profit()));
        self.notify(&format!("Opponent Final Profit: ${:.2}", opponent.profit()));

        let verdict = match self.outcome() {
            GameOutcome::PlayerWin => "YOU WIN! Your business outperformed the rival!",
            GameOutcome::OpponentWin => "YOU LOSE! The rival dominated the market.",
            GameOutcome::Tie => "It's a tie! You don't see that often!",
        };
        self.notify(verdict);
    }
}
