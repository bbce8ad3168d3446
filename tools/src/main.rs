//! game-runner: console front end for Dragon Manager.
//!
//! Usage:
//!   game-runner                                  # interactive menu
//!   game-runner --auto --seed 42 --difficulty hard
//!   game-runner --auto --json                    # machine-readable summary

use anyhow::Result;
use dragonmgr_core::{
    engine::{GameEngine, GameOutcome},
    observer::GameObserver,
    strategy::Difficulty,
};
use std::env;
use std::io::{self, BufRead, Write};

/// Prints every engine message to stdout.
struct ConsolePrinter;

impl GameObserver for ConsolePrinter {
    fn on_message(&mut self, message: &str) {
        println!("{message}");
    }
}

#[derive(serde::Serialize)]
struct RunSummary {
    seed: u64,
    difficulty: String,
    turns: u32,
    player_revenue: f64,
    player_expenses: f64,
    player_profit: f64,
    opponent_revenue: f64,
    opponent_expenses: f64,
    opponent_profit: f64,
    outcome: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let auto = args.iter().any(|a| a == "--auto");
    let json = args.iter().any(|a| a == "--json");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let difficulty = match flag_value(&args, "--difficulty").and_then(Difficulty::parse) {
        Some(d) => d,
        None if auto => Difficulty::Normal,
        None => select_difficulty(&mut lines)?,
    };
    log::info!("starting game: seed={seed} difficulty={}", difficulty.name());

    let mut engine = GameEngine::new(difficulty, seed);
    if !json {
        engine.subscribe(Box::new(ConsolePrinter));
    }

    if auto {
        run_auto(&mut engine)?;
    } else {
        welcome();
        run_menu(&mut engine, &mut lines)?;
    }

    if json {
        let summary = summarize(&engine, seed);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}

/// Play every remaining turn without player input.
fn run_auto(engine: &mut GameEngine) -> Result<()> {
    while !engine.is_over() {
        engine.advance_turn()?;
    }
    Ok(())
}

fn summarize(engine: &GameEngine, seed: u64) -> RunSummary {
    let player = engine.cumulative_player_report();
    let opponent = engine.cumulative_opponent_report();
    let outcome = match engine.outcome() {
        GameOutcome::PlayerWin => "player_win",
        GameOutcome::OpponentWin => "opponent_win",
        GameOutcome::Tie => "tie",
    };
    RunSummary {
        seed,
        difficulty: engine.difficulty().name().to_string(),
        turns: engine.turn(),
        player_revenue: player.revenue,
        player_expenses: player.expenses,
        player_profit: player.profit(),
        opponent_revenue: opponent.revenue,
        opponent_expenses: opponent.expenses,
        opponent_profit: opponent.profit(),
        outcome: outcome.to_string(),
    }
}

// ── Interactive menu ───────────────────────────────────────────

fn welcome() {
    println!("Welcome to Dragon Manager - Business Minigame");
    println!("Manage employees, set prices, respond to market events, and beat the rival.");
    println!();
}

fn run_menu(
    engine: &mut GameEngine,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    loop {
        println!();
        println!("Main Menu:");
        println!("1) View Employees");
        println!("2) Assign Employee Task");
        println!("3) Adjust Prices");
        println!("4) Resolve Turn");
        println!("Q) Quit");
        let choice = prompt(lines, "Choice: ")?;

        if choice.eq_ignore_ascii_case("q") {
            println!("Thanks for playing.");
            return Ok(());
        }

        match choice.as_str() {
            "1" => print_rosters(engine),
            "2" => assign_task_menu(engine, lines)?,
            "3" => adjust_price_menu(engine, lines)?,
            "4" => match engine.advance_turn() {
                Ok(_) => {
                    if engine.is_over() {
                        return Ok(());
                    }
                }
                Err(err) => println!("{err}"),
            },
            _ => println!("Invalid choice."),
        }
    }
}

fn print_rosters(engine: &GameEngine) {
    println!("--- Your Employees ---");
    for member in engine.player().staff() {
        println!(
            "{} ({}) Skill:{} Task:{}",
            member.name(),
            member.role().name(),
            member.skill(),
            member.assigned_task()
        );
    }

    println!("--- Rival Employees ---");
    for member in engine.opponent().staff() {
        println!(
            "{} ({}) Skill:{} Task:{}",
            member.name(),
            member.role().name(),
            member.skill(),
            member.assigned_task()
        );
    }

    println!("--- Prices ---");
    for (product, price) in engine.player().prices() {
        println!("{product}: ${price:.2}");
    }
}

fn assign_task_menu(
    engine: &mut GameEngine,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    println!("Select employee by number:");
    for (i, member) in engine.player().staff().iter().enumerate() {
        println!(
            "{i}) {} ({}) - Task: {}",
            member.name(),
            member.role().name(),
            member.assigned_task()
        );
    }

    let Ok(index) = prompt(lines, "Choice: ")?.parse::<usize>() else {
        println!("Invalid selection.");
        return Ok(());
    };

    let task = prompt(lines, "Enter task (Sales / Stock / Lead / Idle): ")?;
    match engine.assign_player_task(index, &task) {
        Ok(()) => {
            let name = engine.player().staff()[index].name();
            println!("Assigned {name} to {task}");
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn adjust_price_menu(
    engine: &mut GameEngine,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    println!("Products:");
    let products: Vec<String> = engine.player().prices().keys().cloned().collect();
    for (i, product) in products.iter().enumerate() {
        let price = engine.player().price(product).unwrap_or(0.0);
        println!("{i}) {product} - ${price:.2}");
    }

    let Ok(index) = prompt(lines, "Select product by number: ")?.parse::<usize>() else {
        println!("Invalid index.");
        return Ok(());
    };
    let Some(product) = products.get(index) else {
        println!("Invalid index.");
        return Ok(());
    };

    let raw = prompt(lines, &format!("Enter new price for {product}: "))?;
    let Ok(price) = raw.parse::<f64>() else {
        println!("Invalid price.");
        return Ok(());
    };

    match engine.set_player_price(product, price) {
        Ok(()) => {
            // Read back: the engine may have clamped to the floor.
            let stored = engine.player().price(product).unwrap_or(price);
            println!("{product} price set to ${stored:.2}");
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn select_difficulty(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Difficulty> {
    println!("Select Difficulty:");
    println!("1) Easy");
    println!("2) Normal");
    println!("3) Hard");
    println!("4) Legend");
    let choice = prompt(lines, "Choice: ")?;
    Ok(match choice.as_str() {
        "1" => Difficulty::Easy,
        "2" => Difficulty::Normal,
        "3" => Difficulty::Hard,
        "4" => Difficulty::Legend,
        _ => Difficulty::Normal,
    })
}

// ── Helpers ────────────────────────────────────────────────────

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> Result<String> {
    print!("{text}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => Ok("q".to_string()),
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
