//! dragonmgr-core — turn-based business-duel simulation.
//!
//! Two competing storefronts hire staff, set prices, and react to
//! stochastic market events over a fixed number of turns; the side with
//! higher cumulative profit wins. The engine is fully synchronous and
//! deterministic per seed.

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod market;
pub mod observer;
pub mod report;
pub mod rng;
pub mod setup;
pub mod side;
pub mod simulator;
pub mod staff;
pub mod strategy;
pub mod types;
