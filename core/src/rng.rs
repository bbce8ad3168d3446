//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! All randomness flows through SubsystemRng streams derived from an
//! explicit integer seed.
//!
//! A stream is seeded from (seed, slot index), with the turn number mixed
//! into the seed for per-turn streams. This means:
//!   - Adding a new stream slot never changes existing streams.
//!   - Every draw is reproducible from (seed, slot, turn) alone.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG stream.
pub struct SubsystemRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl SubsystemRng {
    /// Derive a stream from a seed and a stable slot index.
    /// The index must never change once assigned.
    pub fn new(seed: u64, slot_index: u64) -> Self {
        let derived_seed = seed ^ slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// All streams for a single game, derived from one master seed.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    /// Stream for `slot` on a specific turn. The same (seed, slot, turn)
    /// triple always yields the same stream.
    pub fn for_stream_at_turn(&self, slot: StreamSlot, turn: u64) -> SubsystemRng {
        let mixed = self.master_seed ^ turn.wrapping_mul(0xd1b5_4a32_d192_ed03);
        SubsystemRng::new(mixed, slot as u64).with_name(slot.name())
    }
}

/// Stable stream slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every stream's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    MarketEvent = 0,
    Strategy = 1,
    // Add new streams here — append only.
}

impl StreamSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::MarketEvent => "market_event",
            Self::Strategy => "strategy",
        }
    }
}
