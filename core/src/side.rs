//! A competing business: staff roster, price table, optional strategy.

use crate::{
    error::{SimError, SimResult},
    staff::StaffMember,
    strategy::Strategy,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One side of the duel. A side carrying a strategy is AI-driven; a side
/// without one is controlled externally (the human player).
///
/// Prices live in a BTreeMap so product iteration order is stable —
/// revenue accumulates in floats, and a run must never depend on map
/// ordering for reproducibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Side {
    name: String,
    staff: Vec<StaffMember>,
    prices: BTreeMap<String, f64>,
    strategy: Option<Strategy>,
    price_floor: f64,
}

impl Side {
    pub fn new(name: impl Into<String>, price_floor: f64) -> Self {
        Self {
            name: name.into(),
            staff: Vec::new(),
            prices: BTreeMap::new(),
            strategy: None,
            price_floor,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strategy(&self) -> Option<Strategy> {
        self.strategy
    }

    // ── Staff ──────────────────────────────────────────────────

    pub fn hire(&mut self, member: StaffMember) {
        self.staff.push(member);
    }

    /// Roster in hire order. Index-stable for display and task assignment.
    pub fn staff(&self) -> &[StaffMember] {
        &self.staff
    }

    pub fn staff_mut(&mut self) -> &mut [StaffMember] {
        &mut self.staff
    }

    /// Assign a task by roster index.
    pub fn assign_task(&mut self, index: usize, task: &str) -> SimResult<()> {
        match self.staff.get_mut(index) {
            Some(member) => {
                member.assign_task(task);
                Ok(())
            }
            None => Err(SimError::StaffIndexOutOfRange { index }),
        }
    }

    // ── Prices ─────────────────────────────────────────────────

    pub fn prices(&self) -> &BTreeMap<String, f64> {
        &self.prices
    }

    pub fn price(&self, product: &str) -> Option<f64> {
        self.prices.get(product).copied()
    }

    /// Add a product to the table. The key set is fixed after setup;
    /// the starting price is floor-clamped like any other mutation.
    pub fn add_product(&mut self, product: impl Into<String>, price: f64) {
        self.prices.insert(product.into(), price.max(self.price_floor));
    }

    /// Set a product's price. Values below the floor are clamped in
    /// place, never rejected. Unknown products are rejected — the
    /// product set is fixed at creation.
    pub fn set_price(&mut self, product: &str, price: f64) -> SimResult<()> {
        match self.prices.get_mut(product) {
            Some(entry) => {
                let clamped = price.max(self.price_floor);
                if clamped > price {
                    log::debug!(
                        "side {}: price for {product} clamped {price:.2} -> {clamped:.2}",
                        self.name
                    );
                }
                *entry = clamped;
                Ok(())
            }
            None => Err(SimError::UnknownProduct {
                product: product.to_string(),
            }),
        }
    }

    /// Multiply every price by `factor`, clamping each to the floor.
    pub fn scale_prices(&mut self, factor: f64) {
        let floor = self.price_floor;
        for price in self.prices.values_mut() {
            *price = (*price * factor).max(floor);
        }
    }

    /// The highest-priced product, if the table is non-empty.
    pub fn top_priced_product(&self) -> Option<String> {
        self.prices
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(product, _)| product.clone())
    }

    /// Multiply the single highest price by `factor` (floor-clamped).
    pub fn raise_top_price(&mut self, factor: f64) {
        let Some(product) = self.top_priced_product() else {
            return;
        };
        if let Some(price) = self.prices.get_mut(&product) {
            *price = (*price * factor).max(self.price_floor);
        }
    }
}
