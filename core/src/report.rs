//! Per-turn and cumulative financial reporting.

use serde::{Deserialize, Serialize};

/// Revenue/expense pair for one side over one or more turns.
/// Profit is derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialReport {
    pub revenue: f64,
    pub expenses: f64,
}

impl FinancialReport {
    pub fn new(revenue: f64, expenses: f64) -> Self {
        Self { revenue, expenses }
    }

    pub fn profit(&self) -> f64 {
        self.revenue - self.expenses
    }

    /// Sum a turn history into a cumulative report.
    /// Revenue and expenses add independently.
    pub fn cumulative(reports: &[FinancialReport]) -> FinancialReport {
        reports.iter().fold(FinancialReport::new(0.0, 0.0), |acc, r| {
            FinancialReport::new(acc.revenue + r.revenue, acc.expenses + r.expenses)
        })
    }
}
