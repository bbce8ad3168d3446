//! Financial report arithmetic.

use dragonmgr_core::report::FinancialReport;

#[test]
fn profit_is_revenue_minus_expenses() {
    let report = FinancialReport::new(250.0, 35.0);
    assert_eq!(report.profit(), 215.0);

    let losing = FinancialReport::new(10.0, 35.0);
    assert_eq!(losing.profit(), -25.0);
}

/// Revenue and expenses sum independently across turns.
#[test]
fn cumulative_sums_each_column() {
    let history = [
        FinancialReport::new(100.0, 35.0),
        FinancialReport::new(150.0, 40.0),
        FinancialReport::new(0.0, 35.0),
    ];

    let total = FinancialReport::cumulative(&history);
    assert_eq!(total.revenue, 250.0);
    assert_eq!(total.expenses, 110.0);
    assert_eq!(total.profit(), 140.0);
}

#[test]
fn cumulative_of_empty_history_is_zero() {
    let total = FinancialReport::cumulative(&[]);
    assert_eq!(total.revenue, 0.0);
    assert_eq!(total.expenses, 0.0);
    assert_eq!(total.profit(), 0.0);
}
