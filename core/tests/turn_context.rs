//! Turn context aggregation: empty identities and permutation
//! invariance of the reductions.

use dragonmgr_core::{context::TurnContext, staff::TaskOutcome};

/// Multipliers chosen dyadic so every product is exact in f64 and the
/// permutation comparison can be bit-exact.
fn sample_outcomes() -> Vec<TaskOutcome> {
    let rows = [
        ("a", 1.5, 1.0, 10.0),
        ("b", 2.0, 0.75, 15.0),
        ("c", 1.25, 0.5, 10.0),
    ];
    rows.iter()
        .map(|(name, sales, spoilage, cost)| TaskOutcome {
            staff_name: name.to_string(),
            sales_multiplier: *sales,
            spoilage_multiplier: *spoilage,
            cost: *cost,
            message: String::new(),
        })
        .collect()
}

#[test]
fn empty_context_yields_identities() {
    let ctx = TurnContext::new();
    assert_eq!(ctx.aggregate_sales(), 1.0);
    assert_eq!(ctx.aggregate_spoilage(), 1.0);
    assert_eq!(ctx.total_cost(), 0.0);
    assert!(ctx.outcomes().is_empty());
}

#[test]
fn aggregates_are_invariant_under_registration_order() {
    let outcomes = sample_outcomes();

    let mut forward = TurnContext::new();
    for outcome in outcomes.iter().cloned() {
        forward.register(outcome);
    }

    let mut reversed = TurnContext::new();
    for outcome in outcomes.iter().rev().cloned() {
        reversed.register(outcome);
    }

    assert_eq!(forward.aggregate_sales(), reversed.aggregate_sales());
    assert_eq!(forward.aggregate_spoilage(), reversed.aggregate_spoilage());
    assert_eq!(forward.total_cost(), reversed.total_cost());
}

#[test]
fn aggregates_reduce_all_registered_outcomes() {
    let mut ctx = TurnContext::new();
    for outcome in sample_outcomes() {
        ctx.register(outcome);
    }

    assert_eq!(ctx.aggregate_sales(), 1.5 * 2.0 * 1.25);
    assert_eq!(ctx.aggregate_spoilage(), 1.0 * 0.75 * 0.5);
    assert_eq!(ctx.total_cost(), 35.0);
    assert_eq!(ctx.outcomes().len(), 3);
}
