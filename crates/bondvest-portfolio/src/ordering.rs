//! Display ordering: drafts first, then newest first.

use bondvest_core::types::{Investment, InvestmentStatus};
use std::cmp::Ordering;

/// Compares two investments for display.
///
/// Drafts sort ahead of everything else; within each group the most recently
/// created comes first.
#[must_use]
pub fn display_order(a: &Investment, b: &Investment) -> Ordering {
    let a_draft = a.status == InvestmentStatus::Draft;
    let b_draft = b.status == InvestmentStatus::Draft;
    b_draft
        .cmp(&a_draft)
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Sorts investments in place for display. Stable for equal creation times.
pub fn sort_for_display(investments: &mut [Investment]) {
    investments.sort_by(display_order);
}
