//! Line-item totals.
//!
//! A register entry carries three index-aligned lists: particulars
//! (descriptions), quantities, and amounts. The cached total is computed
//! here and rounded once, before persisting.

use serde_json::Value;

use crate::coerce;

/// Round a monetary amount to two decimal places, half away from zero.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Total amount across the parallel line-item lists.
///
/// Indexed over the particulars list; quantity and amount lists shorter
/// than it are treated as zero-filled, and non-numeric entries contribute
/// zero (see [`crate::coerce`]).
pub fn total_amount(items: &[String], quantities: &[Value], amounts: &[Value]) -> f64 {
    let mut total = 0.0;
    for i in 0..items.len() {
        let qty = coerce::numeric_or_zero(quantities.get(i));
        let amt = coerce::numeric_or_zero(amounts.get(i));
        total += qty * amt;
    }
    round_currency(total)
}
