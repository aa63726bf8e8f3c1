//! Shared line-item column group for the two register tables.

use serde_json::Value;

/// Replacement values for the line-item columns.
///
/// The three lists and the cached total always travel together: a partial
/// update either replaces all four or none of them.
#[derive(Debug, Clone)]
pub struct LineItemsUpdate {
    pub particulars: Vec<String>,
    pub quantities: Vec<Value>,
    pub amounts: Vec<Value>,
    pub total_amount: f64,
}
