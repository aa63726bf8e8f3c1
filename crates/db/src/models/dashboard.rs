//! Dashboard count aggregates.

use serde::Serialize;

/// Register-wide record counts for the dashboard cards.
///
/// `documents` is always the sum of the two registers.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardCounts {
    pub documents: i64,
    pub incoming: i64,
    pub outgoing: i64,
    pub users: i64,
}
