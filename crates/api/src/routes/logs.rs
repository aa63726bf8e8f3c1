//! Route definitions for the audit trail.

use axum::routing::get;
use axum::Router;

use crate::handlers::logs;
use crate::state::AppState;

/// Audit-trail routes mounted at `/logs`.
///
/// ```text
/// GET  /   -> list (oldest first, optional action/limit/offset)
/// POST /   -> append
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(logs::list).post(logs::append))
}
