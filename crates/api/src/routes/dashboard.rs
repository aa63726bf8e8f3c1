//! Route definitions for dashboard aggregates.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Dashboard routes mounted at `/dashboard`.
///
/// ```text
/// GET /counts   -> register-wide record counts
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/counts", get(dashboard::counts))
}
