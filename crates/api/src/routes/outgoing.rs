//! Route definitions for the outgoing register.

use axum::routing::get;
use axum::Router;

use crate::handlers::outgoing;
use crate::state::AppState;

/// Outgoing register routes mounted at `/outgoing`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(outgoing::list).post(outgoing::create))
        .route(
            "/{id}",
            get(outgoing::get_by_id)
                .put(outgoing::update)
                .delete(outgoing::delete),
        )
}
