//! Route definitions for the incoming register.

use axum::routing::get;
use axum::Router;

use crate::handlers::incoming;
use crate::state::AppState;

/// Incoming register routes mounted at `/incoming`.
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
        .route("/", get(incoming::list).post(incoming::create))
        .route(
            "/{id}",
            get(incoming::get_by_id)
                .put(incoming::update)
                .delete(incoming::delete),
        )
}
