//! Route definitions.

pub mod dashboard;
pub mod document_types;
pub mod health;
pub mod incoming;
pub mod logs;
pub mod outgoing;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /incoming                   list, create
/// /incoming/{id}              get, update, delete
///
/// /outgoing                   list, create
/// /outgoing/{id}              get, update, delete
///
/// /logs                       list, append
///
/// /document-types             list reference names
///
/// /users                      list, register
/// /users/{id}                 get, update, delete
///
/// /dashboard/counts           register-wide counts
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/incoming", incoming::router())
        .nest("/outgoing", outgoing::router())
        .nest("/logs", logs::router())
        .nest("/document-types", document_types::router())
        .nest("/users", users::router())
        .nest("/dashboard", dashboard::router())
}
