//! Route definitions for the document type reference.

use axum::routing::get;
use axum::Router;

use crate::handlers::document_types;
use crate::state::AppState;

/// Document type routes mounted at `/document-types`.
///
/// ```text
/// GET /   -> list reference names
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(document_types::list))
}
