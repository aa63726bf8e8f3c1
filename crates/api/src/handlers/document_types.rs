//! Handlers for the `/document-types` reference resource.

use axum::extract::State;
use axum::Json;

use doctrail_db::models::document_type::DocumentType;
use doctrail_db::repositories::DocumentTypeRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/document-types
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<DocumentType>>>> {
    let types = DocumentTypeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: types }))
}
