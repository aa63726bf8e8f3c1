//! Handlers for the `/dashboard` aggregates.

use axum::extract::State;
use axum::Json;

use doctrail_db::models::dashboard::DashboardCounts;
use doctrail_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/counts
pub async fn counts(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardCounts>>> {
    let counts = DashboardRepo::counts(&state.pool).await?;
    Ok(Json(DataResponse { data: counts }))
}
