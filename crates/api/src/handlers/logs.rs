//! Handlers for the `/logs` audit-trail resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use doctrail_core::audit::{actions, log_description};
use doctrail_core::error::CoreError;
use doctrail_db::models::log::{LogEntry, LogQuery};
use doctrail_db::repositories::LogRepo;

use crate::audit;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /logs body, for general-purpose logging.
///
/// Document actions carry a type and control number and get a generated
/// description; any other action uses the free-text description verbatim.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendLogRequest {
    pub action: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub control_no: Option<String>,
    /// Pre-resolved display name, as the register clients send it.
    #[serde(default)]
    pub user: Option<String>,
}

/// GET /api/v1/logs
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<LogQuery>,
) -> AppResult<Json<DataResponse<Vec<LogEntry>>>> {
    let entries = LogRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// POST /api/v1/logs
pub async fn append(
    State(state): State<AppState>,
    Json(input): Json<AppendLogRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<LogEntry>>)> {
    if input.action.trim().is_empty() {
        return Err(CoreError::Validation("Action is required".to_string()).into());
    }

    let username = input
        .user
        .as_deref()
        .filter(|u| !u.trim().is_empty())
        .unwrap_or("System");

    let description = match input.action.as_str() {
        actions::CREATE | actions::UPDATE | actions::DELETE => log_description(
            &input.action,
            input.document_type.as_deref().unwrap_or(""),
            input.control_no.as_deref().filter(|c| !c.is_empty()),
            None,
        ),
        _ => input.description.clone().unwrap_or_default(),
    };

    let entry = audit::append_entry(&state.pool, &input.action, &description, username).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}
