//! Handlers for the `/outgoing` register resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use doctrail_core::audit::actions;
use doctrail_core::changes::track_changes;
use doctrail_core::coerce;
use doctrail_core::error::CoreError;
use doctrail_core::ledger::Ledger;
use doctrail_core::line_items;
use doctrail_core::types::DbId;
use doctrail_db::models::line_items::LineItemsUpdate;
use doctrail_db::models::outgoing::{NewOutgoing, Outgoing, UpdateOutgoing};
use doctrail_db::repositories::OutgoingRepo;

use crate::audit::{self, ActorRef};
use crate::error::{AppError, AppResult};
use crate::handlers::incoming::DeleteRequest;
use crate::handlers::{require_particulars, resolve_document_type};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// POST /outgoing body. Unlike the incoming register, the outgoing one
/// requires its routing fields up front.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOutgoingRequest {
    pub document_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub quantities: Vec<Value>,
    #[serde(default)]
    pub amounts: Vec<Value>,
    #[serde(default)]
    pub agency: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub received_by: Option<String>,
    #[serde(default)]
    pub storage_file: Option<String>,
    #[serde(default)]
    pub user: Option<ActorRef>,
}

/// PUT /outgoing/{id} body. Only provided fields are written.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutgoingRequest {
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub date_released: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<String>>,
    #[serde(default)]
    pub quantities: Option<Vec<Value>>,
    #[serde(default)]
    pub amounts: Option<Vec<Value>>,
    #[serde(default)]
    pub agency: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub received_by: Option<String>,
    #[serde(default)]
    pub storage_file: Option<String>,
    #[serde(default)]
    pub user: Option<ActorRef>,
}

/// The outgoing register's required create fields, checked before any
/// write.
fn validate_create(input: &CreateOutgoingRequest) -> Result<(), CoreError> {
    if input.document_type.trim().is_empty() {
        return Err(CoreError::Validation("Document type is required".to_string()));
    }
    for (value, label) in [
        (&input.received_by, "Received by"),
        (&input.agency, "Agency"),
        (&input.status, "Status"),
    ] {
        if value.as_deref().unwrap_or("").trim().is_empty() {
            return Err(CoreError::Validation(format!("{label} is required")));
        }
    }
    require_particulars(&input.items)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/outgoing
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOutgoingRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Outgoing>>)> {
    validate_create(&input)?;

    let document_type_id = resolve_document_type(&state, &input.document_type).await?;
    let total_amount = line_items::total_amount(&input.items, &input.quantities, &input.amounts);

    let record = NewOutgoing {
        document_type_id,
        description: coerce::text_or_empty(input.description.as_deref()),
        particulars: input.items,
        quantities: input.quantities,
        amounts: input.amounts,
        total_amount,
        agency: coerce::text_or_empty(input.agency.as_deref()),
        status: coerce::text_or_empty(input.status.as_deref()),
        received_by: coerce::text_or_empty(input.received_by.as_deref()),
        storage_file: coerce::text_or_empty(input.storage_file.as_deref()),
    };

    let year_month = chrono::Utc::now().format("%Y-%m").to_string();
    let created = OutgoingRepo::create(&state.pool, &record, &year_month).await?;

    audit::record_document_action(
        &state.pool,
        actions::CREATE,
        &created.document_type,
        Some(&created.control_no),
        None,
        &audit::display_name(input.user.as_ref()),
    )
    .await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/outgoing
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Outgoing>>>> {
    let records = OutgoingRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/outgoing/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Outgoing>>> {
    let record = OutgoingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Outgoing document",
            id,
        }))?;
    Ok(Json(DataResponse { data: record }))
}

/// PUT /api/v1/outgoing/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOutgoingRequest>,
) -> AppResult<Json<DataResponse<Outgoing>>> {
    let original = OutgoingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Outgoing document",
            id,
        }))?;

    let document_type_id = match &input.document_type {
        Some(name) if !name.trim().is_empty() => {
            Some(resolve_document_type(&state, name).await?)
        }
        _ => None,
    };

    let line_items_update = match (&input.items, &input.quantities, &input.amounts) {
        (Some(items), Some(quantities), Some(amounts)) => {
            require_particulars(items)?;
            let total_amount = line_items::total_amount(items, quantities, amounts);
            Some(LineItemsUpdate {
                particulars: items.clone(),
                quantities: quantities.clone(),
                amounts: amounts.clone(),
                total_amount,
            })
        }
        _ => None,
    };

    let update = UpdateOutgoing {
        document_type_id,
        date_released: input.date_released,
        description: input.description,
        agency: input.agency,
        status: input.status,
        received_by: input.received_by,
        storage_file: input.storage_file,
        line_items: line_items_update,
    };

    let updated = OutgoingRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Outgoing document",
            id,
        }))?;

    let changes = track_changes(
        Ledger::Outgoing,
        &original.change_snapshot(),
        &updated.change_snapshot(),
    );
    audit::record_document_action(
        &state.pool,
        actions::UPDATE,
        &updated.document_type,
        Some(&updated.control_no),
        Some(&changes),
        &audit::display_name(input.user.as_ref()),
    )
    .await;

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/outgoing/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<DeleteRequest>>,
) -> AppResult<StatusCode> {
    let existing = OutgoingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Outgoing document",
            id,
        }))?;

    if !OutgoingRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Outgoing document",
            id,
        }));
    }

    let actor = body.as_ref().and_then(|b| b.user.as_ref());
    audit::record_document_action(
        &state.pool,
        actions::DELETE,
        &existing.document_type,
        Some(&existing.control_no),
        None,
        &audit::display_name(actor),
    )
    .await;

    Ok(StatusCode::NO_CONTENT)
}
