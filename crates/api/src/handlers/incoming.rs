//! Handlers for the `/incoming` register resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use doctrail_core::audit::actions;
use doctrail_core::changes::track_changes;
use doctrail_core::coerce;
use doctrail_core::error::CoreError;
use doctrail_core::ledger::Ledger;
use doctrail_core::line_items;
use doctrail_core::types::DbId;
use doctrail_db::models::incoming::{Incoming, NewIncoming, UpdateIncoming};
use doctrail_db::models::line_items::LineItemsUpdate;
use doctrail_db::repositories::IncomingRepo;

use crate::audit::{self, ActorRef};
use crate::error::{AppError, AppResult};
use crate::handlers::{require_particulars, resolve_document_type, type_gated};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// POST /incoming body. Field names match the register clients; quantities
/// and amounts may arrive as numbers or numeric-looking strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIncomingRequest {
    pub document_type: String,
    #[serde(default)]
    pub date_of_ada: Option<String>,
    #[serde(default)]
    pub ada_no: Option<String>,
    #[serde(default)]
    pub jev_no: Option<String>,
    #[serde(default)]
    pub or_no: Option<String>,
    #[serde(default)]
    pub po_no: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub quantities: Vec<Value>,
    #[serde(default)]
    pub amounts: Vec<Value>,
    #[serde(default)]
    pub payee: Option<String>,
    #[serde(default)]
    pub nature_of_payment: Option<String>,
    #[serde(default)]
    pub agency: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub storage_file: Option<String>,
    /// Actor recorded on the audit trail; `"System"` when absent.
    #[serde(default)]
    pub user: Option<ActorRef>,
}

/// PUT /incoming/{id} body. Only provided fields are written; the three
/// line-item lists travel together.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIncomingRequest {
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub date_of_ada: Option<String>,
    #[serde(default)]
    pub ada_no: Option<String>,
    #[serde(default)]
    pub jev_no: Option<String>,
    #[serde(default)]
    pub or_no: Option<String>,
    #[serde(default)]
    pub po_no: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<String>>,
    #[serde(default)]
    pub quantities: Option<Vec<Value>>,
    #[serde(default)]
    pub amounts: Option<Vec<Value>>,
    #[serde(default)]
    pub payee: Option<String>,
    #[serde(default)]
    pub nature_of_payment: Option<String>,
    #[serde(default)]
    pub agency: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub storage_file: Option<String>,
    #[serde(default)]
    pub user: Option<ActorRef>,
}

/// DELETE /incoming/{id} body; optional, carries only audit attribution.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteRequest {
    #[serde(default)]
    pub user: Option<ActorRef>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/incoming
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateIncomingRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Incoming>>)> {
    if input.document_type.trim().is_empty() {
        return Err(CoreError::Validation("Document type is required".to_string()).into());
    }
    require_particulars(&input.items)?;

    let document_type_id = resolve_document_type(&state, &input.document_type).await?;

    // Type-specific reference numbers; other types store them blank.
    let ada_no = type_gated(&input.document_type, "Disbursement Voucher", &input.ada_no);
    let jev_no = type_gated(&input.document_type, "Disbursement Voucher", &input.jev_no);
    let or_no = type_gated(&input.document_type, "Official Receipt", &input.or_no);
    let po_no = type_gated(&input.document_type, "Purchase Order", &input.po_no);

    let total_amount = line_items::total_amount(&input.items, &input.quantities, &input.amounts);

    let record = NewIncoming {
        document_type_id,
        date_of_ada: coerce::text_or_empty(input.date_of_ada.as_deref()),
        ada_no,
        jev_no,
        or_no,
        po_no,
        description: coerce::text_or_empty(input.description.as_deref()),
        particulars: input.items,
        quantities: input.quantities,
        amounts: input.amounts,
        total_amount,
        payee: coerce::text_or_empty(input.payee.as_deref()),
        nature_of_payment: coerce::text_or_empty(input.nature_of_payment.as_deref()),
        agency: coerce::text_or_empty(input.agency.as_deref()),
        status: coerce::text_or_empty(input.status.as_deref()),
        storage_file: coerce::text_or_empty(input.storage_file.as_deref()),
    };

    let year_month = chrono::Utc::now().format("%Y-%m").to_string();
    let created = IncomingRepo::create(&state.pool, &record, &year_month).await?;

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

/// GET /api/v1/incoming
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Incoming>>>> {
    let records = IncomingRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/incoming/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Incoming>>> {
    let record = IncomingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Incoming document",
            id,
        }))?;
    Ok(Json(DataResponse { data: record }))
}

/// PUT /api/v1/incoming/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateIncomingRequest>,
) -> AppResult<Json<DataResponse<Incoming>>> {
    let original = IncomingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Incoming document",
            id,
        }))?;

    let document_type_id = match &input.document_type {
        Some(name) if !name.trim().is_empty() => {
            Some(resolve_document_type(&state, name).await?)
        }
        _ => None,
    };

    // Line items are replaced as a unit when all three lists are provided.
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

    let update = UpdateIncoming {
        document_type_id,
        date_of_ada: input.date_of_ada,
        ada_no: input.ada_no,
        jev_no: input.jev_no,
        or_no: input.or_no,
        po_no: input.po_no,
        description: input.description,
        payee: input.payee,
        nature_of_payment: input.nature_of_payment,
        agency: input.agency,
        status: input.status,
        storage_file: input.storage_file,
        line_items: line_items_update,
    };

    let updated = IncomingRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Incoming document",
            id,
        }))?;

    let changes = track_changes(
        Ledger::Incoming,
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

/// DELETE /api/v1/incoming/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<DeleteRequest>>,
) -> AppResult<StatusCode> {
    let existing = IncomingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Incoming document",
            id,
        }))?;

    if !IncomingRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Incoming document",
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
