//! Outgoing register entity model and DTOs.

use chrono::NaiveDate;
use doctrail_core::changes::DocumentSnapshot;
use doctrail_core::types::{DbId, Timestamp};
use serde::Serialize;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;

use crate::models::line_items::LineItemsUpdate;

/// Full outgoing register row, joined with the resolved document type name.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outgoing {
    pub id: DbId,
    pub control_no: String,
    /// Set to the current date by the store at insert time.
    pub date_released: Option<NaiveDate>,
    pub document_type_id: DbId,
    /// Resolved name from `document_types` (e.g. `"AOM Release"`).
    pub document_type: String,
    pub description: Option<String>,
    pub particulars: Json<Vec<String>>,
    pub quantities: Json<Vec<Value>>,
    pub amounts: Json<Vec<Value>>,
    pub total_amount: f64,
    pub agency: Option<String>,
    pub status: Option<String>,
    pub received_by: Option<String>,
    pub storage_file: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Outgoing {
    /// Snapshot of the tracked fields for change tracking.
    pub fn change_snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            control_no: Some(self.control_no.clone()),
            date_released: self.date_released.map(|d| d.to_string()),
            document_type: Some(self.document_type.clone()),
            description: self.description.clone(),
            agency: self.agency.clone(),
            status: self.status.clone(),
            received_by: self.received_by.clone(),
            storage_file: self.storage_file.clone(),
            particulars: self.particulars.0.clone(),
            ..Default::default()
        }
    }
}

/// Prepared column values for inserting an outgoing entry.
///
/// The control number and release date are assigned by the repository at
/// insert time.
#[derive(Debug, Clone)]
pub struct NewOutgoing {
    pub document_type_id: DbId,
    pub description: String,
    pub particulars: Vec<String>,
    pub quantities: Vec<Value>,
    pub amounts: Vec<Value>,
    pub total_amount: f64,
    pub agency: String,
    pub status: String,
    pub received_by: String,
    pub storage_file: String,
}

/// Partial update for an outgoing entry. Only `Some` fields are applied.
#[derive(Debug, Clone, Default)]
pub struct UpdateOutgoing {
    pub document_type_id: Option<DbId>,
    pub date_released: Option<NaiveDate>,
    pub description: Option<String>,
    pub agency: Option<String>,
    pub status: Option<String>,
    pub received_by: Option<String>,
    pub storage_file: Option<String>,
    pub line_items: Option<LineItemsUpdate>,
}
