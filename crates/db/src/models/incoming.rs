//! Incoming register entity model and DTOs.

use chrono::NaiveDate;
use doctrail_core::changes::DocumentSnapshot;
use doctrail_core::types::{DbId, Timestamp};
use serde::Serialize;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;

use crate::models::line_items::LineItemsUpdate;

/// Full incoming register row, joined with the resolved document type name.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Incoming {
    pub id: DbId,
    pub control_no: String,
    /// Set by the store at insert time.
    pub date_received: Option<NaiveDate>,
    pub date_of_ada: Option<String>,
    pub document_type_id: DbId,
    /// Resolved name from `document_types` (e.g. `"Disbursement Voucher"`).
    pub document_type: String,
    pub ada_no: Option<String>,
    pub jev_no: Option<String>,
    pub or_no: Option<String>,
    pub po_no: Option<String>,
    pub description: Option<String>,
    pub particulars: Json<Vec<String>>,
    /// Raw client values; numbers and numeric-looking strings both occur.
    pub quantities: Json<Vec<Value>>,
    pub amounts: Json<Vec<Value>>,
    pub total_amount: f64,
    pub payee: Option<String>,
    pub nature_of_payment: Option<String>,
    pub agency: Option<String>,
    pub status: Option<String>,
    pub storage_file: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Incoming {
    /// Snapshot of the tracked fields for change tracking.
    pub fn change_snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            control_no: Some(self.control_no.clone()),
            document_type: Some(self.document_type.clone()),
            description: self.description.clone(),
            agency: self.agency.clone(),
            status: self.status.clone(),
            storage_file: self.storage_file.clone(),
            date_of_ada: self.date_of_ada.clone(),
            ada_no: self.ada_no.clone(),
            jev_no: self.jev_no.clone(),
            or_no: self.or_no.clone(),
            po_no: self.po_no.clone(),
            payee: self.payee.clone(),
            nature_of_payment: self.nature_of_payment.clone(),
            particulars: self.particulars.0.clone(),
            ..Default::default()
        }
    }
}

/// Prepared column values for inserting an incoming entry.
///
/// The control number and receive date are assigned by the repository at
/// insert time; optional text defaults to the empty string per the
/// coercion policy.
#[derive(Debug, Clone)]
pub struct NewIncoming {
    pub document_type_id: DbId,
    pub date_of_ada: String,
    pub ada_no: String,
    pub jev_no: String,
    pub or_no: String,
    pub po_no: String,
    pub description: String,
    pub particulars: Vec<String>,
    pub quantities: Vec<Value>,
    pub amounts: Vec<Value>,
    pub total_amount: f64,
    pub payee: String,
    pub nature_of_payment: String,
    pub agency: String,
    pub status: String,
    pub storage_file: String,
}

/// Partial update for an incoming entry. Only `Some` fields are applied.
#[derive(Debug, Clone, Default)]
pub struct UpdateIncoming {
    pub document_type_id: Option<DbId>,
    pub date_of_ada: Option<String>,
    pub ada_no: Option<String>,
    pub jev_no: Option<String>,
    pub or_no: Option<String>,
    pub po_no: Option<String>,
    pub description: Option<String>,
    pub payee: Option<String>,
    pub nature_of_payment: Option<String>,
    pub agency: Option<String>,
    pub status: Option<String>,
    pub storage_file: Option<String>,
    pub line_items: Option<LineItemsUpdate>,
}
