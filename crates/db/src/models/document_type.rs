//! Document type reference model.

use doctrail_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row of the `document_types` lookup table.
///
/// Names are unique; register rows reference them by id while API payloads
/// carry the name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DocumentType {
    pub id: DbId,
    pub name: String,
}
