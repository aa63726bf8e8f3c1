//! Audit log entity model and DTOs.
//!
//! Log rows are append-only: there is no update DTO, and nothing deletes
//! them.

use doctrail_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single audit-trail row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LogEntry {
    pub id: DbId,
    /// Formatted `LOG_<seq>_<date>` identifier (see `doctrail_core::audit`).
    pub log_id: String,
    pub action: String,
    pub description: String,
    /// Actor display name; `"System"` when the actor was unknown.
    #[serde(rename = "user")]
    pub username: String,
    /// Set by the store at insert time.
    pub timestamp: Timestamp,
}

/// DTO for appending a log entry. The `log_id` is computed by the caller
/// from the daily entry count.
#[derive(Debug, Clone)]
pub struct NewLogEntry {
    pub log_id: String,
    pub action: String,
    pub description: String,
    pub username: String,
}

/// Filter parameters for listing log entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogQuery {
    pub action: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
