//! Repository for the append-only `logs` table.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::log::{LogEntry, LogQuery, NewLogEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, log_id, action, description, username, timestamp";

/// Provides append and query operations for the audit trail.
///
/// There are deliberately no update or delete methods.
pub struct LogRepo;

impl LogRepo {
    /// Number of entries already recorded on `date`.
    ///
    /// Drives log-id assignment: the next entry of the day is `count + 1`.
    pub async fn count_on_date(pool: &PgPool, date: NaiveDate) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM logs WHERE timestamp::date = $1")
            .bind(date)
            .fetch_one(pool)
            .await
    }

    /// Append one entry, returning the stored row.
    pub async fn insert(pool: &PgPool, entry: &NewLogEntry) -> Result<LogEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO logs (log_id, action, description, username)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LogEntry>(&query)
            .bind(&entry.log_id)
            .bind(&entry.action)
            .bind(&entry.description)
            .bind(&entry.username)
            .fetch_one(pool)
            .await
    }

    /// List entries oldest first, with an optional action filter and
    /// paging.
    pub async fn list(pool: &PgPool, params: &LogQuery) -> Result<Vec<LogEntry>, sqlx::Error> {
        let limit = params.limit.unwrap_or(500).min(1000);
        let offset = params.offset.unwrap_or(0);

        match &params.action {
            Some(action) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM logs WHERE action = $1
                     ORDER BY timestamp ASC, id ASC
                     LIMIT $2 OFFSET $3"
                );
                sqlx::query_as::<_, LogEntry>(&query)
                    .bind(action)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM logs
                     ORDER BY timestamp ASC, id ASC
                     LIMIT $1 OFFSET $2"
                );
                sqlx::query_as::<_, LogEntry>(&query)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
        }
    }
}
