//! Best-effort audit-trail recording for register mutations.
//!
//! The register write is the source of truth: a failure to append the log
//! entry is reported on the operational log and otherwise swallowed, so it
//! can never undo an already-committed mutation. The general logging
//! endpoint uses [`append_entry`] directly and does propagate failures.

use chrono::Utc;
use doctrail_core::audit;
use doctrail_core::changes::ChangeSet;
use doctrail_db::models::log::{LogEntry, NewLogEntry};
use doctrail_db::repositories::LogRepo;
use doctrail_db::DbPool;
use serde::Deserialize;

/// Optional actor reference carried on mutation payloads, used solely for
/// audit-trail attribution.
#[derive(Debug, Clone, Deserialize)]
pub struct ActorRef {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Display name for an optional actor (`"System"` when absent).
pub fn display_name(actor: Option<&ActorRef>) -> String {
    match actor {
        Some(actor) => audit::actor_display_name(
            actor.first_name.as_deref(),
            actor.last_name.as_deref(),
        ),
        None => audit::actor_display_name(None, None),
    }
}

/// Append one log entry for a register mutation.
///
/// Best-effort: errors are reported via `tracing::error!` and never
/// propagated to the caller.
pub async fn record_document_action(
    pool: &DbPool,
    action: &str,
    document_type: &str,
    control_no: Option<&str>,
    changes: Option<&ChangeSet>,
    username: &str,
) {
    let description = audit::log_description(action, document_type, control_no, changes);
    if let Err(err) = append_entry(pool, action, &description, username).await {
        tracing::error!(
            error = %err,
            action,
            control_no = control_no.unwrap_or(""),
            "Failed to append audit log entry"
        );
    }
}

/// Append a log entry with a freshly computed daily log id.
pub async fn append_entry(
    pool: &DbPool,
    action: &str,
    description: &str,
    username: &str,
) -> Result<LogEntry, sqlx::Error> {
    let today = Utc::now().date_naive();
    let entries_today = LogRepo::count_on_date(pool, today).await?;

    let entry = NewLogEntry {
        log_id: audit::format_log_id(entries_today, today),
        action: action.to_string(),
        description: description.to_string(),
        username: username.to_string(),
    };
    LogRepo::insert(pool, &entry).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_system() {
        assert_eq!(display_name(None), "System");

        let actor = ActorRef {
            first_name: None,
            last_name: Some("Reyes".to_string()),
        };
        assert_eq!(display_name(Some(&actor)), "System");
    }

    #[test]
    fn display_name_joins_parts() {
        let actor = ActorRef {
            first_name: Some("Ana".to_string()),
            last_name: Some("Reyes".to_string()),
        };
        assert_eq!(display_name(Some(&actor)), "Ana Reyes");
    }
}
