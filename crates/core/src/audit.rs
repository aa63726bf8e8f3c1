//! Audit-trail formatting.
//!
//! Builds the human-readable descriptions, daily log identifiers, and actor
//! display names recorded with every register mutation. This module lives
//! in `core` (zero internal deps) so it can be used by both the API layer
//! and any future worker or CLI tooling.

use chrono::NaiveDate;

use crate::changes::ChangeSet;

// ---------------------------------------------------------------------------
// Action type constants
// ---------------------------------------------------------------------------

/// Known action types for register mutations. Any other action string is
/// accepted for general logging and described generically.
pub mod actions {
    pub const CREATE: &str = "CREATE";
    pub const UPDATE: &str = "UPDATE";
    pub const DELETE: &str = "DELETE";
}

// ---------------------------------------------------------------------------
// Log identifiers
// ---------------------------------------------------------------------------

/// Width of the daily sequence component in a log id.
const LOG_SEQ_WIDTH: usize = 3;

/// Format the identifier for the next log entry of a given date.
///
/// `entries_today` is the number of entries already recorded on `date`.
/// The identifier is `LOG_<seq>_<date>` with the sequence zero-padded to
/// three digits (padding only, never truncation).
pub fn format_log_id(entries_today: i64, date: NaiveDate) -> String {
    format!(
        "LOG_{:0width$}_{}",
        entries_today + 1,
        date.format("%Y-%m-%d"),
        width = LOG_SEQ_WIDTH
    )
}

// ---------------------------------------------------------------------------
// Actor display names
// ---------------------------------------------------------------------------

/// Resolve an actor's display name from optional name parts.
///
/// `"{first} {last}"` trimmed, the last name omitted when empty;
/// `"System"` when no first name is known.
pub fn actor_display_name(first_name: Option<&str>, last_name: Option<&str>) -> String {
    let Some(first) = first_name.filter(|f| !f.is_empty()) else {
        return "System".to_string();
    };
    match last_name.filter(|l| !l.is_empty()) {
        Some(last) => format!("{first} {last}").trim().to_string(),
        None => first.trim().to_string(),
    }
}

// ---------------------------------------------------------------------------
// Descriptions
// ---------------------------------------------------------------------------

/// Build the log description for a register action.
///
/// CREATE / UPDATE / DELETE get their specific phrasing; any other action
/// is described generically. For updates, a supplied change set is rendered
/// in the fixed field order, followed by the particulars marker when its
/// flag is raised. An absent control number simply omits its clause.
pub fn log_description(
    action: &str,
    document_type: &str,
    control_no: Option<&str>,
    changes: Option<&ChangeSet>,
) -> String {
    match action {
        actions::CREATE => {
            let mut description = format!("Created {document_type}");
            if let Some(no) = control_no {
                description.push_str(&format!(" with Control No. {no}"));
            }
            description
        }
        actions::UPDATE => {
            let mut description = format!("Updated {document_type}");
            if let Some(no) = control_no {
                description.push_str(&format!(" ({no})"));
            }
            if let Some(changes) = changes {
                let changed: Vec<String> = changes
                    .iter()
                    .map(|(field, change)| {
                        format!("{}: {} → {}", field.as_str(), change.from, change.to)
                    })
                    .collect();
                if !changed.is_empty() {
                    description.push_str(": ");
                    description.push_str(&changed.join(", "));
                }
                if changes.particulars_updated() {
                    description.push_str(" [Particulars Updated]");
                }
            }
            description
        }
        actions::DELETE => {
            let mut description = format!("Deleted {document_type}");
            if let Some(no) = control_no {
                description.push_str(&format!(" (Control No. {no})"));
            }
            description
        }
        _ => {
            let mut description = format!("Performed action on {document_type}");
            if let Some(no) = control_no {
                description.push_str(&format!(" ({no})"));
            }
            description
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changes::{track_changes, DocumentSnapshot};
    use crate::ledger::Ledger;

    // -----------------------------------------------------------------------
    // Log identifiers
    // -----------------------------------------------------------------------

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_entry_of_the_day() {
        assert_eq!(format_log_id(0, date(2024, 5, 7)), "LOG_001_2024-05-07");
    }

    #[test]
    fn sequence_counts_existing_entries() {
        assert_eq!(format_log_id(41, date(2024, 5, 7)), "LOG_042_2024-05-07");
    }

    #[test]
    fn log_id_pads_up_never_truncates() {
        assert_eq!(format_log_id(999, date(2024, 5, 7)), "LOG_1000_2024-05-07");
    }

    // -----------------------------------------------------------------------
    // Actor display names
    // -----------------------------------------------------------------------

    #[test]
    fn full_name_is_joined_and_trimmed() {
        assert_eq!(actor_display_name(Some("Ana"), Some("Reyes")), "Ana Reyes");
    }

    #[test]
    fn first_name_alone_is_enough() {
        assert_eq!(actor_display_name(Some("Ana"), None), "Ana");
        assert_eq!(actor_display_name(Some("Ana"), Some("")), "Ana");
    }

    #[test]
    fn unknown_actor_is_system() {
        assert_eq!(actor_display_name(None, None), "System");
        assert_eq!(actor_display_name(Some(""), Some("Reyes")), "System");
    }

    // -----------------------------------------------------------------------
    // Descriptions
    // -----------------------------------------------------------------------

    #[test]
    fn create_with_control_no() {
        let description = log_description(
            actions::CREATE,
            "Disbursement Voucher",
            Some("2024-05-001"),
            None,
        );
        assert_eq!(
            description,
            "Created Disbursement Voucher with Control No. 2024-05-001"
        );
    }

    #[test]
    fn create_without_control_no() {
        let description = log_description(actions::CREATE, "Audit Query", None, None);
        assert_eq!(description, "Created Audit Query");
    }

    #[test]
    fn update_renders_the_change_set() {
        let original = DocumentSnapshot {
            status: Some("Received".into()),
            ..Default::default()
        };
        let updated = DocumentSnapshot {
            status: Some("Filed".into()),
            ..Default::default()
        };
        let changes = track_changes(Ledger::Incoming, &original, &updated);

        let description = log_description(
            actions::UPDATE,
            "Disbursement Voucher",
            Some("2024-05-001"),
            Some(&changes),
        );
        assert_eq!(
            description,
            "Updated Disbursement Voucher (2024-05-001): status: Received → Filed"
        );
    }

    #[test]
    fn update_with_empty_change_set_has_no_suffix() {
        let snapshot = DocumentSnapshot::default();
        let changes = track_changes(Ledger::Incoming, &snapshot, &snapshot);

        let description = log_description(
            actions::UPDATE,
            "Purchase Order",
            Some("2024-05-002"),
            Some(&changes),
        );
        assert_eq!(description, "Updated Purchase Order (2024-05-002)");
    }

    #[test]
    fn update_appends_the_particulars_marker() {
        let original = DocumentSnapshot {
            status: Some("Received".into()),
            particulars: vec!["Supplies".into()],
            ..Default::default()
        };
        let updated = DocumentSnapshot {
            status: Some("Filed".into()),
            particulars: vec!["Fuel".into()],
            ..Default::default()
        };
        let changes = track_changes(Ledger::Incoming, &original, &updated);

        let description = log_description(
            actions::UPDATE,
            "Disbursement Voucher",
            Some("2024-05-001"),
            Some(&changes),
        );
        assert_eq!(
            description,
            "Updated Disbursement Voucher (2024-05-001): \
             status: Received → Filed [Particulars Updated]"
        );
    }

    #[test]
    fn delete_uses_the_long_control_no_clause() {
        let description = log_description(
            actions::DELETE,
            "Disbursement Voucher",
            Some("2024-05-001"),
            None,
        );
        assert_eq!(
            description,
            "Deleted Disbursement Voucher (Control No. 2024-05-001)"
        );
    }

    #[test]
    fn unknown_actions_are_described_generically() {
        let description = log_description("EXPORT", "AOM Release", Some("2024-06-003"), None);
        assert_eq!(description, "Performed action on AOM Release (2024-06-003)");
    }
}
