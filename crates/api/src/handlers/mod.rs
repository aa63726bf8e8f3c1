//! Request handlers for the register resources.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `doctrail_db` and
//! map errors via [`crate::error::AppError`].

pub mod dashboard;
pub mod document_types;
pub mod incoming;
pub mod logs;
pub mod outgoing;
pub mod users;

use doctrail_core::error::CoreError;
use doctrail_core::types::DbId;
use doctrail_db::repositories::DocumentTypeRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Resolve a document type name, failing validation for unknown names.
pub(crate) async fn resolve_document_type(state: &AppState, name: &str) -> AppResult<DbId> {
    DocumentTypeRepo::resolve(&state.pool, name)
        .await?
        .ok_or_else(|| CoreError::Validation("Invalid document type".to_string()).into())
}

/// At least one non-empty particular is required whenever line items are
/// written.
pub(crate) fn require_particulars(items: &[String]) -> Result<(), CoreError> {
    if items.iter().all(|item| item.trim().is_empty()) {
        return Err(CoreError::Validation(
            "At least one valid particular is required".to_string(),
        ));
    }
    Ok(())
}

/// Keep a type-specific reference number only when the entry has that
/// document type; other types store it blank.
pub(crate) fn type_gated(
    document_type: &str,
    required_type: &str,
    value: &Option<String>,
) -> String {
    if document_type == required_type {
        value.clone().unwrap_or_default()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn particulars_require_one_non_empty_entry() {
        assert_matches!(require_particulars(&[]), Err(CoreError::Validation(_)));
        assert_matches!(
            require_particulars(&["".to_string(), "  ".to_string()]),
            Err(CoreError::Validation(_))
        );
        assert!(require_particulars(&["Supplies".to_string()]).is_ok());
    }

    #[test]
    fn reference_numbers_are_gated_by_type() {
        let value = Some("ADA-17".to_string());
        assert_eq!(
            type_gated("Disbursement Voucher", "Disbursement Voucher", &value),
            "ADA-17"
        );
        assert_eq!(type_gated("Official Receipt", "Disbursement Voucher", &value), "");
        assert_eq!(type_gated("Disbursement Voucher", "Disbursement Voucher", &None), "");
    }
}
