//! Field-level change tracking for register entries.
//!
//! Compares an original and an updated snapshot over a fixed field list and
//! produces the change set consumed by the audit-trail formatter. Tracking
//! is pure: the same pair of snapshots always yields the same change set.

use std::collections::BTreeMap;

use crate::ledger::Ledger;

/// Placeholder recorded when one side of a change has no value.
///
/// Substituted in the recorded output only; inclusion in the change set is
/// decided on the raw values.
pub const EMPTY_SENTINEL: &str = "(empty)";

// ---------------------------------------------------------------------------
// Tracked fields
// ---------------------------------------------------------------------------

/// Tracked scalar fields, declared in the order they appear in log
/// descriptions: common fields first, then fields recorded only on the
/// incoming ledger. `Ord` on this enum IS that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DocumentField {
    ControlNo,
    DateReleased,
    DocumentType,
    Description,
    Agency,
    Status,
    ReceivedBy,
    StorageFile,
    DateOfAda,
    AdaNo,
    JevNo,
    OrNo,
    PoNo,
    Payee,
    NatureOfPayment,
}

impl DocumentField {
    /// Fields compared on both ledgers.
    pub const COMMON: [Self; 8] = [
        Self::ControlNo,
        Self::DateReleased,
        Self::DocumentType,
        Self::Description,
        Self::Agency,
        Self::Status,
        Self::ReceivedBy,
        Self::StorageFile,
    ];

    /// Fields compared only on the incoming ledger.
    pub const INCOMING_ONLY: [Self; 7] = [
        Self::DateOfAda,
        Self::AdaNo,
        Self::JevNo,
        Self::OrNo,
        Self::PoNo,
        Self::Payee,
        Self::NatureOfPayment,
    ];

    /// Field name as it appears in log descriptions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ControlNo => "controlNo",
            Self::DateReleased => "dateReleased",
            Self::DocumentType => "documentType",
            Self::Description => "description",
            Self::Agency => "agency",
            Self::Status => "status",
            Self::ReceivedBy => "receivedBy",
            Self::StorageFile => "storageFile",
            Self::DateOfAda => "dateOfAda",
            Self::AdaNo => "adaNo",
            Self::JevNo => "jevNo",
            Self::OrNo => "orNo",
            Self::PoNo => "poNo",
            Self::Payee => "payee",
            Self::NatureOfPayment => "natureOfPayment",
        }
    }

    /// The comparison list for a ledger: common fields always, incoming-only
    /// fields when the ledger is incoming.
    pub fn tracked_for(ledger: Ledger) -> impl Iterator<Item = Self> {
        let incoming_only: &'static [Self] = match ledger {
            Ledger::Incoming => &Self::INCOMING_ONLY,
            Ledger::Outgoing => &[],
        };
        Self::COMMON.into_iter().chain(incoming_only.iter().copied())
    }
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

/// The scalar fields of a register entry plus its particulars list,
/// captured for comparison. Both sides of a diff use the same shape;
/// fields that do not apply to a ledger are simply left `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentSnapshot {
    pub control_no: Option<String>,
    pub date_released: Option<String>,
    pub document_type: Option<String>,
    pub description: Option<String>,
    pub agency: Option<String>,
    pub status: Option<String>,
    pub received_by: Option<String>,
    pub storage_file: Option<String>,
    pub date_of_ada: Option<String>,
    pub ada_no: Option<String>,
    pub jev_no: Option<String>,
    pub or_no: Option<String>,
    pub po_no: Option<String>,
    pub payee: Option<String>,
    pub nature_of_payment: Option<String>,
    pub particulars: Vec<String>,
}

impl DocumentSnapshot {
    fn field(&self, field: DocumentField) -> Option<&str> {
        let value = match field {
            DocumentField::ControlNo => &self.control_no,
            DocumentField::DateReleased => &self.date_released,
            DocumentField::DocumentType => &self.document_type,
            DocumentField::Description => &self.description,
            DocumentField::Agency => &self.agency,
            DocumentField::Status => &self.status,
            DocumentField::ReceivedBy => &self.received_by,
            DocumentField::StorageFile => &self.storage_file,
            DocumentField::DateOfAda => &self.date_of_ada,
            DocumentField::AdaNo => &self.ada_no,
            DocumentField::JevNo => &self.jev_no,
            DocumentField::OrNo => &self.or_no,
            DocumentField::PoNo => &self.po_no,
            DocumentField::Payee => &self.payee,
            DocumentField::NatureOfPayment => &self.nature_of_payment,
        };
        value.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Change sets
// ---------------------------------------------------------------------------

/// A single field transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub from: String,
    pub to: String,
}

/// Structured diff between two versions of a register entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeSet {
    changes: BTreeMap<DocumentField, FieldChange>,
    particulars_updated: bool,
}

impl ChangeSet {
    /// True when no scalar field changed and the particulars flag is unset.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && !self.particulars_updated
    }

    /// Number of changed scalar fields.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Whether the particulars list changed (see [`track_changes`] for when
    /// this flag is raised).
    pub fn particulars_updated(&self) -> bool {
        self.particulars_updated
    }

    /// Transition recorded for a field, if any.
    pub fn get(&self, field: DocumentField) -> Option<&FieldChange> {
        self.changes.get(&field)
    }

    /// Changed fields in the fixed comparison order.
    pub fn iter(&self) -> impl Iterator<Item = (DocumentField, &FieldChange)> {
        self.changes.iter().map(|(field, change)| (*field, change))
    }
}

/// Diff `original` against `updated` over the ledger's tracked fields.
///
/// A field is included when the raw values differ under strict equality
/// (no coercion); the [`EMPTY_SENTINEL`] is substituted only in the
/// recorded from/to output. The particulars list is compared by deep
/// equality of the ordered sequence, but the flag is raised only when at
/// least one scalar field changed too -- a particulars-only edit yields an
/// empty change set. That asymmetry is inherited from the source register
/// and is load-bearing for its log output.
pub fn track_changes(
    ledger: Ledger,
    original: &DocumentSnapshot,
    updated: &DocumentSnapshot,
) -> ChangeSet {
    let mut changes = BTreeMap::new();

    for field in DocumentField::tracked_for(ledger) {
        let from = original.field(field);
        let to = updated.field(field);
        if from != to {
            changes.insert(
                field,
                FieldChange {
                    from: from.unwrap_or(EMPTY_SENTINEL).to_string(),
                    to: to.unwrap_or(EMPTY_SENTINEL).to_string(),
                },
            );
        }
    }

    let particulars_updated =
        original.particulars != updated.particulars && !changes.is_empty();

    ChangeSet {
        changes,
        particulars_updated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> DocumentSnapshot {
        DocumentSnapshot {
            control_no: Some("2024-05-001".into()),
            document_type: Some("Disbursement Voucher".into()),
            status: Some("Received".into()),
            particulars: vec!["Supplies".into()],
            ..Default::default()
        }
    }

    // -----------------------------------------------------------------------
    // Scalar field comparison
    // -----------------------------------------------------------------------

    #[test]
    fn identical_snapshots_yield_empty_set() {
        let set = track_changes(Ledger::Incoming, &base(), &base());
        assert!(set.is_empty());
    }

    #[test]
    fn scalar_change_is_recorded() {
        let mut updated = base();
        updated.status = Some("Filed".into());

        let set = track_changes(Ledger::Incoming, &base(), &updated);
        assert_eq!(set.len(), 1);
        let change = set.get(DocumentField::Status).unwrap();
        assert_eq!(change.from, "Received");
        assert_eq!(change.to, "Filed");
    }

    #[test]
    fn absent_values_use_the_sentinel_in_output_only() {
        let mut updated = base();
        updated.agency = Some("Region IV".into());

        let set = track_changes(Ledger::Incoming, &base(), &updated);
        let change = set.get(DocumentField::Agency).unwrap();
        assert_eq!(change.from, EMPTY_SENTINEL);
        assert_eq!(change.to, "Region IV");
    }

    #[test]
    fn empty_string_and_absent_are_distinct() {
        // Strict comparison: None vs Some("") is a change.
        let mut updated = base();
        updated.payee = Some(String::new());

        let set = track_changes(Ledger::Incoming, &base(), &updated);
        let change = set.get(DocumentField::Payee).unwrap();
        assert_eq!(change.from, EMPTY_SENTINEL);
        assert_eq!(change.to, "");
    }

    #[test]
    fn outgoing_ledger_ignores_incoming_only_fields() {
        let mut updated = base();
        updated.payee = Some("Acme".into());

        let set = track_changes(Ledger::Outgoing, &base(), &updated);
        assert!(set.is_empty());
    }

    #[test]
    fn iteration_order_is_common_fields_first() {
        let mut updated = base();
        updated.payee = Some("Acme".into());
        updated.status = Some("Filed".into());

        let set = track_changes(Ledger::Incoming, &base(), &updated);
        let order: Vec<_> = set.iter().map(|(field, _)| field).collect();
        assert_eq!(order, vec![DocumentField::Status, DocumentField::Payee]);
    }

    // -----------------------------------------------------------------------
    // Particulars
    // -----------------------------------------------------------------------

    #[test]
    fn particulars_only_edit_does_not_raise_the_flag() {
        // Inherited behaviour: a particulars-only edit yields an empty set.
        let mut updated = base();
        updated.particulars = vec!["Supplies".into(), "Fuel".into()];

        let set = track_changes(Ledger::Incoming, &base(), &updated);
        assert!(set.is_empty());
        assert!(!set.particulars_updated());
    }

    #[test]
    fn particulars_flag_raised_alongside_a_scalar_change() {
        let mut updated = base();
        updated.status = Some("Filed".into());
        updated.particulars = vec!["Fuel".into()];

        let set = track_changes(Ledger::Incoming, &base(), &updated);
        assert!(set.particulars_updated());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn particulars_order_matters() {
        let mut original = base();
        original.particulars = vec!["a".into(), "b".into()];
        let mut updated = base();
        updated.particulars = vec!["b".into(), "a".into()];
        updated.status = Some("Filed".into());

        let set = track_changes(Ledger::Incoming, &original, &updated);
        assert!(set.particulars_updated());
    }

    // -----------------------------------------------------------------------
    // Purity
    // -----------------------------------------------------------------------

    #[test]
    fn tracking_is_idempotent() {
        let mut updated = base();
        updated.status = Some("Filed".into());
        updated.particulars = vec!["Fuel".into()];

        let first = track_changes(Ledger::Incoming, &base(), &updated);
        let second = track_changes(Ledger::Incoming, &base(), &updated);
        assert_eq!(first, second);
    }
}
