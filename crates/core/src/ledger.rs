//! Ledger identifiers for the two document registers.

use serde::{Deserialize, Serialize};

/// One of the two document registers.
///
/// Each ledger owns its own control-number sequence space: the incoming and
/// outgoing registers both start at `-001` every calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ledger {
    Incoming,
    Outgoing,
}

impl Ledger {
    /// String representation for display, logging, and database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Incoming => "incoming",
            Self::Outgoing => "outgoing",
        }
    }
}

impl std::fmt::Display for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
