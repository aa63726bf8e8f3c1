//! Domain logic for the document register: control-number sequencing,
//! line-item totals, field-level change tracking, and audit-trail
//! formatting.
//!
//! This crate has no database or HTTP dependencies so the api and
//! repository layers (and any future CLI tooling) can share it.

pub mod audit;
pub mod changes;
pub mod coerce;
pub mod control_no;
pub mod error;
pub mod ledger;
pub mod line_items;
pub mod types;
