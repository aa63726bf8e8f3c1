//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for patches

pub mod dashboard;
pub mod document_type;
pub mod incoming;
pub mod line_items;
pub mod log;
pub mod outgoing;
pub mod user;
