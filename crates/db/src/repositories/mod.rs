//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` (or, for transactional allocation, a
//! `&mut PgConnection`) as the first argument.

pub mod control_sequence_repo;
pub mod dashboard_repo;
pub mod document_type_repo;
pub mod incoming_repo;
pub mod log_repo;
pub mod outgoing_repo;
pub mod user_repo;

pub use control_sequence_repo::ControlSequenceRepo;
pub use dashboard_repo::DashboardRepo;
pub use document_type_repo::DocumentTypeRepo;
pub use incoming_repo::IncomingRepo;
pub use log_repo::LogRepo;
pub use outgoing_repo::OutgoingRepo;
pub use user_repo::UserRepo;
