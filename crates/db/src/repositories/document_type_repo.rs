//! Repository for the `document_types` lookup table.

use doctrail_core::types::DbId;
use sqlx::PgPool;

use crate::models::document_type::DocumentType;

/// Provides lookups against the document type reference table.
pub struct DocumentTypeRepo;

impl DocumentTypeRepo {
    /// List all known document types in name order.
    pub async fn list(pool: &PgPool) -> Result<Vec<DocumentType>, sqlx::Error> {
        sqlx::query_as::<_, DocumentType>("SELECT id, name FROM document_types ORDER BY name")
            .fetch_all(pool)
            .await
    }

    /// Resolve a document type name to its id.
    ///
    /// Returns `None` for unknown names; callers treat that as a
    /// validation failure before any write.
    pub async fn resolve(pool: &PgPool, name: &str) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM document_types WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }
}
