//! Repository for the `outgoing` register table.

use doctrail_core::ledger::Ledger;
use doctrail_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::outgoing::{NewOutgoing, Outgoing, UpdateOutgoing};
use crate::repositories::ControlSequenceRepo;

/// Column list shared across SELECT queries; rows are always joined with
/// the resolved document type name.
const COLUMNS: &str = "\
    o.id, o.control_no, o.date_released, o.document_type_id, \
    dt.name AS document_type, o.description, o.particulars, o.quantities, \
    o.amounts, o.total_amount, o.agency, o.status, o.received_by, \
    o.storage_file, o.created_at, o.updated_at";

const FROM: &str = "outgoing o JOIN document_types dt ON o.document_type_id = dt.id";

/// Provides CRUD operations for the outgoing register.
pub struct OutgoingRepo;

impl OutgoingRepo {
    /// Insert a new entry, allocating its control number in the same
    /// transaction, and return the created row.
    ///
    /// The release date is set to the current date by the store.
    pub async fn create(
        pool: &PgPool,
        input: &NewOutgoing,
        year_month: &str,
    ) -> Result<Outgoing, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let control_no =
            ControlSequenceRepo::allocate(&mut *tx, Ledger::Outgoing, year_month).await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO outgoing (
                control_no, date_released, document_type_id, description,
                particulars, quantities, amounts, total_amount,
                agency, status, received_by, storage_file
             ) VALUES (
                $1, CURRENT_DATE, $2, $3,
                $4, $5, $6, $7,
                $8, $9, $10, $11
             )
             RETURNING id",
        )
        .bind(&control_no)
        .bind(input.document_type_id)
        .bind(&input.description)
        .bind(Json(&input.particulars))
        .bind(Json(&input.quantities))
        .bind(Json(&input.amounts))
        .bind(input.total_amount)
        .bind(&input.agency)
        .bind(&input.status)
        .bind(&input.received_by)
        .bind(&input.storage_file)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find an entry by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Outgoing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM} WHERE o.id = $1");
        sqlx::query_as::<_, Outgoing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all entries in control-number order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Outgoing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM} ORDER BY o.control_no ASC");
        sqlx::query_as::<_, Outgoing>(&query).fetch_all(pool).await
    }

    /// Update an entry. Only non-`None` fields in `input` are applied; the
    /// line-item columns are replaced as a unit when present.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOutgoing,
    ) -> Result<Option<Outgoing>, sqlx::Error> {
        let line_items = input.line_items.as_ref();
        let updated: Option<DbId> = sqlx::query_scalar(
            "UPDATE outgoing SET
                date_released = COALESCE($2, date_released),
                document_type_id = COALESCE($3, document_type_id),
                description = COALESCE($4, description),
                agency = COALESCE($5, agency),
                status = COALESCE($6, status),
                received_by = COALESCE($7, received_by),
                storage_file = COALESCE($8, storage_file),
                particulars = COALESCE($9, particulars),
                quantities = COALESCE($10, quantities),
                amounts = COALESCE($11, amounts),
                total_amount = COALESCE($12, total_amount),
                updated_at = now()
             WHERE id = $1
             RETURNING id",
        )
        .bind(id)
        .bind(input.date_released)
        .bind(input.document_type_id)
        .bind(&input.description)
        .bind(&input.agency)
        .bind(&input.status)
        .bind(&input.received_by)
        .bind(&input.storage_file)
        .bind(line_items.map(|l| Json(&l.particulars)))
        .bind(line_items.map(|l| Json(&l.quantities)))
        .bind(line_items.map(|l| Json(&l.amounts)))
        .bind(line_items.map(|l| l.total_amount))
        .fetch_optional(pool)
        .await?;

        match updated {
            Some(id) => Self::find_by_id(pool, id).await,
            None => Ok(None),
        }
    }

    /// Delete an entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM outgoing WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
