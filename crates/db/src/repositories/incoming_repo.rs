//! Repository for the `incoming` register table.

use doctrail_core::ledger::Ledger;
use doctrail_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::incoming::{Incoming, NewIncoming, UpdateIncoming};
use crate::repositories::ControlSequenceRepo;

/// Column list shared across SELECT queries; rows are always joined with
/// the resolved document type name.
const COLUMNS: &str = "\
    i.id, i.control_no, i.date_received, i.date_of_ada, i.document_type_id, \
    dt.name AS document_type, i.ada_no, i.jev_no, i.or_no, i.po_no, \
    i.description, i.particulars, i.quantities, i.amounts, i.total_amount, \
    i.payee, i.nature_of_payment, i.agency, i.status, i.storage_file, \
    i.created_at, i.updated_at";

const FROM: &str = "incoming i JOIN document_types dt ON i.document_type_id = dt.id";

/// Provides CRUD operations for the incoming register.
pub struct IncomingRepo;

impl IncomingRepo {
    /// Insert a new entry, allocating its control number in the same
    /// transaction, and return the created row.
    ///
    /// The receive date is set to the current date by the store.
    pub async fn create(
        pool: &PgPool,
        input: &NewIncoming,
        year_month: &str,
    ) -> Result<Incoming, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let control_no =
            ControlSequenceRepo::allocate(&mut *tx, Ledger::Incoming, year_month).await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO incoming (
                control_no, date_received, date_of_ada, document_type_id,
                ada_no, jev_no, or_no, po_no, description,
                particulars, quantities, amounts, total_amount,
                payee, nature_of_payment, agency, status, storage_file
             ) VALUES (
                $1, CURRENT_DATE, $2, $3,
                $4, $5, $6, $7, $8,
                $9, $10, $11, $12,
                $13, $14, $15, $16, $17
             )
             RETURNING id",
        )
        .bind(&control_no)
        .bind(&input.date_of_ada)
        .bind(input.document_type_id)
        .bind(&input.ada_no)
        .bind(&input.jev_no)
        .bind(&input.or_no)
        .bind(&input.po_no)
        .bind(&input.description)
        .bind(Json(&input.particulars))
        .bind(Json(&input.quantities))
        .bind(Json(&input.amounts))
        .bind(input.total_amount)
        .bind(&input.payee)
        .bind(&input.nature_of_payment)
        .bind(&input.agency)
        .bind(&input.status)
        .bind(&input.storage_file)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find an entry by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Incoming>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM} WHERE i.id = $1");
        sqlx::query_as::<_, Incoming>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all entries in control-number order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Incoming>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM} ORDER BY i.control_no ASC");
        sqlx::query_as::<_, Incoming>(&query).fetch_all(pool).await
    }

    /// Update an entry. Only non-`None` fields in `input` are applied; the
    /// line-item columns are replaced as a unit when present.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateIncoming,
    ) -> Result<Option<Incoming>, sqlx::Error> {
        let line_items = input.line_items.as_ref();
        let updated: Option<DbId> = sqlx::query_scalar(
            "UPDATE incoming SET
                date_of_ada = COALESCE($2, date_of_ada),
                document_type_id = COALESCE($3, document_type_id),
                ada_no = COALESCE($4, ada_no),
                jev_no = COALESCE($5, jev_no),
                or_no = COALESCE($6, or_no),
                po_no = COALESCE($7, po_no),
                description = COALESCE($8, description),
                payee = COALESCE($9, payee),
                nature_of_payment = COALESCE($10, nature_of_payment),
                agency = COALESCE($11, agency),
                status = COALESCE($12, status),
                storage_file = COALESCE($13, storage_file),
                particulars = COALESCE($14, particulars),
                quantities = COALESCE($15, quantities),
                amounts = COALESCE($16, amounts),
                total_amount = COALESCE($17, total_amount),
                updated_at = now()
             WHERE id = $1
             RETURNING id",
        )
        .bind(id)
        .bind(&input.date_of_ada)
        .bind(input.document_type_id)
        .bind(&input.ada_no)
        .bind(&input.jev_no)
        .bind(&input.or_no)
        .bind(&input.po_no)
        .bind(&input.description)
        .bind(&input.payee)
        .bind(&input.nature_of_payment)
        .bind(&input.agency)
        .bind(&input.status)
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
        let result = sqlx::query("DELETE FROM incoming WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
