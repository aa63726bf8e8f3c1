//! Atomic control-number allocation.
//!
//! The register originally derived the next control number with a bare
//! read-max-then-insert, which hands the same number to concurrent creates
//! in the same month. Allocation here locks a per-(ledger, month) counter
//! row for the duration of the caller's transaction and reconciles it with
//! the highest sequence already present in the ledger table, so
//! pre-existing rows seed the counter and concurrent creates serialize.
//! The unique constraint on `control_no` remains as a backstop.

use doctrail_core::control_no;
use doctrail_core::ledger::Ledger;
use sqlx::PgConnection;

/// Provides control-number allocation for register inserts.
pub struct ControlSequenceRepo;

impl ControlSequenceRepo {
    /// Allocate the next control number for `ledger` in `year_month`
    /// (`YYYY-MM`).
    ///
    /// Must run inside the transaction that inserts the register row: the
    /// counter row stays locked until commit, and a rolled-back insert also
    /// rolls back the allocation.
    pub async fn allocate(
        conn: &mut PgConnection,
        ledger: Ledger,
        year_month: &str,
    ) -> Result<String, sqlx::Error> {
        sqlx::query(
            "INSERT INTO control_sequences (ledger, year_month) VALUES ($1, $2)
             ON CONFLICT (ledger, year_month) DO NOTHING",
        )
        .bind(ledger.as_str())
        .bind(year_month)
        .execute(&mut *conn)
        .await?;

        // Serializes concurrent allocations for the same (ledger, month).
        let last_seq: i64 = sqlx::query_scalar(
            "SELECT last_seq FROM control_sequences
             WHERE ledger = $1 AND year_month = $2 FOR UPDATE",
        )
        .bind(ledger.as_str())
        .bind(year_month)
        .fetch_one(&mut *conn)
        .await?;

        let live_max = Self::max_sequence(&mut *conn, ledger, year_month).await?;

        let max_existing = live_max
            .into_iter()
            .chain((last_seq > 0).then_some(last_seq as u64))
            .max();
        let next = control_no::next_sequence(max_existing);

        sqlx::query(
            "UPDATE control_sequences SET last_seq = $3
             WHERE ledger = $1 AND year_month = $2",
        )
        .bind(ledger.as_str())
        .bind(year_month)
        .bind(next as i64)
        .execute(&mut *conn)
        .await?;

        Ok(control_no::format_control_no(year_month, next))
    }

    /// Highest numeric control-number suffix already present for the month,
    /// or `None` when the month has no records.
    ///
    /// The suffix is the digits after the last hyphen, matching
    /// [`doctrail_core::control_no::sequence_suffix`].
    pub async fn max_sequence(
        conn: &mut PgConnection,
        ledger: Ledger,
        year_month: &str,
    ) -> Result<Option<u64>, sqlx::Error> {
        let table = match ledger {
            Ledger::Incoming => "incoming",
            Ledger::Outgoing => "outgoing",
        };
        let query = format!(
            "SELECT MAX((substring(control_no from '([0-9]+)$'))::BIGINT)
             FROM {table} WHERE control_no LIKE $1"
        );
        let max: Option<i64> = sqlx::query_scalar(&query)
            .bind(format!("{year_month}-%"))
            .fetch_one(&mut *conn)
            .await?;
        Ok(max.map(|m| m as u64))
    }
}
