//! Aggregate count queries for the dashboard.

use sqlx::PgPool;

use crate::models::dashboard::DashboardCounts;

/// Provides the register-wide counts shown on the dashboard.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Record counts for the dashboard cards.
    pub async fn counts(pool: &PgPool) -> Result<DashboardCounts, sqlx::Error> {
        let incoming: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM incoming")
            .fetch_one(pool)
            .await?;
        let outgoing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM outgoing")
            .fetch_one(pool)
            .await?;
        let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;

        Ok(DashboardCounts {
            documents: incoming + outgoing,
            incoming,
            outgoing,
            users,
        })
    }
}
