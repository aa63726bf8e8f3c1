//! Integration tests for the append-only audit trail.

use chrono::Utc;
use sqlx::PgPool;

use doctrail_core::audit;
use doctrail_db::models::log::{LogQuery, NewLogEntry};
use doctrail_db::repositories::LogRepo;

fn entry(log_id: &str, action: &str, description: &str) -> NewLogEntry {
    NewLogEntry {
        log_id: log_id.to_string(),
        action: action.to_string(),
        description: description.to_string(),
        username: "System".to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn insert_returns_the_stored_row(pool: PgPool) {
    let stored = LogRepo::insert(
        &pool,
        &entry("LOG_001_2024-05-07", "CREATE", "Created Disbursement Voucher"),
    )
    .await
    .unwrap();

    assert_eq!(stored.log_id, "LOG_001_2024-05-07");
    assert_eq!(stored.action, "CREATE");
    assert_eq!(stored.username, "System");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn daily_count_drives_log_ids(pool: PgPool) {
    let today = Utc::now().date_naive();

    let count = LogRepo::count_on_date(&pool, today).await.unwrap();
    assert_eq!(count, 0);
    assert_eq!(
        audit::format_log_id(count, today),
        format!("LOG_001_{today}")
    );

    LogRepo::insert(&pool, &entry(&audit::format_log_id(count, today), "CREATE", "x"))
        .await
        .unwrap();

    let count = LogRepo::count_on_date(&pool, today).await.unwrap();
    assert_eq!(count, 1);
    assert_eq!(
        audit::format_log_id(count, today),
        format!("LOG_002_{today}")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_oldest_first_with_action_filter(pool: PgPool) {
    for (id, action) in [
        ("LOG_001_2024-05-07", "CREATE"),
        ("LOG_002_2024-05-07", "UPDATE"),
        ("LOG_003_2024-05-07", "CREATE"),
    ] {
        LogRepo::insert(&pool, &entry(id, action, "x")).await.unwrap();
    }

    let all = LogRepo::list(&pool, &LogQuery::default()).await.unwrap();
    let ids: Vec<_> = all.iter().map(|l| l.log_id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["LOG_001_2024-05-07", "LOG_002_2024-05-07", "LOG_003_2024-05-07"]
    );

    let creates = LogRepo::list(
        &pool,
        &LogQuery {
            action: Some("CREATE".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(creates.len(), 2);
    assert!(creates.iter().all(|l| l.action == "CREATE"));
}
