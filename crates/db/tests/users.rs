//! Integration tests for the user directory repository.

use assert_matches::assert_matches;
use sqlx::PgPool;

use doctrail_db::models::user::{NewUser, UpdateUser};
use doctrail_db::repositories::UserRepo;

fn new_user(id_number: &str, email: &str) -> NewUser {
    NewUser {
        id_number: id_number.to_string(),
        first_name: "Ana".to_string(),
        middle_name: String::new(),
        last_name: "Reyes".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$stub".to_string(),
        role: "Staff".to_string(),
        address: String::new(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_find(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("2024-0001", "ana@example.test"))
        .await
        .unwrap();

    let found = UserRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("row exists");
    assert_eq!(found.id_number, "2024-0001");
    assert_eq!(found.role, "Staff");

    let by_number = UserRepo::find_by_id_number(&pool, "2024-0001")
        .await
        .unwrap();
    assert!(by_number.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn identity_taken_checks_both_identifiers(pool: PgPool) {
    UserRepo::create(&pool, &new_user("2024-0001", "ana@example.test"))
        .await
        .unwrap();

    assert!(UserRepo::identity_taken(&pool, "2024-0001", "other@example.test")
        .await
        .unwrap());
    assert!(UserRepo::identity_taken(&pool, "2024-9999", "ana@example.test")
        .await
        .unwrap());
    assert!(!UserRepo::identity_taken(&pool, "2024-9999", "other@example.test")
        .await
        .unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_violates_the_unique_constraint(pool: PgPool) {
    UserRepo::create(&pool, &new_user("2024-0001", "ana@example.test"))
        .await
        .unwrap();

    let result = UserRepo::create(&pool, &new_user("2024-0002", "ana@example.test")).await;
    assert_matches!(result, Err(sqlx::Error::Database(err)) => {
        assert_eq!(err.constraint(), Some("uq_users_email"));
    });
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_applies_only_provided_fields(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("2024-0001", "ana@example.test"))
        .await
        .unwrap();

    let updated = UserRepo::update(
        &pool,
        created.id,
        &UpdateUser {
            role: Some("Audit Team Leader".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("row exists");

    assert_eq!(updated.role, "Audit Team Leader");
    assert_eq!(updated.email, "ana@example.test");
    assert_eq!(updated.password_hash, created.password_hash);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_the_row_once(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("2024-0001", "ana@example.test"))
        .await
        .unwrap();

    assert!(UserRepo::delete(&pool, created.id).await.unwrap());
    assert!(!UserRepo::delete(&pool, created.id).await.unwrap());
}
