//! Integration tests for the register repositories.
//!
//! Exercises the repository layer against a real database:
//! - Control-number assignment on create
//! - Partial updates and unit replacement of line items
//! - Delete behaviour and type-name resolution

use serde_json::json;
use sqlx::PgPool;

use doctrail_db::models::incoming::{NewIncoming, UpdateIncoming};
use doctrail_db::models::line_items::LineItemsUpdate;
use doctrail_db::models::outgoing::NewOutgoing;
use doctrail_db::repositories::{DocumentTypeRepo, IncomingRepo, OutgoingRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn voucher_type_id(pool: &PgPool) -> i64 {
    DocumentTypeRepo::resolve(pool, "Disbursement Voucher")
        .await
        .unwrap()
        .expect("seeded type")
}

fn new_incoming(document_type_id: i64) -> NewIncoming {
    NewIncoming {
        document_type_id,
        date_of_ada: String::new(),
        ada_no: "ADA-17".to_string(),
        jev_no: String::new(),
        or_no: String::new(),
        po_no: String::new(),
        description: String::new(),
        particulars: vec!["Supplies".to_string()],
        quantities: vec![json!(2)],
        amounts: vec![json!(150.0)],
        total_amount: 300.0,
        payee: String::new(),
        nature_of_payment: String::new(),
        agency: "Provincial Office".to_string(),
        status: "Received".to_string(),
        storage_file: String::new(),
    }
}

fn new_outgoing(document_type_id: i64) -> NewOutgoing {
    NewOutgoing {
        document_type_id,
        description: String::new(),
        particulars: vec!["Transmittal".to_string()],
        quantities: vec![json!(1)],
        amounts: vec![json!(0)],
        total_amount: 0.0,
        agency: "Provincial Office".to_string(),
        status: "Released".to_string(),
        received_by: "Records Section".to_string(),
        storage_file: String::new(),
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_assigns_first_control_number(pool: PgPool) {
    let type_id = voucher_type_id(&pool).await;

    let created = IncomingRepo::create(&pool, &new_incoming(type_id), "2024-05")
        .await
        .unwrap();

    assert_eq!(created.control_no, "2024-05-001");
    assert_eq!(created.total_amount, 300.0);
    assert_eq!(created.document_type, "Disbursement Voucher");
    assert!(created.date_received.is_some());
    assert_eq!(created.particulars.0, vec!["Supplies".to_string()]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn sequence_resumes_from_existing_rows(pool: PgPool) {
    let type_id = voucher_type_id(&pool).await;

    // Rows created before the counter existed must still seed it.
    for control_no in ["2024-05-003", "2024-05-010"] {
        sqlx::query(
            "INSERT INTO incoming (control_no, document_type_id) VALUES ($1, $2)",
        )
        .bind(control_no)
        .bind(type_id)
        .execute(&pool)
        .await
        .unwrap();
    }

    let created = IncomingRepo::create(&pool, &new_incoming(type_id), "2024-05")
        .await
        .unwrap();

    assert_eq!(created.control_no, "2024-05-011");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ledgers_have_independent_sequences(pool: PgPool) {
    let voucher = voucher_type_id(&pool).await;
    let aom = DocumentTypeRepo::resolve(&pool, "AOM Release")
        .await
        .unwrap()
        .expect("seeded type");

    let incoming = IncomingRepo::create(&pool, &new_incoming(voucher), "2024-05")
        .await
        .unwrap();
    let outgoing = OutgoingRepo::create(&pool, &new_outgoing(aom), "2024-05")
        .await
        .unwrap();

    assert_eq!(incoming.control_no, "2024-05-001");
    assert_eq!(outgoing.control_no, "2024-05-001");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn months_have_independent_sequences(pool: PgPool) {
    let type_id = voucher_type_id(&pool).await;

    let may = IncomingRepo::create(&pool, &new_incoming(type_id), "2024-05")
        .await
        .unwrap();
    let june = IncomingRepo::create(&pool, &new_incoming(type_id), "2024-06")
        .await
        .unwrap();

    assert_eq!(may.control_no, "2024-05-001");
    assert_eq!(june.control_no, "2024-06-001");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_applies_only_provided_fields(pool: PgPool) {
    let type_id = voucher_type_id(&pool).await;
    let created = IncomingRepo::create(&pool, &new_incoming(type_id), "2024-05")
        .await
        .unwrap();

    let update = UpdateIncoming {
        status: Some("Filed".to_string()),
        ..Default::default()
    };
    let updated = IncomingRepo::update(&pool, created.id, &update)
        .await
        .unwrap()
        .expect("row exists");

    assert_eq!(updated.status.as_deref(), Some("Filed"));
    // Untouched fields survive.
    assert_eq!(updated.agency.as_deref(), Some("Provincial Office"));
    assert_eq!(updated.control_no, created.control_no);
    assert_eq!(updated.total_amount, 300.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_line_items_as_a_unit(pool: PgPool) {
    let type_id = voucher_type_id(&pool).await;
    let created = IncomingRepo::create(&pool, &new_incoming(type_id), "2024-05")
        .await
        .unwrap();

    let update = UpdateIncoming {
        line_items: Some(LineItemsUpdate {
            particulars: vec!["Fuel".to_string(), "Oil".to_string()],
            quantities: vec![json!("3"), json!(1)],
            amounts: vec![json!("2.5"), json!(10)],
            total_amount: 17.5,
        }),
        ..Default::default()
    };
    let updated = IncomingRepo::update(&pool, created.id, &update)
        .await
        .unwrap()
        .expect("row exists");

    assert_eq!(updated.particulars.0.len(), 2);
    assert_eq!(updated.total_amount, 17.5);
    assert_eq!(updated.quantities.0[0], json!("3"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_row_returns_none(pool: PgPool) {
    let update = UpdateIncoming {
        status: Some("Filed".to_string()),
        ..Default::default()
    };
    let updated = IncomingRepo::update(&pool, 4242, &update).await.unwrap();
    assert!(updated.is_none());
}

// ---------------------------------------------------------------------------
// Delete / lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_the_row_once(pool: PgPool) {
    let type_id = voucher_type_id(&pool).await;
    let created = IncomingRepo::create(&pool, &new_incoming(type_id), "2024-05")
        .await
        .unwrap();

    assert!(IncomingRepo::delete(&pool, created.id).await.unwrap());
    assert!(!IncomingRepo::delete(&pool, created.id).await.unwrap());
    assert!(IncomingRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_orders_by_control_number(pool: PgPool) {
    let type_id = voucher_type_id(&pool).await;
    for _ in 0..3 {
        IncomingRepo::create(&pool, &new_incoming(type_id), "2024-05")
            .await
            .unwrap();
    }

    let rows = IncomingRepo::list(&pool).await.unwrap();
    let numbers: Vec<_> = rows.iter().map(|r| r.control_no.as_str()).collect();
    assert_eq!(numbers, vec!["2024-05-001", "2024-05-002", "2024-05-003"]);
}
