//! Integration tests for `PgAppointmentRepository`.
//!
//! These need a running `PostgreSQL` reachable through `DATABASE_URL`; run
//! them with `cargo test -- --ignored`.

use sqlx::PgPool;
use studio_core::appointment::{AppointmentId, AppointmentPatch};
use studio_core::repository::AppointmentRepository;
use studio_store::pg_appointment_repository::PgAppointmentRepository;
use studio_test_support::fixtures;
use uuid::Uuid;

// --- insert + find_by_id round-trip ---

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_assigns_id_and_round_trips(pool: PgPool) {
    let repo = PgAppointmentRepository::new(pool);
    let input = fixtures::jacques_dupont();

    let created = repo.insert(&input).await.unwrap();
    let loaded = repo.find_by_id(&created.id).await.unwrap().unwrap();

    assert!(Uuid::parse_str(created.id.as_str()).is_ok());
    assert_eq!(loaded, created);
    assert_eq!(loaded.details(), input);
}

// --- existence ---

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_exists_reports_absence_for_unknown_and_malformed_ids(pool: PgPool) {
    let repo = PgAppointmentRepository::new(pool);

    assert!(!repo.exists(&AppointmentId::from(Uuid::new_v4())).await.unwrap());
    assert!(!repo.exists(&AppointmentId::new("xxx")).await.unwrap());
    assert!(repo.find_by_id(&AppointmentId::new("xxx")).await.unwrap().is_none());
}

// --- listing ---

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_find_all_returns_records_in_insertion_order(pool: PgPool) {
    let repo = PgAppointmentRepository::new(pool);
    let first = repo.insert(&fixtures::jacques_dupont()).await.unwrap();
    let second = repo
        .insert(&fixtures::studio_records()[1].details())
        .await
        .unwrap();

    let all = repo.find_all().await.unwrap();

    assert_eq!(all, vec![first, second]);
}

// --- pattern search ---

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_subject_search_is_case_insensitive_on_any_tag(pool: PgPool) {
    let repo = PgAppointmentRepository::new(pool);
    for record in fixtures::studio_records() {
        repo.insert(&record.details()).await.unwrap();
    }

    let dragons = repo.find_by_subject_pattern("DRAGON").await.unwrap();
    let romans = repo.find_by_subject_pattern("Roma").await.unwrap();
    let none = repo.find_by_subject_pattern("koi").await.unwrap();

    assert_eq!(dragons.len(), 1);
    assert_eq!(dragons[0].client.last_name, "Dupont");
    assert_eq!(romans.len(), 1);
    assert!(none.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_email_search_treats_wildcards_literally(pool: PgPool) {
    let repo = PgAppointmentRepository::new(pool);
    for record in fixtures::studio_records() {
        repo.insert(&record.details()).await.unwrap();
    }

    let smiths = repo.find_by_email_pattern("SMITH@").await.unwrap();
    let wildcard = repo.find_by_email_pattern("%").await.unwrap();

    assert_eq!(smiths.len(), 1);
    assert!(wildcard.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_pattern_with_nul_matches_nothing(pool: PgPool) {
    let repo = PgAppointmentRepository::new(pool);
    repo.insert(&fixtures::jacques_dupont()).await.unwrap();

    assert!(repo.find_by_subject_pattern("dra\0gon").await.unwrap().is_empty());
    assert!(repo.find_by_email_pattern("\0").await.unwrap().is_empty());
}

// --- merge update ---

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_fetch_and_merge_keeps_omitted_fields(pool: PgPool) {
    let repo = PgAppointmentRepository::new(pool);
    let created = repo.insert(&fixtures::jacques_dupont()).await.unwrap();
    let patch = AppointmentPatch {
        completion_flag: Some(true),
        ..AppointmentPatch::for_id(created.id.clone())
    };

    let merged = repo
        .fetch_and_merge(&created.id, &patch)
        .await
        .unwrap()
        .unwrap();
    let loaded = repo.find_by_id(&created.id).await.unwrap().unwrap();

    assert!(merged.completion_flag);
    assert_eq!(loaded, merged);
    assert_eq!(loaded.client, created.client);
    assert_eq!(loaded.first_appointment_date, created.first_appointment_date);
    assert_eq!(loaded.subject_tags, created.subject_tags);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_fetch_and_merge_returns_none_for_unknown_id(pool: PgPool) {
    let repo = PgAppointmentRepository::new(pool);
    let id = AppointmentId::from(Uuid::new_v4());

    let merged = repo
        .fetch_and_merge(&id, &AppointmentPatch::for_id(id.clone()))
        .await
        .unwrap();

    assert!(merged.is_none());
}

// --- delete ---

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_by_id_removes_the_row_once(pool: PgPool) {
    let repo = PgAppointmentRepository::new(pool);
    let created = repo.insert(&fixtures::jacques_dupont()).await.unwrap();

    assert!(repo.delete_by_id(&created.id).await.unwrap());
    assert!(!repo.delete_by_id(&created.id).await.unwrap());
    assert!(!repo.exists(&created.id).await.unwrap());
}
