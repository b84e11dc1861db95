//! End-to-end sync tests
//!
//! Each test runs a full sync against mocked Clash of Clans and Notion
//! servers. No network access or credentials are needed.
//!
//! Run with: cargo test -p integration-tests --test sync_tests

use integration_tests::{fixtures::*, snapshot_files, TestApis, PROD_DATABASE_ID, TEST_DATABASE_ID};
use roster_common::{AppError, ConfigError, Mode};
use roster_core::SnapshotEntry;
use roster_service::{AbortReason, SyncOutcome};
use serde_json::json;

// ============================================================================
// Applied runs
// ============================================================================

#[tokio::test]
async fn test_new_member_is_added() {
    let apis = TestApis::start().await.unwrap();
    apis.mount_clan(clan(&[("#ABC", "Alice"), ("#XYZ", "Carol")])).await;
    apis.mount_query(
        TEST_DATABASE_ID,
        query(vec![page("p1", Some("#ABC"), "Alice"), page("p2", None, "Bob")]),
    )
    .await;
    apis.mount_create(200).await;

    let report = roster_cli::run(&apis.config().unwrap(), Mode::Test).await.unwrap();

    assert_eq!(report.outcome, SyncOutcome::Applied);
    assert!(report.is_clean());
    assert!(apis.deleted_blocks().await.is_empty());
    assert_eq!(
        apis.created_pages().await,
        vec![create_body(TEST_DATABASE_ID, "#XYZ", "Carol")]
    );
}

#[tokio::test]
async fn test_departed_member_is_removed() {
    let apis = TestApis::start().await.unwrap();
    apis.mount_clan(clan(&[("#ABC", "Alice")])).await;
    apis.mount_query(
        TEST_DATABASE_ID,
        query(vec![page("p1", Some("#ABC"), "Alice"), page("p9", Some("#OLD"), "Dave")]),
    )
    .await;
    apis.mount_delete("p9", 200).await;

    let report = roster_cli::run(&apis.config().unwrap(), Mode::Test).await.unwrap();

    assert_eq!(report.removed.len(), 1);
    assert_eq!(report.removed[0].name, "Dave");
    assert_eq!(apis.deleted_blocks().await, vec!["p9"]);
    assert!(apis.created_pages().await.is_empty());
}

#[tokio::test]
async fn test_snapshot_holds_pre_sync_rows() {
    let apis = TestApis::start().await.unwrap();
    apis.mount_clan(clan(&[("#T1", "X"), ("#T2", "Y")])).await;
    apis.mount_query(
        TEST_DATABASE_ID,
        query(vec![page_with_details("p1", "#T1", "Éric", &["Ancien"], "Oui")]),
    )
    .await;
    apis.mount_create(200).await;

    let report = roster_cli::run(&apis.config().unwrap(), Mode::Test).await.unwrap();

    let files = snapshot_files(&apis.saves_dir());
    assert_eq!(files.len(), 1);
    assert_eq!(report.snapshot.as_ref(), Some(&files[0]));

    let content = std::fs::read_to_string(&files[0]).unwrap();
    assert!(content.contains("Éric"));
    let entries: Vec<SnapshotEntry> = serde_json::from_str(&content).unwrap();
    assert_eq!(
        serde_json::to_value(&entries).unwrap(),
        json!([{"name": "Éric", "tags": ["Ancien"], "JDC": "Oui"}])
    );

    assert_eq!(report.added.len(), 1);
    assert_eq!(report.added[0].tag, "#T2");
}

#[tokio::test]
async fn test_prod_mode_uses_prod_database() {
    let apis = TestApis::start().await.unwrap();
    apis.mount_clan(clan(&[("#ABC", "Alice")])).await;
    apis.mount_query(PROD_DATABASE_ID, query(vec![])).await;
    apis.mount_create(200).await;

    let report = roster_cli::run(&apis.config().unwrap(), Mode::Prod).await.unwrap();

    assert!(report.is_clean());
    assert_eq!(
        apis.created_pages().await,
        vec![create_body(PROD_DATABASE_ID, "#ABC", "Alice")]
    );
}

#[tokio::test]
async fn test_mutation_failures_do_not_stop_the_run() {
    let apis = TestApis::start().await.unwrap();
    apis.mount_clan(clan(&[("#N1", "Hana")])).await;
    apis.mount_query(
        TEST_DATABASE_ID,
        query(vec![page("p1", Some("#O1"), "Dave"), page("p2", Some("#O2"), "Gus")]),
    )
    .await;
    apis.mount_delete("p1", 500).await;
    apis.mount_delete("p2", 200).await;
    apis.mount_create(400).await;

    let report = roster_cli::run(&apis.config().unwrap(), Mode::Test).await.unwrap();

    assert_eq!(report.outcome, SyncOutcome::Applied);
    assert_eq!(apis.deleted_blocks().await, vec!["p1", "p2"]);
    assert_eq!(apis.created_pages().await.len(), 1);

    let failed: Vec<_> = report.failures().map(|op| op.tag.as_str()).collect();
    assert_eq!(failed, vec!["#O1", "#N1"]);
}

// ============================================================================
// Aborted runs
// ============================================================================

#[tokio::test]
async fn test_empty_clan_leaves_database_untouched() {
    let apis = TestApis::start().await.unwrap();
    apis.mount_clan(clan(&[])).await;
    apis.mount_query(TEST_DATABASE_ID, query(vec![page("p1", Some("#OLD"), "Dave")])).await;

    let report = roster_cli::run(&apis.config().unwrap(), Mode::Test).await.unwrap();

    assert_eq!(report.outcome, SyncOutcome::Aborted(AbortReason::EmptyRoster));
    assert!(apis.notion_mutations().await.is_empty());
    assert!(snapshot_files(&apis.saves_dir()).is_empty());
}

#[tokio::test]
async fn test_missing_member_list_aborts() {
    let apis = TestApis::start().await.unwrap();
    apis.mount_clan(clan_without_members()).await;
    apis.mount_query(TEST_DATABASE_ID, query(vec![page("p1", Some("#OLD"), "Dave")])).await;

    let report = roster_cli::run(&apis.config().unwrap(), Mode::Test).await.unwrap();

    assert_eq!(
        report.outcome,
        SyncOutcome::Aborted(AbortReason::MemberListUnavailable)
    );
    assert!(apis.notion_mutations().await.is_empty());
}

#[tokio::test]
async fn test_clan_api_error_aborts() {
    let apis = TestApis::start().await.unwrap();
    apis.mount_clan_error(403).await;
    apis.mount_query(TEST_DATABASE_ID, query(vec![page("p1", Some("#OLD"), "Dave")])).await;

    let report = roster_cli::run(&apis.config().unwrap(), Mode::Test).await.unwrap();

    assert_eq!(report.outcome, SyncOutcome::Aborted(AbortReason::MemberFetchFailed));
    assert!(apis.notion_mutations().await.is_empty());
    assert!(snapshot_files(&apis.saves_dir()).is_empty());
}

// ============================================================================
// Fatal errors
// ============================================================================

#[tokio::test]
async fn test_malformed_query_is_fatal() {
    let apis = TestApis::start().await.unwrap();
    apis.mount_clan(clan(&[("#ABC", "Alice")])).await;
    apis.mount_query(TEST_DATABASE_ID, json!({"object": "list"})).await;

    let err = roster_cli::run(&apis.config().unwrap(), Mode::Test).await.unwrap_err();

    assert_eq!(err.error_code(), "SHAPE_ERROR");
    assert_eq!(err.exit_code(), 1);
    assert!(apis.notion_mutations().await.is_empty());
    assert!(snapshot_files(&apis.saves_dir()).is_empty());
}

#[tokio::test]
async fn test_missing_database_id_is_config_error() {
    let apis = TestApis::start().await.unwrap();
    let config = apis
        .config_with(|doc| doc["notion_db_prod"] = json!(""))
        .unwrap();

    let err = roster_cli::run(&config, Mode::Prod).await.unwrap_err();

    assert!(matches!(err, AppError::Config(ConfigError::MissingValue(_))));
    assert_eq!(err.exit_code(), 2);
}

// ============================================================================
// Idempotence
// ============================================================================

#[tokio::test]
async fn test_second_run_against_synced_database_is_a_no_op() {
    let apis = TestApis::start().await.unwrap();
    apis.mount_clan(clan(&[("#ABC", "Alice"), ("#XYZ", "Carol")])).await;
    apis.mount_query(
        TEST_DATABASE_ID,
        query(vec![
            page("p1", Some("#ABC"), "Alice"),
            page("p2", Some("#XYZ"), "Carol"),
            page("p3", None, "Bob"),
        ]),
    )
    .await;

    let report = roster_cli::run(&apis.config().unwrap(), Mode::Test).await.unwrap();

    assert!(report.removed.is_empty());
    assert!(report.added.is_empty());
    assert!(apis.notion_mutations().await.is_empty());
    assert_eq!(snapshot_files(&apis.saves_dir()).len(), 1);
}
