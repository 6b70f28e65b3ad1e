//! Seed bootstrap: hash idempotence, gates, overwrite policy, seed files

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{bootstrapper, print_test_header, registry_with_seed, scope, Harness};
use entity_service::contract::entities::Role;
use entity_service::domain::bootstrap::{
    seed_dir, BootstrapOutcome, BootstrapSettings, Bootstrapper, ManifestCache, NoopImporter,
};
use entity_service::domain::registry::Registration;
use entity_service::domain::repository::DocumentStore;
use serde_json::json;
use tokio_util::sync::CancellationToken;

const TWO_ROLES: &str = r#"[{"Id":"r1","Name":"Admin"},{"Id":"r2","Name":"Viewer"}]"#;

fn harness_with_roles(json: &str) -> Harness {
    Harness::with_registry(registry_with_seed(Registration::of::<Role>(), json))
}

async fn role_count(h: &Harness) -> u64 {
    h.collections
        .resolve_collection("Roles")
        .unwrap()
        .query()
        .await
        .count()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_empty_collection_is_seeded() {
    print_test_header(
        "test_empty_collection_is_seeded",
        &["Two seed records land in an empty collection and the hash is recorded"],
    );
    let app = tempfile::tempdir().unwrap();
    let h = harness_with_roles(TWO_ROLES);
    let roles = h.collections.resolve_collection("Roles").unwrap();
    assert!(!roles.is_ready());

    let report = bootstrapper(app.path())
        .run(&roles, &CancellationToken::new())
        .await;

    assert!(roles.is_ready());
    assert_eq!(report.outcome, BootstrapOutcome::Completed);
    assert_eq!(report.candidates, 2);
    assert_eq!(report.applied, 2);
    assert_eq!(role_count(&h).await, 2);
    assert!(app.path().join("cache").join("ShopRoles.hashes.json").exists());

    let stored = roles.query().await.by_id_as::<Role>("r1").await.unwrap().unwrap();
    assert_eq!(stored.name, "Admin");
    assert!(stored.header.create_date.is_some());
    assert!(stored.header.update_date >= stored.header.create_date);
    println!("✅ Seeded {} roles", report.applied);
}

#[tokio::test]
async fn test_applied_hash_is_not_reapplied() {
    print_test_header(
        "test_applied_hash_is_not_reapplied",
        &["A second run over a non-empty collection skips the known payload"],
    );
    let app = tempfile::tempdir().unwrap();
    let h = harness_with_roles(TWO_ROLES);
    let roles = h.collections.resolve_collection("Roles").unwrap();
    let cancel = CancellationToken::new();

    bootstrapper(app.path()).run(&roles, &cancel).await;
    h.store
        .put("Roles", "r1", json!({"Id": "r1", "Name": "Renamed"}))
        .await
        .unwrap();

    let again = bootstrapper(app.path()).run(&roles, &cancel).await;
    assert_eq!(again.skipped_payloads, 1);
    assert_eq!(again.candidates, 0);
    assert_eq!(again.applied, 0);

    let stored = h.store.get("Roles", "r1").await.unwrap().unwrap();
    assert_eq!(stored["Name"], "Renamed");
}

#[tokio::test]
async fn test_existing_rows_are_left_alone_without_always_update() {
    let app = tempfile::tempdir().unwrap();
    let h = harness_with_roles(TWO_ROLES);
    h.store
        .put("Roles", "r1", json!({"Id": "r1", "Name": "Custom"}))
        .await
        .unwrap();
    let roles = h.collections.resolve_collection("Roles").unwrap();

    let report = bootstrapper(app.path())
        .run(&roles, &CancellationToken::new())
        .await;

    // hash unknown, so the payload is read, but r1 already exists
    assert_eq!(report.candidates, 2);
    assert_eq!(report.already_present, 1);
    assert_eq!(report.applied, 1);
    assert_eq!(report.accepted(), 2);
    let stored = h.store.get("Roles", "r1").await.unwrap().unwrap();
    assert_eq!(stored["Name"], "Custom");
}

#[tokio::test]
async fn test_always_update_overwrites_existing_row() {
    print_test_header(
        "test_always_update_overwrites_existing_row",
        &["AlwaysUpdate records are rewritten even when the row exists"],
    );
    let app = tempfile::tempdir().unwrap();
    let h = harness_with_roles(
        r#"[{"Id":"r1","Name":"Admin","BootstrapMeta":{"AlwaysUpdate":true}},{"Id":"r2","Name":"Viewer"}]"#,
    );
    h.store
        .put("Roles", "r1", json!({"Id": "r1", "Name": "Tampered"}))
        .await
        .unwrap();
    h.store
        .put("Roles", "r2", json!({"Id": "r2", "Name": "Tampered"}))
        .await
        .unwrap();
    let roles = h.collections.resolve_collection("Roles").unwrap();

    let report = bootstrapper(app.path())
        .run(&roles, &CancellationToken::new())
        .await;

    assert_eq!(report.applied, 1);
    assert_eq!(report.already_present, 1);
    let r1 = h.store.get("Roles", "r1").await.unwrap().unwrap();
    let r2 = h.store.get("Roles", "r2").await.unwrap().unwrap();
    assert_eq!(r1["Name"], "Admin");
    assert_eq!(r2["Name"], "Tampered");
    assert!(r1.get("BootstrapMeta").is_none());
}

#[tokio::test]
async fn test_version_gate_rejects_record() {
    let app = tempfile::tempdir().unwrap();
    let h = harness_with_roles(
        r#"[{"Id":"r1","Name":"Old","BootstrapMeta":{"Version":3}},{"Id":"r2","Name":"New","BootstrapMeta":{"Version":6}}]"#,
    );
    let roles = h.collections.resolve_collection("Roles").unwrap();

    let report = bootstrapper(app.path())
        .run(&roles, &CancellationToken::new())
        .await;

    assert_eq!(report.applied, 1);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].id, "r1");
    assert!(report.rejected[0].reasons.contains(&"Version Mismatch".to_string()));
    assert!(h.store.get("Roles", "r1").await.unwrap().is_none());
    assert!(h.store.get("Roles", "r2").await.unwrap().is_some());
}

#[tokio::test]
async fn test_deployment_gates_collect_all_reasons() {
    let app = tempfile::tempdir().unwrap();
    let h = harness_with_roles(
        r#"[{"Id":"r1","Name":"X","BootstrapMeta":{"Domain":"other.example.com","ProductNames":["Other"],"ReleaseMode":"production"}}]"#,
    );
    let roles = h.collections.resolve_collection("Roles").unwrap();

    let report = bootstrapper(app.path())
        .run(&roles, &CancellationToken::new())
        .await;

    assert_eq!(
        report.rejected[0].reasons,
        vec![
            "FQDN Mismatch With Domain".to_string(),
            "ProductNames does not Match Product".to_string(),
            "ReleaseMode does not match".to_string(),
        ]
    );
    assert_eq!(role_count(&h).await, 0);
}

#[tokio::test]
async fn test_delete_row_removes_existing_record() {
    let app = tempfile::tempdir().unwrap();
    let h = harness_with_roles(
        r#"[{"Id":"r9","BootstrapMeta":{"DeleteRow":true,"AlwaysUpdate":true}}]"#,
    );
    h.store
        .put("Roles", "r9", json!({"Id": "r9", "Name": "Legacy"}))
        .await
        .unwrap();
    let roles = h.collections.resolve_collection("Roles").unwrap();

    let report = bootstrapper(app.path())
        .run(&roles, &CancellationToken::new())
        .await;

    assert_eq!(report.deleted, 1);
    assert_eq!(report.applied, 0);
    assert!(h.store.get("Roles", "r9").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_row_of_absent_record_is_not_counted() {
    let app = tempfile::tempdir().unwrap();
    let h = harness_with_roles(r#"[{"Id":"r9","BootstrapMeta":{"DeleteRow":true}}]"#);
    let roles = h.collections.resolve_collection("Roles").unwrap();

    let report = bootstrapper(app.path())
        .run(&roles, &CancellationToken::new())
        .await;

    assert_eq!(report.outcome, BootstrapOutcome::Completed);
    assert_eq!(report.candidates, 1);
    assert_eq!(report.deleted, 0);
    assert!(report.failures.is_empty());
    assert!(h.store.get("Roles", "r9").await.unwrap().is_none());
}

#[tokio::test]
async fn test_records_without_id_get_one() {
    let app = tempfile::tempdir().unwrap();
    let h = harness_with_roles(r#"[{"Name":"Anonymous"}]"#);
    let roles = h.collections.resolve_collection("Roles").unwrap();

    bootstrapper(app.path())
        .run(&roles, &CancellationToken::new())
        .await;

    let all = roles.query().await.all_as::<Role>().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].header.id.len(), 24);
}

#[tokio::test]
async fn test_disabled_bootstrap_only_marks_ready() {
    let app = tempfile::tempdir().unwrap();
    let h = harness_with_roles(TWO_ROLES);
    let roles = h.collections.resolve_collection("Roles").unwrap();
    let disabled = Bootstrapper::new(
        BootstrapSettings {
            enabled: false,
            scope: scope(),
            app_location: app.path().to_path_buf(),
            delay: Duration::ZERO,
        },
        Arc::new(ManifestCache::new(app.path().join("cache"))),
        Arc::new(NoopImporter),
    );

    let report = disabled.run(&roles, &CancellationToken::new()).await;

    assert_eq!(report.outcome, BootstrapOutcome::Disabled);
    assert!(roles.is_ready());
    assert_eq!(role_count(&h).await, 0);
}

#[tokio::test]
async fn test_corrupt_hash_cache_aborts_but_marks_ready() {
    print_test_header(
        "test_corrupt_hash_cache_aborts_but_marks_ready",
        &["Fail closed on an unreadable manifest without hanging readers"],
    );
    let app = tempfile::tempdir().unwrap();
    let cache_dir = app.path().join("cache");
    std::fs::create_dir_all(&cache_dir).unwrap();
    std::fs::write(cache_dir.join("ShopRoles.hashes.json"), b"{broken").unwrap();

    let h = harness_with_roles(TWO_ROLES);
    let roles = h.collections.resolve_collection("Roles").unwrap();
    let report = bootstrapper(app.path())
        .run(&roles, &CancellationToken::new())
        .await;

    assert!(matches!(report.outcome, BootstrapOutcome::Aborted(_)));
    assert!(roles.is_ready());
    assert_eq!(role_count(&h).await, 0);
}

#[tokio::test]
async fn test_seed_directory_files_are_applied() {
    let app = tempfile::tempdir().unwrap();
    let dist = seed_dir(app.path(), "roles");
    std::fs::create_dir_all(&dist).unwrap();
    std::fs::write(dist.join("admins.json"), r#"[{"Id":"d1","Name":"FromDisk"}]"#).unwrap();
    std::fs::write(dist.join("broken.json"), "not json").unwrap();

    let h = Harness::new();
    let roles = h.collections.resolve_collection("Roles").unwrap();
    let report = bootstrapper(app.path())
        .run(&roles, &CancellationToken::new())
        .await;

    assert!(report.directory_found);
    assert_eq!(report.invalid_payloads, 1);
    assert_eq!(report.applied, 1);
    assert_eq!(report.outcome, BootstrapOutcome::Completed);
    let stored = h.store.get("Roles", "d1").await.unwrap().unwrap();
    assert_eq!(stored["Name"], "FromDisk");
}

#[tokio::test]
async fn test_invalid_embedded_base64_aborts() {
    let app = tempfile::tempdir().unwrap();
    let mut registry = common::registry_without_seeds();
    registry.register(Registration::of::<Role>().with_seed_payload("@@not base64@@"));
    let h = Harness::with_registry(registry);
    let roles = h.collections.resolve_collection("Roles").unwrap();

    let report = bootstrapper(app.path())
        .run(&roles, &CancellationToken::new())
        .await;
    assert!(matches!(report.outcome, BootstrapOutcome::Aborted(_)));
    assert!(roles.is_ready());
}

#[tokio::test]
async fn test_readers_wait_for_bootstrap() {
    let app = tempfile::tempdir().unwrap();
    let h = harness_with_roles(TWO_ROLES);
    let roles = h.collections.resolve_collection("Roles").unwrap();

    let reader = {
        let roles = roles.clone();
        tokio::spawn(async move { roles.query().await.count().await.unwrap() })
    };
    tokio::task::yield_now().await;
    assert!(!reader.is_finished());

    bootstrapper(app.path())
        .run(&roles, &CancellationToken::new())
        .await;
    assert_eq!(reader.await.unwrap(), 2);
}

#[tokio::test]
async fn test_spawn_all_seeds_every_collection() {
    let app = tempfile::tempdir().unwrap();
    let h = harness_with_roles(TWO_ROLES);
    let runner = Arc::new(bootstrapper(app.path()));

    let mut tasks = runner.spawn_all(&h.collections, &CancellationToken::new());
    let mut reports = Vec::new();
    while let Some(report) = tasks.join_next().await {
        reports.push(report.unwrap());
    }

    assert_eq!(reports.len(), h.collections.iter().count());
    assert!(h.collections.iter().all(|c| c.is_ready()));
    assert_eq!(role_count(&h).await, 2);
}
