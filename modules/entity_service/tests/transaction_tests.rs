//! Transaction queue: staging, commit, rollback and stale purge

mod common;

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeDelta, Utc};
use common::{print_test_header, Harness};
use entity_service::contract::entities::Role;
use entity_service::contract::{EntityError, Record};
use entity_service::domain::repository::DocumentStore;
use entity_service::domain::transaction::TransactionQueue;
use serde_json::json;
use tokio_util::sync::CancellationToken;

fn role(id: &str, name: &str) -> Record {
    let mut role = Role {
        name: name.to_string(),
        ..Default::default()
    };
    role.header.id = id.to_string();
    role.into()
}

#[tokio::test]
async fn test_rollback_restores_and_removes() {
    print_test_header(
        "test_rollback_restores_and_removes",
        &[
            "Updated rows get their original snapshot back",
            "Inserted rows are deleted",
        ],
    );
    let h = Harness::new().ready();
    h.store
        .put("Roles", "r1", json!({"Id": "r1", "Name": "Original"}))
        .await
        .unwrap();
    let queue = h.service.transactions();

    let tx = queue.begin();
    queue.stage(tx, role("r1", "Changed")).await.unwrap();
    queue.stage(tx, role("r1", "Changed again")).await.unwrap();
    let inserted = queue.stage(tx, role("", "Brand new")).await.unwrap();
    assert_eq!(queue.staged(tx), Some(2));
    assert_eq!(h.store.get("Roles", "r1").await.unwrap().unwrap()["Name"], "Changed again");

    let reverted = queue.rollback(tx).await.unwrap();
    assert_eq!(reverted, 2);
    assert_eq!(h.store.get("Roles", "r1").await.unwrap().unwrap()["Name"], "Original");
    assert!(h.store.get("Roles", inserted.id()).await.unwrap().is_none());
    assert!(queue.is_empty());
    println!("✅ Rolled back {} changes", reverted);
}

#[tokio::test]
async fn test_commit_keeps_writes() {
    let h = Harness::new().ready();
    let queue = h.service.transactions();

    let tx = queue.begin();
    queue.stage(tx, role("r1", "Kept")).await.unwrap();
    let committed = queue.commit(tx).unwrap();

    assert_eq!(committed.len(), 1);
    assert_eq!(h.store.get("Roles", "r1").await.unwrap().unwrap()["Name"], "Kept");
    let err = queue.rollback(tx).await.unwrap_err();
    assert!(matches!(err, EntityError::TransactionNotFound(_)));
}

#[tokio::test]
async fn test_stage_requires_open_transaction() {
    let h = Harness::new().ready();
    let queue = h.service.transactions();
    let err = queue
        .stage(uuid::Uuid::new_v4(), role("r1", "x"))
        .await
        .unwrap_err();
    assert!(matches!(err, EntityError::TransactionNotFound(_)));
    assert!(h.store.is_empty());
}

#[tokio::test]
async fn test_purge_drops_only_stale_transactions() {
    let h = Harness::new().ready();
    let queue = TransactionQueue::new(h.collections.clone(), Duration::from_secs(48 * 3600));

    let old = queue.begin();
    let purged = queue.purge_stale_at(Utc::now() + TimeDelta::hours(47));
    assert_eq!(purged, 0);

    let purged = queue.purge_stale_at(Utc::now() + TimeDelta::hours(49));
    assert_eq!(purged, 1);
    assert_eq!(queue.staged(old), None);
}

#[tokio::test(start_paused = true)]
async fn test_sweeper_purges_on_interval() {
    let h = Harness::new().ready();
    let queue = Arc::new(TransactionQueue::new(h.collections.clone(), Duration::ZERO));
    let cancel = CancellationToken::new();
    let sweeper = queue.spawn_sweeper(Duration::from_secs(60), cancel.clone());

    queue.begin();
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(queue.len(), 1);

    tokio::time::sleep(Duration::from_secs(61)).await;
    assert!(queue.is_empty());

    cancel.cancel();
    sweeper.await.unwrap();
}
