//! Shared harness: in-memory store, collections and service wiring

#![allow(dead_code)]

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use base64::Engine;
use entity_service::domain::bootstrap::{
    BootstrapSettings, Bootstrapper, DeploymentScope, ManifestCache, NoopImporter,
};
use entity_service::domain::cache::RecordCache;
use entity_service::domain::collection::Collections;
use entity_service::domain::join::QueryContext;
use entity_service::domain::registry::{EntityRegistry, Registration};
use entity_service::domain::repository::{DocumentQuery, DocumentStore};
use entity_service::domain::transaction::TransactionQueue;
use entity_service::domain::Service;
use entity_service::infra::storage::InMemoryDocumentStore;
use serde_json::Value;
use tokio::sync::Notify;

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

pub struct Harness {
    pub store: Arc<InMemoryDocumentStore>,
    pub collections: Arc<Collections>,
    pub service: Arc<Service>,
}

impl Harness {
    /// Default entities with embedded seeds removed
    pub fn new() -> Self {
        Self::with_registry(registry_without_seeds())
    }

    pub fn with_registry(registry: EntityRegistry) -> Self {
        let store = Arc::new(InMemoryDocumentStore::new());
        let collections = Arc::new(Collections::new(
            Arc::new(registry),
            store.clone(),
            Arc::new(RecordCache::new()),
            Duration::from_millis(100),
        ));
        let transactions = Arc::new(TransactionQueue::new(
            collections.clone(),
            Duration::from_secs(48 * 3600),
        ));
        let service = Arc::new(Service::new(
            collections.clone(),
            transactions,
            QueryContext::new().with_views(true),
            8,
        ));
        Self {
            store,
            collections,
            service,
        }
    }

    /// Open every ready gate, for tests that skip bootstrap
    pub fn ready(self) -> Self {
        self.collections.mark_all_ready();
        self
    }
}

/// Every built-in entity, with no embedded seed payloads
pub fn registry_without_seeds() -> EntityRegistry {
    let defaults = EntityRegistry::with_defaults();
    let mut registry = EntityRegistry::new();
    for registration in defaults.iter() {
        registry.register(registration.clone().with_seed_payload(""));
    }
    registry
}

/// Registry without seeds except one collection carrying `payload`
pub fn registry_with_seed(registration: Registration, json: &str) -> EntityRegistry {
    let mut registry = registry_without_seeds();
    registry.register(registration.with_seed_payload(b64(json)));
    registry
}

pub fn b64(json: &str) -> String {
    base64::engine::general_purpose::STANDARD.encode(json)
}

pub fn scope() -> DeploymentScope {
    DeploymentScope {
        product_name: "Shop".to_string(),
        server_fqdn: "shop.example.com".to_string(),
        version_numeric: 5,
        release_mode: "development".to_string(),
    }
}

pub fn bootstrapper(app: &Path) -> Bootstrapper {
    Bootstrapper::new(
        BootstrapSettings {
            enabled: true,
            scope: scope(),
            app_location: app.to_path_buf(),
            delay: Duration::ZERO,
        },
        Arc::new(ManifestCache::new(app.join("cache"))),
        Arc::new(NoopImporter),
    )
}

/// In-memory store whose next `get` stops after reading until resumed
#[derive(Default)]
pub struct PausingGetStore {
    pub inner: InMemoryDocumentStore,
    pub fetched: Notify,
    pub resume: Notify,
    armed: AtomicBool,
}

impl PausingGetStore {
    pub fn pause_next_get(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl DocumentStore for PausingGetStore {
    async fn find(&self, collection: &str, query: &DocumentQuery) -> Result<Vec<Value>> {
        self.inner.find(collection, query).await
    }

    async fn count(&self, collection: &str, query: &DocumentQuery) -> Result<u64> {
        self.inner.count(collection, query).await
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let document = self.inner.get(collection, id).await?;
        if self.armed.swap(false, Ordering::SeqCst) {
            self.fetched.notify_one();
            self.resume.notified().await;
        }
        Ok(document)
    }

    async fn put(&self, collection: &str, id: &str, document: Value) -> Result<()> {
        self.inner.put(collection, id, document).await
    }

    async fn remove(&self, collection: &str, id: &str) -> Result<bool> {
        self.inner.remove(collection, id).await
    }
}

/// In-memory store whose `count` never completes, stalling bootstrap
#[derive(Default)]
pub struct StalledCountStore {
    pub inner: InMemoryDocumentStore,
}

#[async_trait]
impl DocumentStore for StalledCountStore {
    async fn find(&self, collection: &str, query: &DocumentQuery) -> Result<Vec<Value>> {
        self.inner.find(collection, query).await
    }

    async fn count(&self, _collection: &str, _query: &DocumentQuery) -> Result<u64> {
        std::future::pending().await
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        self.inner.get(collection, id).await
    }

    async fn put(&self, collection: &str, id: &str, document: Value) -> Result<()> {
        self.inner.put(collection, id, document).await
    }

    async fn remove(&self, collection: &str, id: &str) -> Result<bool> {
        self.inner.remove(collection, id).await
    }
}
