//! Repository traits for data access
//!
//! Documents are stored as JSON keyed by (collection, id). Implementations
//! are in infra/storage.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

pub use crate::contract::query::DocumentQuery;

/// Schemaless document storage shared by every collection
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Documents of a collection matching the query, sorted and paged
    async fn find(&self, collection: &str, query: &DocumentQuery) -> Result<Vec<Value>>;

    /// Number of documents matching the query (paging ignored)
    async fn count(&self, collection: &str, query: &DocumentQuery) -> Result<u64>;

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>>;

    /// Insert or overwrite a document
    async fn put(&self, collection: &str, id: &str, document: Value) -> Result<()>;

    /// Remove a document, returning whether it existed
    async fn remove(&self, collection: &str, id: &str) -> Result<bool>;
}
