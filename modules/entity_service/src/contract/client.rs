//! Native client trait for inter-module communication
//!
//! Other modules read and write entities through this trait. No HTTP:
//! direct calls into the domain service.

use super::{error::EntityError, query::DocumentQuery, record::Record};
use async_trait::async_trait;

/// Entity service API for inter-module communication
#[async_trait]
pub trait EntityApi: Send + Sync {
    /// Fetch one record by id and hydrate the requested join paths
    async fn by_id(
        &self,
        collection: &str,
        id: &str,
        joins: &[String],
    ) -> Result<Record, EntityError>;

    /// Query a collection and hydrate the requested join paths on every row
    async fn by_filter(
        &self,
        collection: &str,
        query: DocumentQuery,
        joins: &[String],
    ) -> Result<Vec<Record>, EntityError>;

    /// Validate and persist a JSON document, returning the saved record
    async fn save(
        &self,
        collection: &str,
        document: serde_json::Value,
    ) -> Result<Record, EntityError>;

    async fn delete(&self, collection: &str, id: &str) -> Result<(), EntityError>;

    /// Number of rows in a collection
    async fn count(&self, collection: &str) -> Result<u64, EntityError>;
}
