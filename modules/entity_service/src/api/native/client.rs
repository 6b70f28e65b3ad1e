//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{DocumentQuery, EntityApi, EntityError, Record};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// In-process [`EntityApi`] backed directly by the domain service
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl EntityApi for NativeClient {
    async fn by_id(
        &self,
        collection: &str,
        id: &str,
        joins: &[String],
    ) -> Result<Record, EntityError> {
        self.service.by_id(collection, id, joins).await
    }

    async fn by_filter(
        &self,
        collection: &str,
        query: DocumentQuery,
        joins: &[String],
    ) -> Result<Vec<Record>, EntityError> {
        self.service.by_filter(collection, query, joins).await
    }

    async fn save(
        &self,
        collection: &str,
        document: serde_json::Value,
    ) -> Result<Record, EntityError> {
        self.service.save(collection, document).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), EntityError> {
        self.service.delete(collection, id).await
    }

    async fn count(&self, collection: &str) -> Result<u64, EntityError> {
        self.service.count(collection).await
    }
}
