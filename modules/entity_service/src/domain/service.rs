//! Domain service - business logic orchestration

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use super::collection::Collections;
use super::join::{JoinResolver, QueryContext};
use super::repository::DocumentQuery;
use super::transaction::TransactionQueue;
use super::validation::validate_and_clean;
use crate::contract::{EntityError, Record};

/// Domain service for entity reads, writes and relation hydration
pub struct Service {
    collections: Arc<Collections>,
    resolver: JoinResolver,
    transactions: Arc<TransactionQueue>,
    context: QueryContext,
    recursion_budget: usize,
}

impl Service {
    pub fn new(
        collections: Arc<Collections>,
        transactions: Arc<TransactionQueue>,
        context: QueryContext,
        recursion_budget: usize,
    ) -> Self {
        Self {
            resolver: JoinResolver::new(collections.clone()),
            collections,
            transactions,
            context,
            recursion_budget,
        }
    }

    pub fn collections(&self) -> &Arc<Collections> {
        &self.collections
    }

    pub fn transactions(&self) -> &Arc<TransactionQueue> {
        &self.transactions
    }

    /// Context applied to reads made through the service
    pub fn query_context(&self) -> &QueryContext {
        &self.context
    }

    // ===== Reads =====

    /// Fetch one record and hydrate the requested join paths
    pub async fn by_id(
        &self,
        collection: &str,
        id: &str,
        joins: &[String],
    ) -> Result<Record, EntityError> {
        let handle = self.collections.resolve_collection(collection)?;
        let mut record = handle
            .query()
            .await
            .by_id(id)
            .await?
            .ok_or_else(|| EntityError::not_found(handle.name(), id))?;
        self.hydrate(&mut record, joins).await?;
        Ok(record)
    }

    /// Query a collection and hydrate the requested join paths on each row
    pub async fn by_filter(
        &self,
        collection: &str,
        query: DocumentQuery,
        joins: &[String],
    ) -> Result<Vec<Record>, EntityError> {
        let handle = self.collections.resolve_collection(collection)?;
        let mut records = handle.query().await.with_options(query).all().await?;
        for record in &mut records {
            self.hydrate(record, joins).await?;
        }
        Ok(records)
    }

    pub async fn count(&self, collection: &str) -> Result<u64, EntityError> {
        let handle = self.collections.resolve_collection(collection)?;
        handle.query().await.count().await
    }

    /// Resolve one join path on a record already in hand
    pub async fn join_fields(
        &self,
        record: &mut Record,
        path: &str,
        ctx: &QueryContext,
        budget: usize,
    ) -> Result<(), EntityError> {
        self.resolver
            .join_fields(record, path, ctx, budget)
            .await
            .map_err(EntityError::from)
    }

    async fn hydrate(&self, record: &mut Record, joins: &[String]) -> Result<(), EntityError> {
        for path in joins.iter().map(|p| p.trim()).filter(|p| !p.is_empty()) {
            self.join_fields(record, path, &self.context, self.recursion_budget)
                .await?;
        }
        if self.context.render_views {
            record.as_joinable_mut().render_view_fields(Utc::now());
        }
        Ok(())
    }

    // ===== Writes =====

    /// Decode, validate and persist a JSON document
    pub async fn save(&self, collection: &str, document: Value) -> Result<Record, EntityError> {
        let handle = self.collections.resolve_collection(collection)?;
        let mut record = handle.decode(document)?;
        self.save_record(&mut record).await?;
        Ok(record)
    }

    /// Validate and persist a typed record; validation failures are left in
    /// the record's `Errors` sidecar
    pub async fn save_record(&self, record: &mut Record) -> Result<(), EntityError> {
        validate_and_clean(record)?;
        let handle = self.collections.resolve_collection(record.collection())?;
        handle.save(record).await?;
        tracing::debug!(collection = handle.name(), id = %record.id(), "record saved");
        Ok(())
    }

    pub async fn delete(&self, collection: &str, id: &str) -> Result<(), EntityError> {
        let handle = self.collections.resolve_collection(collection)?;
        if handle.delete(id).await? {
            tracing::debug!(collection = handle.name(), id, "record deleted");
            Ok(())
        } else {
            Err(EntityError::not_found(handle.name(), id))
        }
    }
}
