//! Collection handles and the query builder
//!
//! Every read goes through [`Collection::query`], which waits for the
//! collection's bootstrap to finish. Writes stamp timestamps, assign ids
//! and invalidate the read-through cache.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::Value;

use super::cache::RecordCache;
use super::join::Projection;
use super::readiness::ReadyGate;
use super::registry::{EntityRegistry, Registration};
use super::repository::{DocumentQuery, DocumentStore};
use crate::contract::{Entity, EntityError, Record, RecordVariant};

/// 24 hex characters: big-endian seconds followed by random bytes
pub fn new_object_id() -> String {
    let secs = Utc::now().timestamp() as u32;
    let tail: [u8; 8] = rand::random();
    let mut bytes = [0u8; 12];
    bytes[..4].copy_from_slice(&secs.to_be_bytes());
    bytes[4..].copy_from_slice(&tail);
    hex::encode(bytes)
}

fn storage_error(err: anyhow::Error) -> EntityError {
    EntityError::Storage(format!("{err:#}"))
}

pub struct Collection {
    registration: Registration,
    store: Arc<dyn DocumentStore>,
    cache: Arc<RecordCache>,
    gate: ReadyGate,
}

impl Collection {
    pub fn new(
        registration: Registration,
        store: Arc<dyn DocumentStore>,
        cache: Arc<RecordCache>,
        ready_log_interval: Duration,
    ) -> Self {
        let gate = ReadyGate::new(registration.collection, ready_log_interval);
        Self {
            registration,
            store,
            cache,
            gate,
        }
    }

    pub fn name(&self) -> &'static str {
        self.registration.collection
    }

    pub fn registration(&self) -> &Registration {
        &self.registration
    }

    pub fn gate(&self) -> &ReadyGate {
        &self.gate
    }

    pub fn is_ready(&self) -> bool {
        self.gate.is_ready()
    }

    /// Query builder, available once the collection is ready
    pub async fn query(&self) -> Query<'_> {
        self.gate.wait().await;
        Query::new(self)
    }

    /// Query builder that skips the ready gate; only bootstrap may use it
    pub(crate) fn query_unchecked(&self) -> Query<'_> {
        Query::new(self)
    }

    pub fn decode(&self, document: Value) -> Result<Record, EntityError> {
        self.registration.decode(document)
    }

    /// Persist a record: assigns an id when absent, stamps `CreateDate`
    /// (first save only) and `UpdateDate`
    pub async fn save(&self, record: &mut Record) -> Result<(), EntityError> {
        if record.collection() != self.name() {
            return Err(EntityError::UnknownEntity(format!(
                "{} cannot be stored in {}",
                record.type_name(),
                self.name()
            )));
        }

        let now = Utc::now();
        let header = record.header_mut();
        if header.id.is_empty() {
            header.id = new_object_id();
        }
        if header.create_date.is_none() {
            header.create_date = Some(now);
        }
        header.update_date = Some(now);

        let document = record.to_document().map_err(|e| EntityError::Decode {
            collection: self.name().to_string(),
            message: e.to_string(),
        })?;
        let id = record.id().to_string();

        // Invalidated on both sides of the write so a read that raced it
        // cannot repopulate the cache with the old document
        self.cache.invalidate(self.name(), &id);
        let result = self.store.put(self.name(), &id, document).await;
        self.cache.invalidate(self.name(), &id);
        result.map_err(storage_error)
    }

    /// Remove a record by id; returns whether it existed
    pub async fn delete(&self, id: &str) -> Result<bool, EntityError> {
        self.cache.invalidate(self.name(), id);
        let result = self.store.remove(self.name(), id).await;
        self.cache.invalidate(self.name(), id);
        result.map_err(storage_error)
    }
}

impl std::fmt::Debug for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("name", &self.name())
            .field("ready", &self.is_ready())
            .finish()
    }
}

/// Query under construction against one collection
pub struct Query<'a> {
    collection: &'a Collection,
    options: DocumentQuery,
    projection: Option<Projection>,
}

impl<'a> Query<'a> {
    fn new(collection: &'a Collection) -> Self {
        Self {
            collection,
            options: DocumentQuery::default(),
            projection: None,
        }
    }

    pub fn filter(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options = self.options.eq(field, value);
        self
    }

    pub fn in_(mut self, field: impl Into<String>, values: Vec<Value>) -> Self {
        self.options = self.options.one_of(field, values);
        self
    }

    pub fn exclude(mut self, field: impl Into<String>, values: Vec<Value>) -> Self {
        self.options = self.options.excluding(field, values);
        self
    }

    pub fn range(
        mut self,
        field: impl Into<String>,
        min: Option<Value>,
        max: Option<Value>,
    ) -> Self {
        self.options = self.options.between(field, min, max);
        self
    }

    pub fn sort(mut self, field: impl Into<String>, descending: bool) -> Self {
        self.options = self.options.sort_by(field, descending);
        self
    }

    pub fn skip(mut self, skip: usize) -> Self {
        self.options = self.options.skip(skip);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.options = self.options.limit(limit);
        self
    }

    /// Replace all filter and paging options at once
    pub fn with_options(mut self, options: DocumentQuery) -> Self {
        self.options = options;
        self
    }

    pub fn project(mut self, projection: Projection) -> Self {
        self.projection = Some(projection);
        self
    }

    pub async fn all(self) -> Result<Vec<Record>, EntityError> {
        let name = self.collection.name();
        let documents = self
            .collection
            .store
            .find(name, &self.options)
            .await
            .map_err(storage_error)?;
        documents
            .into_iter()
            .map(|document| self.materialize(document))
            .collect()
    }

    pub async fn one(self) -> Result<Option<Record>, EntityError> {
        let mut rows = self.limit(1).all().await?;
        Ok(rows.pop())
    }

    /// Fetch by primary id, served from the read-through cache when possible
    pub async fn by_id(self, id: &str) -> Result<Option<Record>, EntityError> {
        let name = self.collection.name();
        let document = match self.collection.cache.get(name, id) {
            Some(document) => Some(document),
            None => {
                let generation = self.collection.cache.generation(name, id);
                let fetched = self
                    .collection
                    .store
                    .get(name, id)
                    .await
                    .map_err(storage_error)?;
                if let Some(document) = &fetched {
                    self.collection
                        .cache
                        .fill(name, id, generation, document.clone());
                }
                fetched
            }
        };
        document.map(|d| self.materialize(d)).transpose()
    }

    pub async fn count(self) -> Result<u64, EntityError> {
        self.collection
            .store
            .count(self.collection.name(), &self.options)
            .await
            .map_err(storage_error)
    }

    pub async fn all_as<T: Entity>(self) -> Result<Vec<T>, EntityError> {
        let name = self.collection.name();
        self.all()
            .await?
            .into_iter()
            .map(|record| typed(name, record))
            .collect()
    }

    pub async fn one_as<T: Entity>(self) -> Result<Option<T>, EntityError> {
        let name = self.collection.name();
        self.one().await?.map(|record| typed(name, record)).transpose()
    }

    pub async fn by_id_as<T: Entity>(self, id: &str) -> Result<Option<T>, EntityError> {
        let name = self.collection.name();
        self.by_id(id)
            .await?
            .map(|record| typed(name, record))
            .transpose()
    }

    fn materialize(&self, mut document: Value) -> Result<Record, EntityError> {
        if let Some(projection) = &self.projection {
            projection.apply(&mut document);
        }
        self.collection.decode(document)
    }
}

fn typed<T: Entity>(collection: &str, record: Record) -> Result<T, EntityError> {
    let found = record.type_name();
    T::from_record(record).ok_or_else(|| EntityError::Decode {
        collection: collection.to_string(),
        message: format!("expected {} but found {}", T::TYPE_NAME, found),
    })
}

/// All collection handles, resolvable by name
pub struct Collections {
    registry: Arc<EntityRegistry>,
    by_name: BTreeMap<&'static str, Arc<Collection>>,
}

impl Collections {
    pub fn new(
        registry: Arc<EntityRegistry>,
        store: Arc<dyn DocumentStore>,
        cache: Arc<RecordCache>,
        ready_log_interval: Duration,
    ) -> Self {
        let by_name = registry
            .iter()
            .map(|registration| {
                let collection = Collection::new(
                    registration.clone(),
                    store.clone(),
                    cache.clone(),
                    ready_log_interval,
                );
                (registration.collection, Arc::new(collection))
            })
            .collect();
        Self { registry, by_name }
    }

    pub fn registry(&self) -> &Arc<EntityRegistry> {
        &self.registry
    }

    pub fn resolve_collection(&self, name: &str) -> Result<Arc<Collection>, EntityError> {
        self.by_name
            .get(name)
            .cloned()
            .ok_or_else(|| EntityError::UnknownCollection(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Collection>> {
        self.by_name.values()
    }

    /// Open every gate without seeding
    pub fn mark_all_ready(&self) {
        for collection in self.by_name.values() {
            collection.gate().mark_ready();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_object_id_shape() {
        let a = new_object_id();
        let b = new_object_id();
        assert_eq!(a.len(), 24);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
