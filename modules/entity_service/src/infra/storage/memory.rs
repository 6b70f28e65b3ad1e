//! Process-local document store

use std::collections::{BTreeMap, HashMap};

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;

use crate::domain::repository::{DocumentQuery, DocumentStore};

/// Documents held in memory, ordered by id within each collection
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Value>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of documents across collections
    pub fn len(&self) -> usize {
        self.collections.read().values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn find(&self, collection: &str, query: &DocumentQuery) -> Result<Vec<Value>> {
        let guard = self.collections.read();
        let Some(documents) = guard.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(query.apply(documents.values().cloned()))
    }

    async fn count(&self, collection: &str, query: &DocumentQuery) -> Result<u64> {
        let guard = self.collections.read();
        let count = guard
            .get(collection)
            .map(|documents| documents.values().filter(|d| query.matches(d)).count())
            .unwrap_or(0);
        Ok(count as u64)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        Ok(self
            .collections
            .read()
            .get(collection)
            .and_then(|documents| documents.get(id))
            .cloned())
    }

    async fn put(&self, collection: &str, id: &str, document: Value) -> Result<()> {
        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), document);
        Ok(())
    }

    async fn remove(&self, collection: &str, id: &str) -> Result<bool> {
        Ok(self
            .collections
            .write()
            .get_mut(collection)
            .is_some_and(|documents| documents.remove(id).is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_put_get_remove() {
        let store = InMemoryDocumentStore::new();
        store.put("Roles", "1", json!({"Id": "1"})).await.unwrap();
        assert_eq!(store.get("Roles", "1").await.unwrap(), Some(json!({"Id": "1"})));
        assert_eq!(store.get("Users", "1").await.unwrap(), None);

        assert!(store.remove("Roles", "1").await.unwrap());
        assert!(!store.remove("Roles", "1").await.unwrap());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_count_ignores_paging() {
        let store = InMemoryDocumentStore::new();
        for id in ["a", "b", "c"] {
            store
                .put("RoleFeatures", id, json!({"Id": id, "RoleId": "r1"}))
                .await
                .unwrap();
        }
        let query = DocumentQuery::new().eq("RoleId", "r1").limit(1);
        assert_eq!(store.count("RoleFeatures", &query).await.unwrap(), 3);
        assert_eq!(store.find("RoleFeatures", &query).await.unwrap().len(), 1);
    }
}
