//! SeaORM document store
//!
//! Documents live in a single table keyed by (collection, id). Equality and
//! in-list filters on `Id` become SQL conditions on the key column; every
//! other filter, sort and page is evaluated on the decoded JSON, so those
//! queries scan the whole collection.

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde_json::Value;
use std::sync::Arc;

use super::entity;
use crate::domain::repository::{DocumentQuery, DocumentStore};

pub struct SeaOrmDocumentStore {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmDocumentStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load(&self, collection: &str, query: &DocumentQuery) -> Result<Vec<Value>> {
        let mut select = entity::Entity::find().filter(entity::Column::Collection.eq(collection));
        if let Some(ids) = key_restriction(query) {
            select = select.filter(entity::Column::Id.is_in(ids));
        }
        let rows = select
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?;
        Ok(rows.into_iter().map(|row| row.body).collect())
    }
}

/// Ids a query can match, when its `Id` filters pin them down
fn key_restriction(query: &DocumentQuery) -> Option<Vec<&str>> {
    let listed = query
        .in_filter
        .get("Id")
        .map(|values| values.iter().filter_map(Value::as_str).collect::<Vec<_>>());
    match query.filter.get("Id") {
        Some(Value::String(id)) => Some(match listed {
            Some(listed) if !listed.contains(&id.as_str()) => Vec::new(),
            _ => vec![id.as_str()],
        }),
        // Stored ids are strings
        Some(_) => Some(Vec::new()),
        None => listed,
    }
}

#[async_trait]
impl DocumentStore for SeaOrmDocumentStore {
    async fn find(&self, collection: &str, query: &DocumentQuery) -> Result<Vec<Value>> {
        Ok(query.apply(self.load(collection, query).await?))
    }

    async fn count(&self, collection: &str, query: &DocumentQuery) -> Result<u64> {
        let documents = self.load(collection, query).await?;
        Ok(documents.iter().filter(|d| query.matches(d)).count() as u64)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let row = entity::Entity::find_by_id((collection.to_string(), id.to_string()))
            .one(&*self.db)
            .await?;
        Ok(row.map(|row| row.body))
    }

    async fn put(&self, collection: &str, id: &str, document: Value) -> Result<()> {
        use sea_orm::ActiveValue::Set;

        let now = chrono::Utc::now();
        let existing = entity::Entity::find_by_id((collection.to_string(), id.to_string()))
            .one(&*self.db)
            .await?;

        match existing {
            Some(row) => {
                let mut active: entity::ActiveModel = row.into();
                active.body = Set(document);
                active.updated_at = Set(now);
                entity::Entity::update(active).exec(&*self.db).await?;
            }
            None => {
                let active = entity::ActiveModel {
                    collection: Set(collection.to_string()),
                    id: Set(id.to_string()),
                    body: Set(document),
                    created_at: Set(now),
                    updated_at: Set(now),
                };
                entity::Entity::insert(active).exec(&*self.db).await?;
            }
        }
        Ok(())
    }

    async fn remove(&self, collection: &str, id: &str) -> Result<bool> {
        let result = entity::Entity::delete_by_id((collection.to_string(), id.to_string()))
            .exec(&*self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
