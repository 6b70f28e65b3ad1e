use std::sync::Arc;

use chrono::Utc;
use futures::future::BoxFuture;

use crate::contract::{EntityError, JoinError, JoinItems, Joined, Record};
use crate::domain::collection::Collections;

use super::descriptor::{descriptors_for, JoinDescriptor};
use super::query::QueryContext;

/// Hydrates declared relations into the joins sidecar of a record.
///
/// The recursion budget is the number of relation levels that may be
/// filled below the record passed in; a budget of zero is a no-op. A
/// single-segment path never descends further, whatever the budget.
#[derive(Clone)]
pub struct JoinResolver {
    collections: Arc<Collections>,
}

enum Fetched {
    One(Record),
    Many(Vec<Record>),
}

fn first_error<I>(results: I) -> Result<(), JoinError>
where
    I: IntoIterator<Item = Result<(), JoinError>>,
{
    results.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}

impl JoinResolver {
    pub fn new(collections: Arc<Collections>) -> Self {
        Self { collections }
    }

    /// Resolve `path` on `record`.
    ///
    /// A failing branch leaves its slot untouched while sibling branches
    /// still resolve; the first error encountered is returned.
    pub fn join_fields<'a>(
        &'a self,
        record: &'a mut Record,
        path: &'a str,
        ctx: &'a QueryContext,
        budget: usize,
    ) -> BoxFuture<'a, Result<(), JoinError>> {
        Box::pin(async move {
            if budget == 0 {
                return Ok(());
            }
            let descriptors = descriptors_for(record.as_joinable(), path, ctx)?;

            let mut results = Vec::with_capacity(descriptors.len());
            for descriptor in descriptors {
                let end_recursion = path == descriptor.remaining_path;
                let result = self
                    .join_field(record, &descriptor, ctx, end_recursion, budget)
                    .await;
                if let Err(err) = &result {
                    tracing::debug!(
                        relation = descriptor.relation,
                        source = record.type_name(),
                        id = %record.id(),
                        error = %err,
                        "join failed"
                    );
                }
                results.push(result);
            }
            first_error(results)
        })
    }

    async fn join_field(
        &self,
        record: &mut Record,
        descriptor: &JoinDescriptor,
        ctx: &QueryContext,
        end_recursion: bool,
        budget: usize,
    ) -> Result<(), JoinError> {
        let collection = self
            .collections
            .resolve_collection(&descriptor.collection)
            .map_err(|_| JoinError::UnknownCollection(descriptor.collection.clone()))?;

        let registry = self.collections.registry();
        if registry.by_type(&descriptor.type_name).is_none() {
            return Err(JoinError::UnknownSchema(descriptor.type_name.clone()));
        }
        let target_type = collection.registration().type_name;
        if target_type != descriptor.type_name {
            return Err(JoinError::SchemaMismatch {
                relation: descriptor.relation.to_string(),
                expected: descriptor.type_name.clone(),
                found: target_type.to_string(),
            });
        }

        let id = record
            .as_joinable()
            .key_value(&descriptor.local_key)
            .ok_or_else(|| JoinError::MalformedTag {
                relation: descriptor.relation.to_string(),
                tag: format!("unknown local key {}", descriptor.local_key),
            })?
            .to_string();

        let descend = !end_recursion && budget > 1;

        // Slots already filled in this request are walked instead of refetched
        let slot = record
            .as_joinable_mut()
            .joins_mut()
            .get_mut(descriptor.relation);
        match (slot, descriptor.is_many) {
            (Some(Joined::One(existing)), false) => {
                if descend {
                    let path = &descriptor.remaining_path;
                    return self.join_fields(&mut **existing, path, ctx, budget - 1).await;
                }
                return Ok(());
            }
            (Some(Joined::Many(items)), true) if items.has_items() => {
                if !descend {
                    return Ok(());
                }
                let mut results = Vec::new();
                for item in items.items.iter_mut().flatten() {
                    results.push(
                        self.join_fields(item, &descriptor.remaining_path, ctx, budget - 1)
                            .await,
                    );
                }
                return first_error(results);
            }
            (Some(Joined::One(_)), true) | (Some(Joined::Many(_)), false) => {
                return Err(JoinError::ContainerMismatch {
                    relation: descriptor.relation.to_string(),
                    id,
                });
            }
            _ => {}
        }

        if id.is_empty() {
            return Ok(());
        }

        let query_error = |err: EntityError| match err {
            EntityError::Decode { message, .. } => JoinError::Decode {
                relation: descriptor.relation.to_string(),
                id: id.clone(),
                message,
            },
            other => JoinError::Query {
                relation: descriptor.relation.to_string(),
                id: id.clone(),
                message: other.to_string(),
            },
        };

        let mut query = collection.query().await;
        if let Some(projection) = &descriptor.projection {
            query = query.project(projection.clone());
        }

        if ctx.log_queries {
            tracing::debug!(
                relation = descriptor.relation,
                collection = %descriptor.collection,
                foreign_key = %descriptor.foreign_key,
                id = %id,
                many = descriptor.is_many,
                count_only = descriptor.is_count_only(),
                "join query"
            );
        }

        let mut fetched = if descriptor.is_many {
            let query = query.filter(descriptor.foreign_key.clone(), id.clone());
            if descriptor.is_count_only() {
                let count = query.count().await.map_err(query_error)?;
                record.as_joinable_mut().joins_mut().insert(
                    descriptor.relation,
                    Joined::Many(JoinItems::counted(count as usize)),
                );
                return Ok(());
            }
            Fetched::Many(query.all().await.map_err(query_error)?)
        } else if descriptor.foreign_key.is_empty() {
            match query.by_id(&id).await.map_err(query_error)? {
                Some(found) => Fetched::One(found),
                None => return Ok(()),
            }
        } else {
            let query = query.filter(descriptor.foreign_key.clone(), id.clone());
            match query.one().await.map_err(query_error)? {
                Some(found) => Fetched::One(found),
                None => return Ok(()),
            }
        };

        if descend {
            match &mut fetched {
                Fetched::One(found) => {
                    self.join_fields(found, &descriptor.remaining_path, ctx, budget - 1)
                        .await?;
                }
                Fetched::Many(items) => {
                    let mut results = Vec::with_capacity(items.len());
                    for item in items.iter_mut() {
                        results.push(
                            self.join_fields(item, &descriptor.remaining_path, ctx, budget - 1)
                                .await,
                        );
                    }
                    first_error(results)?;
                }
            }
        }

        let joined = match fetched {
            Fetched::One(mut found) => {
                if ctx.render_views {
                    found.as_joinable_mut().render_view_fields(Utc::now());
                }
                Joined::One(Box::new(found))
            }
            Fetched::Many(mut items) => {
                if ctx.render_views {
                    let now = Utc::now();
                    for item in &mut items {
                        item.as_joinable_mut().render_view_fields(now);
                    }
                }
                Joined::Many(JoinItems::from_items(items))
            }
        };
        record
            .as_joinable_mut()
            .joins_mut()
            .insert(descriptor.relation, joined);
        Ok(())
    }
}
