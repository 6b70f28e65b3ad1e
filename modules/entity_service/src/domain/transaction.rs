//! Batches of entity writes that can be rolled back as one unit
//!
//! Staged writes are applied immediately; the queue keeps the snapshot each
//! row had before the transaction touched it. Rolling back restores those
//! snapshots and deletes rows the transaction inserted. Transactions that
//! are never committed or rolled back are purged after the maximum age.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::collection::Collections;
use crate::contract::{EntityError, Record};

#[derive(Debug, Clone)]
struct StagedChange {
    collection: &'static str,
    id: String,
    /// Row as stored before the transaction first touched it
    original: Option<Record>,
    current: Record,
}

#[derive(Debug)]
struct PendingTransaction {
    started: DateTime<Utc>,
    changes: Vec<StagedChange>,
}

pub struct TransactionQueue {
    collections: Arc<Collections>,
    pending: Mutex<HashMap<Uuid, PendingTransaction>>,
    max_age: TimeDelta,
}

impl TransactionQueue {
    pub fn new(collections: Arc<Collections>, max_age: Duration) -> Self {
        Self {
            collections,
            pending: Mutex::new(HashMap::new()),
            max_age: TimeDelta::from_std(max_age).unwrap_or(TimeDelta::MAX),
        }
    }

    pub fn begin(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.pending.lock().insert(
            id,
            PendingTransaction {
                started: Utc::now(),
                changes: Vec::new(),
            },
        );
        tracing::debug!(transaction = %id, "transaction started");
        id
    }

    /// Number of open transactions
    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }

    /// Number of distinct rows staged in a transaction
    pub fn staged(&self, transaction: Uuid) -> Option<usize> {
        self.pending
            .lock()
            .get(&transaction)
            .map(|pending| pending.changes.len())
    }

    fn ensure_open(&self, transaction: Uuid) -> Result<(), EntityError> {
        if self.pending.lock().contains_key(&transaction) {
            Ok(())
        } else {
            Err(EntityError::TransactionNotFound(transaction.to_string()))
        }
    }

    /// Write a record as part of a transaction.
    ///
    /// Staging the same row twice keeps the first snapshot and replaces the
    /// staged value.
    pub async fn stage(&self, transaction: Uuid, mut record: Record) -> Result<Record, EntityError> {
        self.ensure_open(transaction)?;
        let collection = self.collections.resolve_collection(record.collection())?;

        let original = if record.id().is_empty() {
            None
        } else {
            collection.query().await.by_id(record.id()).await?
        };
        collection.save(&mut record).await?;

        let mut pending = self.pending.lock();
        let entry = pending
            .get_mut(&transaction)
            .ok_or_else(|| EntityError::TransactionNotFound(transaction.to_string()))?;
        let id = record.id().to_string();
        match entry
            .changes
            .iter_mut()
            .find(|change| change.collection == collection.name() && change.id == id)
        {
            Some(existing) => existing.current = record.clone(),
            None => entry.changes.push(StagedChange {
                collection: collection.name(),
                id,
                original,
                current: record.clone(),
            }),
        }
        Ok(record)
    }

    /// Keep every staged write; returns the staged records
    pub fn commit(&self, transaction: Uuid) -> Result<Vec<Record>, EntityError> {
        let pending = self
            .pending
            .lock()
            .remove(&transaction)
            .ok_or_else(|| EntityError::TransactionNotFound(transaction.to_string()))?;
        tracing::debug!(transaction = %transaction, changes = pending.changes.len(), "transaction committed");
        Ok(pending
            .changes
            .into_iter()
            .map(|change| change.current)
            .collect())
    }

    /// Undo every staged write, newest first. All changes are attempted;
    /// the first failure is returned.
    pub async fn rollback(&self, transaction: Uuid) -> Result<usize, EntityError> {
        let pending = self
            .pending
            .lock()
            .remove(&transaction)
            .ok_or_else(|| EntityError::TransactionNotFound(transaction.to_string()))?;

        let total = pending.changes.len();
        let mut first_error = None;
        for change in pending.changes.into_iter().rev() {
            let result = self.revert(change).await;
            if let Err(e) = result {
                tracing::error!(transaction = %transaction, error = %e, "failed to revert staged change");
                first_error.get_or_insert(e);
            }
        }
        tracing::info!(transaction = %transaction, changes = total, "transaction rolled back");
        match first_error {
            Some(e) => Err(e),
            None => Ok(total),
        }
    }

    async fn revert(&self, change: StagedChange) -> Result<(), EntityError> {
        let collection = self.collections.resolve_collection(change.collection)?;
        match change.original {
            Some(mut original) => collection.save(&mut original).await,
            None => collection.delete(&change.id).await.map(|_| ()),
        }
    }

    /// Drop transactions older than the maximum age; returns how many
    pub fn purge_stale(&self) -> usize {
        self.purge_stale_at(Utc::now())
    }

    pub fn purge_stale_at(&self, now: DateTime<Utc>) -> usize {
        let mut pending = self.pending.lock();
        let before = pending.len();
        pending.retain(|_, tx| now.signed_duration_since(tx.started) < self.max_age);
        let purged = before - pending.len();
        if purged > 0 {
            tracing::info!(purged, "purged stale transactions");
        }
        purged
    }

    /// Periodically purge stale transactions until cancelled
    pub fn spawn_sweeper(self: &Arc<Self>, every: Duration, cancel: CancellationToken) -> JoinHandle<()> {
        let queue = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every.max(Duration::from_millis(1)));
            // first tick fires immediately
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        queue.purge_stale();
                    }
                }
            }
            tracing::debug!("transaction sweeper stopped");
        })
    }
}
