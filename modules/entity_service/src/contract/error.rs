//! Contract error types for the entity service
//!
//! These errors are transport-agnostic; the REST layer maps them to
//! Problem Details.

use std::collections::BTreeMap;

/// Failure while hydrating a declared relation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JoinError {
    #[error("collection not found: {0}")]
    UnknownCollection(String),

    #[error("schema not found: {0}")]
    UnknownSchema(String),

    #[error("malformed relation tag on {relation}: {tag:?}")]
    MalformedTag { relation: String, tag: String },

    #[error("unexpected container type for relation {relation} (id {id})")]
    ContainerMismatch { relation: String, id: String },

    #[error("relation {relation} expected {expected} but fetched {found}")]
    SchemaMismatch {
        relation: String,
        expected: String,
        found: String,
    },

    #[error("query for relation {relation} (id {id}) failed: {message}")]
    Query {
        relation: String,
        id: String,
        message: String,
    },

    #[error("could not decode {relation} (id {id}): {message}")]
    Decode {
        relation: String,
        id: String,
        message: String,
    },
}

/// Entity service domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityError {
    #[error("{collection} not found: {id}")]
    NotFound { collection: String, id: String },

    #[error("unknown collection: {0}")]
    UnknownCollection(String),

    #[error("unknown entity type: {0}")]
    UnknownEntity(String),

    /// Field-level messages mirror the record's `Errors` sidecar
    #[error("ValidationError")]
    Validation { fields: BTreeMap<String, String> },

    #[error(transparent)]
    Join(#[from] JoinError),

    #[error("could not decode {collection} document: {message}")]
    Decode { collection: String, message: String },

    #[error("storage error: {0}")]
    Storage(String),

    #[error("transaction not found: {0}")]
    TransactionNotFound(String),
}

impl EntityError {
    pub fn not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            collection: collection.into(),
            id: id.into(),
        }
    }

    pub fn storage(err: impl std::fmt::Display) -> Self {
        Self::Storage(err.to_string())
    }

    /// Distinguishes validation failures from every other failure
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
