//! Idempotent seeding of collections at start-up.
//!
//! Each collection runs its own [`Bootstrapper::run`] in the background
//! and opens its ready gate when done, whatever the outcome.

mod dump;
mod gates;
mod manifest;
mod pipeline;
mod source;

use std::path::PathBuf;

use serde::Serialize;

pub use dump::{dump_path, DumpImporter, MongoImportCommand, NoopImporter};
pub use gates::{DeploymentScope, RejectReason, DEVELOPMENT_MODE};
pub use manifest::{content_hash, ManifestCache};
pub use pipeline::{BootstrapSettings, Bootstrapper};
pub use source::{read_seed_directory, seed_dir, DirectoryScan, SeedFile};

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("failed to read bootstrap cache {path}: {source}")]
    CacheRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("bootstrap cache {path} is corrupt: {source}")]
    CacheFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write bootstrap cache {path}: {source}")]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk seed directory {path}: {message}")]
    Walk { path: PathBuf, message: String },

    #[error("embedded seed payload for {collection} is not valid base64: {message}")]
    PayloadEncoding { collection: String, message: String },

    #[error("dump import for {collection} failed: {message}")]
    Import { collection: String, message: String },

    #[error("bootstrap cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BootstrapOutcome {
    /// Seeding is switched off; the collection was only marked ready
    Disabled,
    Completed,
    /// Some records failed to save or delete
    CompletedWithFailures,
    /// Stopped before applying records
    Aborted(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRecord {
    pub id: String,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordFailure {
    pub id: String,
    pub message: String,
}

/// What a bootstrap run did to one collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootstrapReport {
    pub collection: String,
    pub outcome: BootstrapOutcome,
    /// Records decoded from payloads not applied before
    pub candidates: usize,
    /// Records written
    pub applied: usize,
    /// Records left alone because they already exist
    pub already_present: usize,
    pub deleted: usize,
    pub rejected: Vec<RejectedRecord>,
    pub failures: Vec<RecordFailure>,
    /// Payloads skipped because their hash was already applied
    pub skipped_payloads: usize,
    /// Payloads that did not decode as an array of records
    pub invalid_payloads: usize,
    pub directory_found: bool,
    pub dump_imported: bool,
}

impl BootstrapReport {
    pub fn new(collection: impl Into<String>, outcome: BootstrapOutcome) -> Self {
        Self {
            collection: collection.into(),
            outcome,
            candidates: 0,
            applied: 0,
            already_present: 0,
            deleted: 0,
            rejected: Vec::new(),
            failures: Vec::new(),
            skipped_payloads: 0,
            invalid_payloads: 0,
            directory_found: false,
            dump_imported: false,
        }
    }

    /// Records accounted for as present after the run
    pub fn accepted(&self) -> usize {
        self.applied + self.already_present
    }
}
