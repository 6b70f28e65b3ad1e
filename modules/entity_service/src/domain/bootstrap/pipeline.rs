use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use base64::Engine;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use super::dump::DumpImporter;
use super::gates::DeploymentScope;
use super::manifest::{content_hash, ManifestCache};
use super::source::read_seed_directory;
use super::{
    BootstrapError, BootstrapOutcome, BootstrapReport, RecordFailure, RejectedRecord,
};
use crate::config::Config;
use crate::contract::Record;
use crate::domain::collection::{new_object_id, Collection, Collections};

#[derive(Debug, Clone)]
pub struct BootstrapSettings {
    pub enabled: bool,
    pub scope: DeploymentScope,
    pub app_location: PathBuf,
    /// Pause before seeding starts
    pub delay: Duration,
}

impl BootstrapSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            enabled: config.bootstrap_data,
            scope: DeploymentScope::from_config(config),
            app_location: config.app_location.clone(),
            delay: config.bootstrap_delay,
        }
    }
}

pub struct Bootstrapper {
    settings: BootstrapSettings,
    manifest: Arc<ManifestCache>,
    importer: Arc<dyn DumpImporter>,
}

impl Bootstrapper {
    pub fn new(
        settings: BootstrapSettings,
        manifest: Arc<ManifestCache>,
        importer: Arc<dyn DumpImporter>,
    ) -> Self {
        Self {
            settings,
            manifest,
            importer,
        }
    }

    /// Start one bootstrap task per collection
    pub fn spawn_all(
        self: &Arc<Self>,
        collections: &Collections,
        cancel: &CancellationToken,
    ) -> JoinSet<BootstrapReport> {
        let mut tasks = JoinSet::new();
        for collection in collections.iter() {
            let this = Arc::clone(self);
            let collection = Arc::clone(collection);
            let cancel = cancel.clone();
            tasks.spawn(async move { this.run(&collection, &cancel).await });
        }
        tasks
    }

    /// Seed one collection, then mark it ready
    pub async fn run(&self, collection: &Collection, cancel: &CancellationToken) -> BootstrapReport {
        let started = Instant::now();
        let report = self.seed(collection, cancel).await;
        collection.gate().mark_ready();

        match &report.outcome {
            BootstrapOutcome::Completed => tracing::info!(
                collection = collection.name(),
                applied = report.applied,
                elapsed = ?started.elapsed(),
                "bootstrap finished"
            ),
            BootstrapOutcome::Disabled => {}
            outcome => tracing::warn!(
                collection = collection.name(),
                outcome = ?outcome,
                elapsed = ?started.elapsed(),
                "bootstrap finished with problems"
            ),
        }
        report
    }

    async fn seed(&self, collection: &Collection, cancel: &CancellationToken) -> BootstrapReport {
        let name = collection.name();
        if !self.settings.enabled {
            return BootstrapReport::new(name, BootstrapOutcome::Disabled);
        }

        if !self.settings.delay.is_zero() {
            tokio::select! {
                _ = tokio::time::sleep(self.settings.delay) => {}
                _ = cancel.cancelled() => {
                    return BootstrapReport::new(name, abort(BootstrapError::Cancelled));
                }
            }
        }

        let mut report = BootstrapReport::new(name, BootstrapOutcome::Completed);

        // Unknown size is treated as populated so hashes are honoured
        let count = match collection.query_unchecked().count().await {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(collection = name, error = %e, "failed to count collection");
                1
            }
        };

        let cache_key = format!("{}{}", self.settings.scope.product_name, name);
        if let Err(e) = self.manifest.load_hashes(&cache_key).await {
            tracing::error!(collection = name, error = %e, "failed to bootstrap data due to caching issue");
            report.outcome = abort(e);
            return report;
        }

        let registration = collection.registration();
        let dir_name = registration.seed_dir_name();
        let scan = match read_seed_directory(
            &self.settings.app_location,
            &dir_name,
            count,
            &self.manifest,
            cancel,
        )
        .await
        {
            Ok(scan) => scan,
            Err(e) => {
                tracing::error!(collection = name, error = %e, "failed to read seed directory");
                report.outcome = abort(e);
                return report;
            }
        };
        report.directory_found = scan.found;

        let mut payloads: Vec<Vec<u8>> = scan.payloads.into_iter().map(|f| f.bytes).collect();
        let embedded = registration.seed_payload();
        if !embedded.is_empty() {
            match base64::engine::general_purpose::STANDARD.decode(embedded) {
                Ok(bytes) => payloads.push(bytes),
                Err(e) => {
                    let err = BootstrapError::PayloadEncoding {
                        collection: name.to_string(),
                        message: e.to_string(),
                    };
                    tracing::error!(collection = name, error = %err, "embedded seed payload unusable");
                    report.outcome = abort(err);
                    return report;
                }
            }
        }

        let mut candidates: Vec<Record> = Vec::new();
        for payload in &payloads {
            let hash = content_hash(payload);
            if count > 0 && self.manifest.has_hash(&cache_key, &hash) {
                report.skipped_payloads += 1;
                continue;
            }
            match registration.decode_seed(payload) {
                Ok(rows) => {
                    self.manifest.record_hash(&cache_key, &hash);
                    candidates.extend(rows);
                }
                Err(e) => {
                    tracing::error!(collection = name, error = %e, "seed payload is not a valid record array");
                    report.invalid_payloads += 1;
                }
            }
        }
        if let Err(e) = self.manifest.persist_hashes(&cache_key).await {
            tracing::warn!(collection = name, error = %e, "failed to persist bootstrap hashes");
        }

        report.candidates = candidates.len();
        for record in candidates {
            self.apply(collection, record, &mut report).await;
        }

        if !report.failures.is_empty() {
            tracing::error!(
                collection = name,
                failures = report.failures.len(),
                "FAILED to bootstrap collection"
            );
            report.outcome = BootstrapOutcome::CompletedWithFailures;
            return report;
        }

        if !report.directory_found {
            match self.importer.import(&dir_name, name).await {
                Ok(imported) => report.dump_imported = imported,
                Err(e) => {
                    tracing::warn!(collection = name, error = %e, "collection dump import failed");
                    return report;
                }
            }
        }

        tracing::info!(collection = name, "successfully bootstrapped collection");
        if report.accepted() != report.candidates {
            tracing::warn!(
                collection = name,
                candidates = report.candidates,
                accepted = report.accepted(),
                "bootstrap record count mismatch"
            );
        }
        report
    }

    async fn apply(&self, collection: &Collection, mut record: Record, report: &mut BootstrapReport) {
        if record.id().is_empty() {
            record.header_mut().id = new_object_id();
        }
        let id = record.id().to_string();

        let exists = match collection.query_unchecked().by_id(&id).await {
            Ok(found) => found.is_some(),
            Err(e) => {
                tracing::debug!(collection = collection.name(), id = %id, error = %e, "lookup failed, treating as absent");
                false
            }
        };
        let meta = record.header().bootstrap_meta.clone().unwrap_or_default();

        if exists && !meta.always_update {
            report.already_present += 1;
            return;
        }

        if meta.delete_row {
            match collection.delete(&id).await {
                Ok(true) => report.deleted += 1,
                Ok(false) => {
                    tracing::debug!(collection = collection.name(), id = %id, "row to delete was not present");
                }
                Err(e) => report.failures.push(RecordFailure {
                    id,
                    message: e.to_string(),
                }),
            }
            return;
        }

        let reasons = self
            .settings
            .scope
            .evaluate(record.header().bootstrap_meta.as_ref());
        if !reasons.is_empty() {
            let reasons: Vec<String> = reasons.iter().map(ToString::to_string).collect();
            if self.settings.scope.is_development() {
                tracing::info!(
                    collection = collection.name(),
                    id = %id,
                    reasons = ?reasons,
                    "seed record rejected"
                );
            }
            report.rejected.push(RejectedRecord { id, reasons });
            return;
        }

        match collection.save(&mut record).await {
            Ok(()) => report.applied += 1,
            Err(e) => {
                tracing::error!(collection = collection.name(), id = %id, error = %e, "failed to save seed record");
                report.failures.push(RecordFailure {
                    id,
                    message: e.to_string(),
                });
            }
        }
    }
}

fn abort(err: BootstrapError) -> BootstrapOutcome {
    BootstrapOutcome::Aborted(err.to_string())
}
