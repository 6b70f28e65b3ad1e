//! Module declaration and lifecycle: init, migrate, serve, REST registration

use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::EntityApi;
use crate::domain::bootstrap::{
    BootstrapReport, BootstrapSettings, Bootstrapper, DumpImporter, ManifestCache,
    MongoImportCommand, NoopImporter,
};
use crate::domain::cache::RecordCache;
use crate::domain::collection::Collections;
use crate::domain::join::QueryContext;
use crate::domain::registry::EntityRegistry;
use crate::domain::repository::DocumentStore;
use crate::domain::transaction::TransactionQueue;
use crate::domain::Service;
use crate::infra::storage::{InMemoryDocumentStore, SeaOrmDocumentStore};

/// Everything built by `init`
struct Runtime {
    service: Arc<Service>,
    bootstrapper: Arc<Bootstrapper>,
    db: Option<Arc<DatabaseConnection>>,
}

/// Entity service module
pub struct EntityServiceModule {
    config: RwLock<Config>,
    runtime: RwLock<Option<Arc<Runtime>>>,
}

impl Default for EntityServiceModule {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl EntityServiceModule {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            runtime: RwLock::new(None),
        }
    }

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    /// Connect storage and build the domain service
    pub async fn init(&self) -> Result<()> {
        let cfg = self.config();
        let db = match &cfg.database_url {
            Some(url) => {
                let conn = sea_orm::Database::connect(url.as_str())
                    .await
                    .with_context(|| format!("failed to connect to {url}"))?;
                Some(Arc::new(conn))
            }
            None => None,
        };
        let store: Arc<dyn DocumentStore> = match &db {
            Some(conn) => Arc::new(SeaOrmDocumentStore::new(conn.clone())),
            None => Arc::new(InMemoryDocumentStore::new()),
        };
        self.init_with(store, EntityRegistry::with_defaults(), db);
        Ok(())
    }

    /// Build the domain service over an explicit store and registry
    pub fn init_with(
        &self,
        store: Arc<dyn DocumentStore>,
        registry: EntityRegistry,
        db: Option<Arc<DatabaseConnection>>,
    ) {
        let cfg = self.config();
        let collections = Arc::new(Collections::new(
            Arc::new(registry),
            store,
            Arc::new(RecordCache::new()),
            cfg.ready_log_interval,
        ));
        let transactions = Arc::new(TransactionQueue::new(
            collections.clone(),
            cfg.transaction_max_age,
        ));
        let context = QueryContext::new()
            .with_views(true)
            .with_query_logging(cfg.log_join_queries);
        let service = Arc::new(Service::new(
            collections,
            transactions,
            context,
            cfg.join_recursion_budget,
        ));

        let importer: Arc<dyn DumpImporter> = if cfg.dump_import.enabled {
            Arc::new(MongoImportCommand::new(
                cfg.dump_import.program.clone(),
                cfg.dump_import.database.clone(),
                cfg.app_location.clone(),
            ))
        } else {
            Arc::new(NoopImporter)
        };
        let bootstrapper = Arc::new(Bootstrapper::new(
            BootstrapSettings::from_config(&cfg),
            Arc::new(ManifestCache::new(cfg.cache_dir.clone())),
            importer,
        ));

        *self.runtime.write() = Some(Arc::new(Runtime {
            service,
            bootstrapper,
            db,
        }));
        tracing::info!(
            bootstrap = cfg.bootstrap_data,
            product = %cfg.product_name,
            "Entity service initialized"
        );
    }

    fn runtime(&self) -> Result<Arc<Runtime>> {
        self.runtime
            .read()
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    pub fn service(&self) -> Result<Arc<Service>> {
        Ok(self.runtime()?.service.clone())
    }

    /// In-process client for other modules
    pub fn client(&self) -> Result<Arc<dyn EntityApi>> {
        Ok(Arc::new(NativeClient::new(self.service()?)))
    }

    /// Create the documents table when backed by a database
    pub async fn migrate(&self) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        let Some(db) = self.runtime()?.db.clone() else {
            return Ok(());
        };
        Migrator::up(db.as_ref(), None).await?;
        tracing::info!("Entity service migrations completed");
        Ok(())
    }

    /// Start one bootstrap task per collection
    pub fn start_bootstrap(&self, cancel: &CancellationToken) -> Result<JoinSet<BootstrapReport>> {
        let runtime = self.runtime()?;
        Ok(runtime
            .bootstrapper
            .spawn_all(runtime.service.collections(), cancel))
    }

    /// Run bootstraps and the transaction sweeper until cancelled
    pub async fn serve(self: Arc<Self>, cancel: CancellationToken) -> Result<()> {
        let cfg = self.config();
        let runtime = self.runtime()?;
        let sweeper = runtime
            .service
            .transactions()
            .spawn_sweeper(cfg.transaction_sweep_interval, cancel.clone());

        let mut bootstraps = self.start_bootstrap(&cancel)?;
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                joined = bootstraps.join_next() => match joined {
                    Some(Ok(report)) => tracing::debug!(
                        collection = %report.collection,
                        outcome = ?report.outcome,
                        applied = report.applied,
                        "bootstrap report"
                    ),
                    Some(Err(e)) => tracing::error!(error = %e, "bootstrap task failed"),
                    None => {
                        tracing::info!("all collections bootstrapped");
                        cancel.cancelled().await;
                        break;
                    }
                },
            }
        }

        bootstraps.shutdown().await;
        // Aborted bootstraps never open their gates; release waiting readers
        runtime.service.collections().mark_all_ready();
        if let Err(e) = sweeper.await {
            tracing::warn!(error = %e, "transaction sweeper ended abnormally");
        }
        Ok(())
    }

    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;
        tracing::info!("Registering entity service REST routes");
        Ok(crate::api::rest::routes::register_routes(router, service))
    }
}
