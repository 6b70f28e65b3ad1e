//! Configuration for the entity service module

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Entity service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Seed collections at start-up
    #[serde(default = "default_true")]
    pub bootstrap_data: bool,

    #[serde(default)]
    pub product_name: String,

    /// Matched against `Domain`/`Domains` in seed metadata
    #[serde(default)]
    pub server_fqdn: String,

    /// Running version; seed records gated on an older version are skipped
    #[serde(default)]
    pub version_numeric: i64,

    #[serde(default = "default_release_mode")]
    pub release_mode: String,

    /// Log every join query at debug level
    #[serde(default)]
    pub log_join_queries: bool,

    /// Root holding `db/bootstrap/<dir>/...`
    #[serde(default = "default_app_location")]
    pub app_location: PathBuf,

    /// Where bootstrap manifests are kept
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    #[serde(default = "default_join_recursion_budget")]
    pub join_recursion_budget: usize,

    #[serde(default = "default_ready_log_interval", with = "humantime_serde")]
    pub ready_log_interval: Duration,

    #[serde(default, with = "humantime_serde")]
    pub bootstrap_delay: Duration,

    #[serde(default = "default_transaction_sweep_interval", with = "humantime_serde")]
    pub transaction_sweep_interval: Duration,

    #[serde(default = "default_transaction_max_age", with = "humantime_serde")]
    pub transaction_max_age: Duration,

    #[serde(default)]
    pub dump_import: DumpImportConfig,

    /// SeaORM connection string; the in-memory store is used when unset
    #[serde(default)]
    pub database_url: Option<String>,
}

/// External dump import used when a collection has no seed directory
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DumpImportConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_import_program")]
    pub program: String,

    #[serde(default)]
    pub database: String,
}

impl Default for DumpImportConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            program: default_import_program(),
            database: String::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bootstrap_data: true,
            product_name: String::new(),
            server_fqdn: String::new(),
            version_numeric: 0,
            release_mode: default_release_mode(),
            log_join_queries: false,
            app_location: default_app_location(),
            cache_dir: default_cache_dir(),
            join_recursion_budget: default_join_recursion_budget(),
            ready_log_interval: default_ready_log_interval(),
            bootstrap_delay: Duration::ZERO,
            transaction_sweep_interval: default_transaction_sweep_interval(),
            transaction_max_age: default_transaction_max_age(),
            dump_import: DumpImportConfig::default(),
            database_url: None,
        }
    }
}

impl Config {
    /// Defaults, then the YAML file (if any), then `ENTITY_SERVICE_*`
    /// environment variables (`__` separates nested keys)
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed("ENTITY_SERVICE_").split("__"))
            .extract()
            .context("invalid entity service configuration")
    }
}

fn default_true() -> bool {
    true
}

fn default_release_mode() -> String {
    "development".to_string()
}

fn default_app_location() -> PathBuf {
    PathBuf::from(".")
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from("cache")
}

fn default_join_recursion_budget() -> usize {
    8
}

fn default_ready_log_interval() -> Duration {
    Duration::from_secs(10)
}

fn default_transaction_sweep_interval() -> Duration {
    Duration::from_secs(12 * 60 * 60)
}

fn default_transaction_max_age() -> Duration {
    Duration::from_secs(48 * 60 * 60)
}

fn default_import_program() -> String {
    "mongoimport".to_string()
}
