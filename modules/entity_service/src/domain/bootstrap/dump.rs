//! Fallback import of a full collection dump when no seed directory exists

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::BootstrapError;

/// `<app>/db/bootstrap/<dir>/mongoDump/<dir>Dump.json`
pub fn dump_path(app_location: &Path, dir_name: &str) -> PathBuf {
    app_location
        .join("db")
        .join("bootstrap")
        .join(dir_name)
        .join("mongoDump")
        .join(format!("{dir_name}Dump.json"))
}

#[async_trait]
pub trait DumpImporter: Send + Sync {
    /// Import the dump for a collection; `Ok(false)` when there is nothing
    /// to import
    async fn import(&self, dir_name: &str, collection: &str) -> Result<bool, BootstrapError>;
}

/// Runs the external `mongoimport` tool in upsert mode
#[derive(Debug, Clone)]
pub struct MongoImportCommand {
    program: String,
    database: String,
    app_location: PathBuf,
}

impl MongoImportCommand {
    pub fn new(
        program: impl Into<String>,
        database: impl Into<String>,
        app_location: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            database: database.into(),
            app_location: app_location.into(),
        }
    }
}

#[async_trait]
impl DumpImporter for MongoImportCommand {
    async fn import(&self, dir_name: &str, collection: &str) -> Result<bool, BootstrapError> {
        let file = dump_path(&self.app_location, dir_name);
        if !tokio::fs::try_exists(&file).await.unwrap_or(false) {
            return Ok(false);
        }

        tracing::info!(collection, file = %file.display(), "importing collection dump");
        let import_error = |message: String| BootstrapError::Import {
            collection: collection.to_string(),
            message,
        };
        let status = tokio::process::Command::new(&self.program)
            .arg("--db")
            .arg(&self.database)
            .arg("--collection")
            .arg(collection)
            .arg("--file")
            .arg(&file)
            .arg("--upsert")
            .status()
            .await
            .map_err(|e| import_error(format!("failed to run {}: {e}", self.program)))?;

        if status.success() {
            Ok(true)
        } else {
            Err(import_error(format!("{} exited with {status}", self.program)))
        }
    }
}

/// Importer used when dump import is disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopImporter;

#[async_trait]
impl DumpImporter for NoopImporter {
    async fn import(&self, _dir_name: &str, _collection: &str) -> Result<bool, BootstrapError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_path_layout() {
        let path = dump_path(Path::new("/srv/app"), "roles");
        assert_eq!(
            path,
            PathBuf::from("/srv/app/db/bootstrap/roles/mongoDump/rolesDump.json")
        );
    }

    #[tokio::test]
    async fn test_missing_dump_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let importer = MongoImportCommand::new("mongoimport", "app", dir.path());
        assert!(!importer.import("roles", "Roles").await.unwrap());
    }
}
