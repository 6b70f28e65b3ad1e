//! Seed files on disk: `<app>/db/bootstrap/<dir>/dist/**/*.json`

use std::path::{Path, PathBuf};

use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use walkdir::WalkDir;

use super::manifest::ManifestCache;
use super::BootstrapError;

pub fn seed_dir(app_location: &Path, dir_name: &str) -> PathBuf {
    app_location
        .join("db")
        .join("bootstrap")
        .join(dir_name)
        .join("dist")
}

/// Result of scanning a collection's seed directory
#[derive(Debug, Default)]
pub struct DirectoryScan {
    /// Whether the `dist` directory exists at all
    pub found: bool,
    /// Payloads read this run, ordered by path
    pub payloads: Vec<SeedFile>,
}

#[derive(Debug, Clone)]
pub struct SeedFile {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

struct WalkedFile {
    path: PathBuf,
    /// Path relative to the `dist` root, used as the manifest key
    name: String,
    size: u64,
}

fn walk(root: &Path) -> Result<Vec<WalkedFile>, walkdir::Error> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let size = entry.metadata()?.len();
        let name = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .into_owned();
        files.push(WalkedFile {
            path: entry.into_path(),
            name,
            size,
        });
    }
    Ok(files)
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Read the seed files that changed since the last run.
///
/// A file is read when its size is not yet in the manifest, when its size
/// changed, or unconditionally while the collection is empty. The size
/// manifest is rewritten after a successful walk.
pub async fn read_seed_directory(
    app_location: &Path,
    dir_name: &str,
    collection_count: u64,
    manifest: &ManifestCache,
    cancel: &CancellationToken,
) -> Result<DirectoryScan, BootstrapError> {
    let root = seed_dir(app_location, dir_name);
    if !tokio::fs::try_exists(&root).await.unwrap_or(false) {
        return Ok(DirectoryScan::default());
    }

    manifest.load_sizes(dir_name).await?;

    let walk_root = root.clone();
    let walked = tokio::task::spawn_blocking(move || walk(&walk_root))
        .await
        .map_err(|e| BootstrapError::Walk {
            path: root.clone(),
            message: e.to_string(),
        })?
        .map_err(|e| BootstrapError::Walk {
            path: root.clone(),
            message: e.to_string(),
        })?;

    if cancel.is_cancelled() {
        return Err(BootstrapError::Cancelled);
    }

    let mut to_read = Vec::new();
    for file in walked {
        let mut read = match manifest.cached_size(dir_name, &file.name) {
            None => {
                manifest.record_size(dir_name, &file.name, file.size);
                true
            }
            Some(previous) if previous != file.size => {
                tracing::info!(
                    directory = dir_name,
                    file = %file.name,
                    previous,
                    current = file.size,
                    "seed file changed size"
                );
                manifest.record_size(dir_name, &file.name, file.size);
                true
            }
            Some(_) => false,
        };
        if collection_count == 0 {
            read = true;
        }
        if read && is_json(&file.path) {
            to_read.push(file.path);
        }
    }

    manifest.persist_sizes(dir_name).await?;

    let mut tasks = JoinSet::new();
    for path in to_read {
        tasks.spawn(async move {
            let bytes = tokio::fs::read(&path).await;
            (path, bytes)
        });
    }

    let mut payloads = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((path, Ok(bytes))) => payloads.push(SeedFile { path, bytes }),
            Ok((path, Err(e))) => {
                tracing::warn!(file = %path.display(), error = %e, "failed to read seed file");
            }
            Err(e) => tracing::warn!(error = %e, "seed file reader task failed"),
        }
    }
    payloads.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(DirectoryScan {
        found: true,
        payloads,
    })
}
