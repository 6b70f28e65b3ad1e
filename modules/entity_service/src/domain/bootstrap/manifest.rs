//! Persisted caches that make seeding idempotent across restarts.
//!
//! Two manifests live side by side under the cache directory:
//! - applied payload hashes, keyed by product-scoped collection name
//!   (`<product><Collection>.hashes.json`);
//! - seed file byte sizes, keyed by seed directory name
//!   (`<dir>.manifest.json`).

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use sha2::{Digest, Sha256};

use super::BootstrapError;

/// Hex SHA-256 of a payload
pub fn content_hash(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

#[derive(Debug)]
pub struct ManifestCache {
    cache_dir: PathBuf,
    hashes: Mutex<HashMap<String, BTreeSet<String>>>,
    sizes: Mutex<HashMap<String, BTreeMap<String, u64>>>,
}

impl ManifestCache {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            hashes: Mutex::new(HashMap::new()),
            sizes: Mutex::new(HashMap::new()),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    fn hash_file(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{key}.hashes.json"))
    }

    fn size_file(&self, dir: &str) -> PathBuf {
        self.cache_dir.join(format!("{dir}.manifest.json"))
    }

    /// Load applied hashes for `key`; a missing file means none applied yet
    pub async fn load_hashes(&self, key: &str) -> Result<(), BootstrapError> {
        let loaded: BTreeSet<String> = read_json(&self.hash_file(key)).await?.unwrap_or_default();
        self.hashes.lock().insert(key.to_string(), loaded);
        Ok(())
    }

    pub fn has_hash(&self, key: &str, hash: &str) -> bool {
        self.hashes
            .lock()
            .get(key)
            .is_some_and(|set| set.contains(hash))
    }

    pub fn record_hash(&self, key: &str, hash: &str) {
        self.hashes
            .lock()
            .entry(key.to_string())
            .or_default()
            .insert(hash.to_string());
    }

    pub async fn persist_hashes(&self, key: &str) -> Result<(), BootstrapError> {
        let snapshot = self.hashes.lock().get(key).cloned().unwrap_or_default();
        write_json(&self.cache_dir, &self.hash_file(key), &snapshot).await
    }

    pub async fn load_sizes(&self, dir: &str) -> Result<(), BootstrapError> {
        let loaded: BTreeMap<String, u64> = read_json(&self.size_file(dir)).await?.unwrap_or_default();
        self.sizes.lock().insert(dir.to_string(), loaded);
        Ok(())
    }

    pub fn cached_size(&self, dir: &str, file: &str) -> Option<u64> {
        self.sizes.lock().get(dir).and_then(|files| files.get(file).copied())
    }

    pub fn record_size(&self, dir: &str, file: &str, size: u64) {
        self.sizes
            .lock()
            .entry(dir.to_string())
            .or_default()
            .insert(file.to_string(), size);
    }

    pub async fn persist_sizes(&self, dir: &str) -> Result<(), BootstrapError> {
        let snapshot = self.sizes.lock().get(dir).cloned().unwrap_or_default();
        write_json(&self.cache_dir, &self.size_file(dir), &snapshot).await
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(
    path: &Path,
) -> Result<Option<T>, BootstrapError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(BootstrapError::CacheRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|source| BootstrapError::CacheFormat {
            path: path.to_path_buf(),
            source,
        })
}

async fn write_json<T: serde::Serialize>(
    dir: &Path,
    path: &Path,
    value: &T,
) -> Result<(), BootstrapError> {
    let write_error = |source| BootstrapError::CacheWrite {
        path: path.to_path_buf(),
        source,
    };
    tokio::fs::create_dir_all(dir).await.map_err(write_error)?;
    let body = serde_json::to_vec_pretty(value).map_err(|e| write_error(e.into()))?;
    tokio::fs::write(path, body).await.map_err(write_error)
}
