use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{result_id, ResultStore};
use crate::errors::WardenError;
use crate::models::ScanResult;

/// Flat-file result store: one pretty-printed JSON document per scan under a
/// single directory, named from the normalized target reference.
pub struct FsResultStore {
    dir: PathBuf,
}

impl FsResultStore {
    /// Opens the store, creating the directory if needed.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, WardenError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| WardenError::Persistence(format!("create {}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", result_id(id)))
    }

    /// Atomic file write: write to temp, then rename. The temp name carries a
    /// per-write suffix so concurrent writers to the same id never share one.
    async fn atomic_write(path: &Path, content: &str) -> Result<(), WardenError> {
        static WRITE_SEQ: AtomicU64 = AtomicU64::new(0);
        let seq = WRITE_SEQ.fetch_add(1, Ordering::Relaxed);
        let tmp = path.with_extension(format!("tmp.{}.{}", std::process::id(), seq));
        tokio::fs::write(&tmp, content).await?;
        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }
}

#[async_trait]
impl ResultStore for FsResultStore {
    async fn put(&self, id: &str, result: &ScanResult) -> Result<(), WardenError> {
        let path = self.path_for(id);
        let json = serde_json::to_string_pretty(result)?;
        Self::atomic_write(&path, &json)
            .await
            .map_err(|e| WardenError::Persistence(format!("write {}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "Stored scan result");
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<ScanResult, WardenError> {
        let path = self.path_for(id);
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| WardenError::Persistence(format!("read {}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| WardenError::Persistence(format!("parse {}: {}", path.display(), e)))
    }

    async fn list(&self) -> Result<Vec<String>, WardenError> {
        let mut ids = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|e| WardenError::Persistence(format!("list {}: {}", self.dir.display(), e)))?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(id) = name.strip_suffix(".json") {
                ids.push(id.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }

    async fn load_all(&self) -> Result<Vec<ScanResult>, WardenError> {
        let mut results = Vec::new();
        for id in self.list().await? {
            match self.get(&id).await {
                Ok(result) => results.push(result),
                // A file may be mid-write or truncated; skip it rather than
                // failing the whole recount.
                Err(e) => warn!(id = %id, error = %e, "Skipping unreadable scan result"),
            }
        }
        Ok(results)
    }
}
