use std::{fs, path::PathBuf, sync::Mutex};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use leekfund_core::{
    errors::Error,
    watchlist::{WatchlistEntry, WatchlistRepositoryTrait},
    Result,
};

const CURRENT_VERSION: u32 = 1;

/// Watchlist persisted as a JSON file.
///
/// A missing or empty file reads as an empty watchlist; the file and its
/// parent directories are created on first save.
#[derive(Debug)]
pub struct JsonWatchlistRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

#[derive(Serialize, Deserialize, Default)]
struct WatchlistFile {
    version: u32,
    funds: Vec<WatchlistEntry>,
}

impl JsonWatchlistRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    fn read_locked(&self) -> Result<Vec<WatchlistEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read(&self.path)?;
        if raw.is_empty() {
            return Ok(Vec::new());
        }

        let file: WatchlistFile = serde_json::from_slice(&raw)?;
        Ok(file.funds)
    }

    fn write_locked(&self, entries: &[WatchlistEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = WatchlistFile {
            version: CURRENT_VERSION,
            funds: entries.to_vec(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[async_trait]
impl WatchlistRepositoryTrait for JsonWatchlistRepository {
    async fn load(&self) -> Result<Vec<WatchlistEntry>> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| Error::Repository("Watchlist file lock poisoned".into()))?;
        self.read_locked()
    }

    async fn save(&self, entries: &[WatchlistEntry]) -> Result<()> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| Error::Repository("Watchlist file lock poisoned".into()))?;
        self.write_locked(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let repository = JsonWatchlistRepository::new(dir.path().join("watchlist.json"));

        assert!(repository.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_creates_parent_and_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("watchlist.json");
        let repository = JsonWatchlistRepository::new(path.clone());
        let mut entry = WatchlistEntry::new("161725", "招商中证白酒");
        entry.amount = Some(2000.0);

        repository
            .save(&[entry.clone(), WatchlistEntry::new("000001", "华夏成长")])
            .await
            .unwrap();

        assert!(path.exists());
        let loaded = repository.load().await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0], entry);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_repository_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("watchlist.json");
        fs::write(&path, "not json").unwrap();

        let result = JsonWatchlistRepository::new(path).load().await;

        assert!(matches!(result, Err(Error::Repository(_))));
    }
}
