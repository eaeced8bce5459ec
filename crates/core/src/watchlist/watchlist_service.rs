use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use futures::lock::Mutex;
use log::debug;

use super::watchlist_aggregator::WatchlistAggregator;
use super::watchlist_model::{WatchlistEntry, WatchlistSummaryItem};
use super::watchlist_traits::{WatchlistRepositoryTrait, WatchlistServiceTrait};
use crate::errors::{Error, Result, ValidationError};

/// Service for managing the watchlist and refreshing its estimates.
pub struct WatchlistService {
    repository: Arc<dyn WatchlistRepositoryTrait>,
    aggregator: Arc<WatchlistAggregator>,
    /// Serializes load-modify-save cycles.
    write_lock: Mutex<()>,
    last_summary: RwLock<Vec<WatchlistSummaryItem>>,
}

impl WatchlistService {
    pub fn new(
        repository: Arc<dyn WatchlistRepositoryTrait>,
        aggregator: Arc<WatchlistAggregator>,
    ) -> Self {
        Self {
            repository,
            aggregator,
            write_lock: Mutex::new(()),
            last_summary: RwLock::new(Vec::new()),
        }
    }

    fn position(entries: &[WatchlistEntry], code: &str) -> Result<usize> {
        entries
            .iter()
            .position(|e| e.code == code)
            .ok_or_else(|| Error::NotFound(format!("Fund {} is not in the watchlist", code)))
    }
}

#[async_trait]
impl WatchlistServiceTrait for WatchlistService {
    async fn list(&self) -> Result<Vec<WatchlistEntry>> {
        self.repository.load().await
    }

    async fn add(&self, entry: WatchlistEntry) -> Result<WatchlistEntry> {
        let code = entry.code.trim().to_string();
        if code.is_empty() {
            return Err(ValidationError::MissingField("code".to_string()).into());
        }
        let name = match entry.name.trim() {
            "" => code.clone(),
            name => name.to_string(),
        };
        let entry = WatchlistEntry {
            code,
            name,
            ..entry
        };

        let _guard = self.write_lock.lock().await;
        let mut entries = self.repository.load().await?;
        if entries.iter().any(|e| e.code == entry.code) {
            return Err(Error::ConstraintViolation(format!(
                "Fund {} is already in watchlist",
                entry.code
            )));
        }
        entries.push(entry.clone());
        self.repository.save(&entries).await?;
        debug!("Added fund {} to watchlist", entry.code);
        Ok(entry)
    }

    async fn remove(&self, code: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.repository.load().await?;
        let idx = Self::position(&entries, code)?;
        entries.remove(idx);
        self.repository.save(&entries).await?;
        debug!("Removed fund {} from watchlist", code);
        Ok(())
    }

    async fn move_to_top(&self, code: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.repository.load().await?;
        let idx = Self::position(&entries, code)?;
        if idx == 0 {
            return Err(ValidationError::InvalidInput(format!(
                "Fund {} is already at the top",
                code
            ))
            .into());
        }
        let entry = entries.remove(idx);
        entries.insert(0, entry);
        self.repository.save(&entries).await
    }

    async fn refresh(&self) -> Result<Vec<WatchlistSummaryItem>> {
        let entries = self.repository.load().await?;
        let summary = self.aggregator.fetch_fund_data(&entries).await;
        if let Ok(mut cached) = self.last_summary.write() {
            *cached = summary.clone();
        }
        Ok(summary)
    }

    fn last_summary(&self) -> Vec<WatchlistSummaryItem> {
        self.last_summary
            .read()
            .map(|s| s.clone())
            .unwrap_or_default()
    }
}
