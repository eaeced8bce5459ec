//! Watchlist repository and service traits.

use async_trait::async_trait;

use super::watchlist_model::{WatchlistEntry, WatchlistSummaryItem};
use crate::errors::Result;

/// Persistence of the ordered watchlist.
///
/// Implementations store the whole list at once; a store that has never been
/// written loads as an empty list.
#[async_trait]
pub trait WatchlistRepositoryTrait: Send + Sync {
    async fn load(&self) -> Result<Vec<WatchlistEntry>>;

    async fn save(&self, entries: &[WatchlistEntry]) -> Result<()>;
}

/// Trait defining the contract for watchlist operations.
#[async_trait]
pub trait WatchlistServiceTrait: Send + Sync {
    /// Entries in display order.
    async fn list(&self) -> Result<Vec<WatchlistEntry>>;

    /// Appends a fund. Codes are unique within the watchlist.
    async fn add(&self, entry: WatchlistEntry) -> Result<WatchlistEntry>;

    async fn remove(&self, code: &str) -> Result<()>;

    /// Moves an entry to the first position.
    async fn move_to_top(&self, code: &str) -> Result<()>;

    /// Estimates every fund in the stored watchlist and caches the summary.
    async fn refresh(&self) -> Result<Vec<WatchlistSummaryItem>>;

    /// Summary of the last refresh, empty before the first one.
    fn last_summary(&self) -> Vec<WatchlistSummaryItem>;
}
