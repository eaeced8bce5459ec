//! Watchlist module - the user's fund list, its persistence contract and the
//! concurrent refresh over it.

mod watchlist_aggregator;
mod watchlist_model;
mod watchlist_service;
mod watchlist_traits;

pub use watchlist_aggregator::WatchlistAggregator;
pub use watchlist_model::{Trend, WatchlistEntry, WatchlistSummaryItem};
pub use watchlist_service::WatchlistService;
pub use watchlist_traits::{WatchlistRepositoryTrait, WatchlistServiceTrait};
