//! LeekFund Core - fund estimation pipeline, watchlist and domain events.
//!
//! A fund's live change is estimated from its disclosed stock holdings:
//! the disclosure page is scraped, each holding's market is classified,
//! holdings are joined with a batch quote feed, and the fund-level change is
//! the weight-weighted average of the holdings' changes.
//!
//! Remote access goes through the `FundDataProvider` trait of the
//! `leekfund-market-data` crate; persistence of the watchlist goes through
//! [`watchlist::WatchlistRepositoryTrait`], implemented by the runtime.

pub mod errors;
pub mod events;
pub mod holdings;
pub mod watchlist;

#[cfg(test)]
mod test_support;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
