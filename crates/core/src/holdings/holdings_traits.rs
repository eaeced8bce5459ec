use async_trait::async_trait;
use leekfund_market_data::FundSearchHit;

use super::holdings_model::FundAggregate;
use crate::errors::Result;

/// Trait for fund estimation operations
#[async_trait]
pub trait FundServiceTrait: Send + Sync {
    /// Scrape, classify, quote and aggregate one fund.
    ///
    /// Transport failures propagate unchanged; nothing is retried.
    async fn find_one(&self, fund_code: &str) -> Result<FundAggregate>;

    /// Look up funds by code or name. A blank key returns no candidates.
    async fn search_funds(&self, key: &str) -> Result<Vec<FundSearchHit>>;
}
