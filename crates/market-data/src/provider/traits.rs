//! Fund data provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{FundSearchHit, QuoteSnapshot};

/// Trait for remote fund and quote data sources.
///
/// Implementations hold their HTTP client configuration and share it across
/// concurrent calls; no method may mutate per-call state on `self`.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use leekfund_market_data::{FundDataProvider, FundSearchHit, MarketDataError, QuoteSnapshot};
///
/// struct FixtureProvider;
///
/// #[async_trait]
/// impl FundDataProvider for FixtureProvider {
///     fn id(&self) -> &'static str {
///         "FIXTURE"
///     }
///
///     async fn fetch_holdings_document(&self, _fund_code: &str) -> Result<String, MarketDataError> {
///         Ok(include_str!("fixture.html").to_string())
///     }
///
///     // ... implement quotes and search
/// }
/// ```
#[async_trait]
pub trait FundDataProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and error messages.
    fn id(&self) -> &'static str;

    /// Fetch the holdings-disclosure document (HTML) for a fund.
    async fn fetch_holdings_document(&self, fund_code: &str) -> Result<String, MarketDataError>;

    /// Fetch live quotes for a comma-joined list of security codes
    /// (`"105.AAPL,116.00700"`) in a single round trip.
    ///
    /// Codes the feed does not know are simply missing from the result.
    async fn fetch_quotes(&self, secids: &str) -> Result<Vec<QuoteSnapshot>, MarketDataError>;

    /// Search funds by free-text key (code, name or pinyin).
    ///
    /// Only candidates in the fund category are returned.
    async fn search_funds(&self, key: &str) -> Result<Vec<FundSearchHit>, MarketDataError>;
}
