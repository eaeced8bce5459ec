use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use leekfund_market_data::{FundDataProvider, FundSearchHit};

use super::holdings_model::{FundAggregate, HoldingRecord};
use super::holdings_traits::FundServiceTrait;
use super::merge::{merge_by_key, non_empty};
use super::scraper::scrape;
use crate::errors::Result;

/// Estimates a fund's live change from its disclosed holdings.
pub struct FundService {
    provider: Arc<dyn FundDataProvider>,
}

impl FundService {
    pub fn new(provider: Arc<dyn FundDataProvider>) -> Self {
        FundService { provider }
    }
}

#[async_trait]
impl FundServiceTrait for FundService {
    async fn find_one(&self, fund_code: &str) -> Result<FundAggregate> {
        let document = self.provider.fetch_holdings_document(fund_code).await?;
        let scraped = scrape(&document, fund_code);

        // One provisional holding per scraped code; this fixes length and order.
        let provisional: Vec<HoldingRecord> = scraped
            .codes
            .iter()
            .map(|code| HoldingRecord::from_code(code))
            .collect();

        // The table's second column carries the bare stock code.
        let holdings = merge_by_key(
            &scraped.records,
            provisional,
            |row| non_empty(&row.raw_name),
            |holding| non_empty(&holding.symbol),
        );

        if holdings.is_empty() {
            debug!("Fund {} discloses no stock holdings", fund_code);
            return Ok(FundAggregate::from_holdings(fund_code, holdings));
        }

        let secids = scraped.codes.join(",");
        let quotes = self.provider.fetch_quotes(&secids).await?;
        debug!(
            "Fund {}: {} quotes for {} holdings from {}",
            fund_code,
            quotes.len(),
            holdings.len(),
            self.provider.id()
        );

        let holdings = merge_by_key(
            &quotes,
            holdings,
            |quote| non_empty(&quote.code),
            |holding| non_empty(&holding.symbol),
        );

        Ok(FundAggregate::from_holdings(fund_code, holdings))
    }

    async fn search_funds(&self, key: &str) -> Result<Vec<FundSearchHit>> {
        let key = key.trim();
        if key.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.provider.search_funds(key).await?)
    }
}
