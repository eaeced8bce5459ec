//! Holdings module - disclosure scraping, market classification, joins and
//! the fund-level estimation service.

mod fund_service;
mod holdings_model;
mod holdings_traits;
mod market;
mod merge;
mod scraper;

pub use fund_service::FundService;
pub use holdings_model::{
    weighted_change, DisclosureRow, FundAggregate, HoldingRecord, ScrapedHoldings,
};
pub use holdings_traits::FundServiceTrait;
pub use market::{classify, split_code, Market};
pub use merge::{merge_by_key, non_empty, Overlay};
pub use scraper::{parse_weight, scrape, weight_column_index};
