//! EastMoney fund data provider implementation.
//!
//! This module provides fund and quote data from EastMoney's public endpoints:
//! - Holdings disclosure via fundf10 `FundArchivesDatas.aspx` (HTML)
//! - Batch quotes via push2 `ulist.np`
//! - Fund search via fundsuggest `FundSearchAPI.ashx`
//!
//! None of the endpoints require authentication.

mod headers;
mod models;

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::errors::MarketDataError;
use crate::models::{FundSearchHit, QuoteSnapshot};
use crate::provider::FundDataProvider;

use headers::eastmoney_headers;
use models::{FundSearchResponse, QuoteListResponse};

const PROVIDER_ID: &str = "EASTMONEY";

const HOLDINGS_URL: &str = "https://fundf10.eastmoney.com/FundArchivesDatas.aspx";
const QUOTES_URL: &str = "https://push2.eastmoney.com/api/qt/ulist.np/get";
const SEARCH_URL: &str = "https://fundsuggest.eastmoney.com/FundSearch/api/FundSearchAPI.ashx";

/// Fields requested from the quote feed: price, change, P/E, symbol, name.
const QUOTE_FIELDS: &str = "f2,f3,f12,f14,f9";

/// Search category id for funds.
const FUND_CATEGORY: i64 = 700;

/// Number of top holdings requested from the disclosure page.
pub const DEFAULT_HOLDINGS_TOP_N: u32 = 100;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// EastMoney provider.
///
/// Cloning is cheap; the underlying `reqwest::Client` is shared.
#[derive(Clone)]
pub struct EastMoneyProvider {
    client: Client,
    holdings_top_n: u32,
}

impl EastMoneyProvider {
    /// Create a provider with the default timeout and top-N setting.
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_options(
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            DEFAULT_HOLDINGS_TOP_N,
        )
    }

    /// Create a provider with an explicit request timeout and holdings depth.
    pub fn with_options(timeout: Duration, holdings_top_n: u32) -> Result<Self, MarketDataError> {
        let client = Client::builder()
            .default_headers(eastmoney_headers())
            .timeout(timeout)
            .build()
            .map_err(|e| MarketDataError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            holdings_top_n,
        })
    }

    /// Make a GET request and return the body text.
    async fn fetch(&self, url: &str, params: &[(&str, &str)]) -> Result<String, MarketDataError> {
        debug!("EastMoney request: {} with {} params", url, params.len());

        let response = self.client.get(url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::HttpStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl FundDataProvider for EastMoneyProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_holdings_document(&self, fund_code: &str) -> Result<String, MarketDataError> {
        let top_n = self.holdings_top_n.to_string();
        self.fetch(
            HOLDINGS_URL,
            &[
                ("type", "jjcc"),
                ("code", fund_code),
                ("topline", top_n.as_str()),
                ("year", ""),
                ("month", ""),
            ],
        )
        .await
    }

    async fn fetch_quotes(&self, secids: &str) -> Result<Vec<QuoteSnapshot>, MarketDataError> {
        let body = self
            .fetch(QUOTES_URL, &[("fields", QUOTE_FIELDS), ("secids", secids)])
            .await?;
        parse_quote_response(&body)
    }

    async fn search_funds(&self, key: &str) -> Result<Vec<FundSearchHit>, MarketDataError> {
        let body = self.fetch(SEARCH_URL, &search_params(key)).await?;
        parse_search_response(&body)
    }
}

/// Query of the search endpoint; `m=1` selects the suggestion mode.
fn search_params(key: &str) -> [(&str, &str); 2] {
    [("m", "1"), ("key", key)]
}

/// Parse a `ulist.np` body into quote snapshots, in feed order.
pub(crate) fn parse_quote_response(body: &str) -> Result<Vec<QuoteSnapshot>, MarketDataError> {
    let response: QuoteListResponse =
        serde_json::from_str(body).map_err(|e| MarketDataError::InvalidResponse {
            provider: PROVIDER_ID.to_string(),
            message: format!("quote list: {}", e),
        })?;

    let Some(data) = response.data else {
        debug!("EastMoney quote list returned no data (rc={})", response.rc);
        return Ok(Vec::new());
    };

    Ok(data
        .diff
        .into_iter()
        .map(|row| QuoteSnapshot {
            code: row.f12,
            name: row.f14,
            price: row.f2,
            change_basis_points: row.f3,
            pe_ratio: row.f9,
        })
        .collect())
}

/// Parse a search body, keeping only fund-category candidates.
pub(crate) fn parse_search_response(body: &str) -> Result<Vec<FundSearchHit>, MarketDataError> {
    let response: FundSearchResponse =
        serde_json::from_str(body).map_err(|e| MarketDataError::InvalidResponse {
            provider: PROVIDER_ID.to_string(),
            message: format!("fund search: {}", e),
        })?;

    if response.err_code != 0 {
        debug!("EastMoney search returned ErrCode {}", response.err_code);
    }

    Ok(response
        .datas
        .unwrap_or_default()
        .into_iter()
        .filter(|row| row.category == Some(FUND_CATEGORY))
        .filter(|row| !row.fund_code().is_empty())
        .map(|row| {
            let code = row.fund_code().to_string();
            let hit = FundSearchHit::new(code, row.name);
            match row.category_desc {
                Some(desc) => hit.with_category(desc),
                None => hit,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id() {
        let provider = EastMoneyProvider::new().unwrap();
        assert_eq!(provider.id(), "EASTMONEY");
    }

    #[test]
    fn test_quote_response_parsing() {
        let json = r#"{
            "rc": 0,
            "data": {
                "total": 2,
                "diff": [
                    {"f2": 18923, "f3": 220, "f9": 2985, "f12": "AAPL", "f14": "苹果"},
                    {"f2": "-", "f3": "-", "f9": "-", "f12": "00700", "f14": "腾讯控股"}
                ]
            }
        }"#;

        let quotes = parse_quote_response(json).unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].code, "AAPL");
        assert_eq!(quotes[0].change_basis_points, Some(220.0));
        assert_eq!(quotes[0].change_pct(), Some(2.2));
        assert_eq!(quotes[1].code, "00700");
        assert_eq!(quotes[1].price, None);
        assert_eq!(quotes[1].change_basis_points, None);
    }

    #[test]
    fn test_quote_response_null_data() {
        let json = r#"{"rc": 0, "data": null}"#;
        let quotes = parse_quote_response(json).unwrap();
        assert!(quotes.is_empty());
    }

    #[test]
    fn test_quote_response_garbage_is_error() {
        let result = parse_quote_response("<html>busy</html>");
        assert!(matches!(
            result,
            Err(MarketDataError::InvalidResponse { .. })
        ));
    }

    #[test]
    fn test_search_response_keeps_fund_category_only() {
        let json = r#"{
            "ErrCode": 0,
            "Datas": [
                {"_id": "159736", "CODE": "159736", "NAME": "纳斯达克ETF", "CATEGORY": 700, "CATEGORYDESC": "基金"},
                {"_id": "AAPL", "CODE": "AAPL", "NAME": "苹果", "CATEGORY": 150, "CATEGORYDESC": "美股"}
            ]
        }"#;

        let hits = parse_search_response(json).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "159736");
        assert_eq!(hits[0].category.as_deref(), Some("基金"));
    }

    #[test]
    fn test_search_response_falls_back_to_id() {
        let json = r#"{"ErrCode":0,"Datas":[
            {"_id":"159736","CODE":"","NAME":"纳斯达克ETF","CATEGORY":700},
            {"_id":"","CODE":"","NAME":"无代码","CATEGORY":700}
        ]}"#;

        let hits = parse_search_response(json).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "159736");
        assert_eq!(hits[0].category, None);
    }

    #[test]
    fn test_search_params_pass_raw_key() {
        assert_eq!(search_params("纳斯达克"), [("m", "1"), ("key", "纳斯达克")]);
    }

    #[test]
    fn test_search_response_without_datas() {
        let json = r#"{"ErrCode": 0, "Datas": null}"#;
        assert!(parse_search_response(json).unwrap().is_empty());
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_quotes() {
        let provider = EastMoneyProvider::new().unwrap();
        let quotes = provider.fetch_quotes("105.AAPL,116.00700").await.unwrap();

        assert!(quotes.iter().any(|q| q.code == "AAPL"));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_holdings_document() {
        let provider = EastMoneyProvider::new().unwrap();
        let document = provider.fetch_holdings_document("110011").await.unwrap();

        assert!(document.contains("gpdmList"));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_search_funds() {
        let provider = EastMoneyProvider::new().unwrap();
        let hits = provider.search_funds("纳斯达克").await.unwrap();

        assert!(!hits.is_empty());
    }
}
