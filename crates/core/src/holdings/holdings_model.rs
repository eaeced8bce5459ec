use log::warn;
use serde::{Deserialize, Serialize};

use leekfund_market_data::QuoteSnapshot;

use super::market::{classify, split_code, Market};
use super::merge::Overlay;

/// One body row of the disclosure table, as text.
///
/// Column names follow the table layout: `raw_code` is the first column (the
/// row number on the disclosure page), `raw_name` the second (the stock code
/// as shown in the table), `raw_names` the third (the stock's display name).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisclosureRow {
    pub raw_code: String,
    pub raw_name: String,
    pub raw_names: String,
    pub raw_weight_text: String,
    /// Parsed weight, 0 when the text is not a number.
    pub weight_pct: f64,
}

/// Output of scraping a holdings-disclosure document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrapedHoldings {
    /// Composite security codes in disclosure order.
    pub codes: Vec<String>,
    /// Rows of the first matching holdings table.
    pub records: Vec<DisclosureRow>,
}

/// One disclosed stock position of a fund, enriched with its live quote.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRecord {
    /// Composite code, e.g. "116.00700"
    pub code: String,
    /// Bare symbol, e.g. "00700"
    pub symbol: String,
    pub market: Market,
    pub stock_name: String,
    /// Share of the fund's net value, in percent
    pub weight_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_weight_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Change since previous close, in percent
    pub change_pct: Option<f64>,
}

impl HoldingRecord {
    /// Provisional holding built from a scraped code, before any join.
    pub fn from_code(code: &str) -> Self {
        let (_, symbol) = split_code(code);
        Self {
            code: code.to_string(),
            symbol: symbol.to_string(),
            market: classify(code),
            stock_name: String::new(),
            weight_pct: 0.0,
            raw_weight_text: None,
            price: None,
            change_pct: None,
        }
    }
}

impl Overlay<DisclosureRow> for HoldingRecord {
    fn overlay(self, row: &DisclosureRow) -> Self {
        Self {
            stock_name: if row.raw_names.is_empty() {
                self.stock_name
            } else {
                row.raw_names.clone()
            },
            weight_pct: row.weight_pct,
            raw_weight_text: Some(row.raw_weight_text.clone()),
            ..self
        }
    }
}

impl Overlay<QuoteSnapshot> for HoldingRecord {
    fn overlay(self, quote: &QuoteSnapshot) -> Self {
        Self {
            stock_name: if quote.name.is_empty() {
                self.stock_name
            } else {
                quote.name.clone()
            },
            price: quote.price,
            change_pct: quote.change_pct(),
            ..self
        }
    }
}

/// Fund-level rollup of the estimation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundAggregate {
    pub fund_code: String,
    pub holdings: Vec<HoldingRecord>,
    pub total_weight_pct: f64,
    /// Weighted average change in percent, formatted with two decimals
    pub weighted_change_pct: String,
}

impl FundAggregate {
    pub fn from_holdings(fund_code: &str, holdings: Vec<HoldingRecord>) -> Self {
        let (total_weight_pct, weighted_change) = weighted_change(&holdings);
        if total_weight_pct == 0.0 && !holdings.is_empty() {
            warn!(
                "Fund {} has {} holdings but zero total weight; reporting 0.00",
                fund_code,
                holdings.len()
            );
        }

        Self {
            fund_code: fund_code.to_string(),
            holdings,
            total_weight_pct,
            weighted_change_pct: format_pct(weighted_change),
        }
    }

    /// The weighted change as a number.
    pub fn weighted_change(&self) -> f64 {
        self.weighted_change_pct.parse().unwrap_or(0.0)
    }
}

/// Returns `(total weight, weighted average change)`.
///
/// Holdings without a quote count as unchanged. With zero total weight the
/// average is defined as 0.
pub fn weighted_change(holdings: &[HoldingRecord]) -> (f64, f64) {
    let total_weight: f64 = holdings.iter().map(|h| h.weight_pct).sum();
    let weighted_sum: f64 = holdings
        .iter()
        .map(|h| h.weight_pct * h.change_pct.unwrap_or(0.0))
        .sum();

    if total_weight > 0.0 {
        (total_weight, weighted_sum / total_weight)
    } else {
        (total_weight, 0.0)
    }
}

/// Two-decimal formatting that never yields "-0.00".
fn format_pct(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    if formatted == "-0.00" {
        "0.00".to_string()
    } else {
        formatted
    }
}
