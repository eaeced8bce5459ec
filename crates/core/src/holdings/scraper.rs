//! Holdings-disclosure document scraper.
//!
//! The disclosure page carries two views of a fund's top holdings:
//! a hidden `#gpdmList` element with comma-separated composite codes (the
//! canonical order), and a human-readable table with per-stock weights.
//! Both are read leniently; a missing table or unparseable weight never
//! fails the scrape.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::holdings_model::{DisclosureRow, ScrapedHoldings};

lazy_static! {
    static ref CODE_LIST_SELECTOR: Selector =
        Selector::parse("#gpdmList").expect("Invalid selector");
    static ref TABLE_SELECTOR: Selector = Selector::parse("table").expect("Invalid selector");
    static ref HEADER_CELL_SELECTOR: Selector =
        Selector::parse("thead tr th").expect("Invalid selector");
    static ref BODY_ROW_SELECTOR: Selector =
        Selector::parse("tbody tr").expect("Invalid selector");
    static ref CELL_SELECTOR: Selector = Selector::parse("td").expect("Invalid selector");

    /// Leading decimal number, the way a lenient float parser reads "9.82%".
    static ref LEADING_NUMBER_REGEX: Regex =
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("Invalid regex pattern");
}

/// Any of these marks a table as the holdings table.
const TABLE_MARKERS: [&str; 3] = ["股票代码", "占基金净值比例", "占净值比例"];

/// Header text identifying the weight column.
const WEIGHT_HEADER_MARKER: &str = "占净值";

/// Scrape a holdings-disclosure document.
pub fn scrape(document: &str, fund_code: &str) -> ScrapedHoldings {
    let html = Html::parse_document(document);

    let codes = extract_codes(&html);
    let records = find_holdings_table(&html)
        .map(read_table)
        .unwrap_or_default();

    debug!(
        "Scraped fund {}: {} codes, {} table rows",
        fund_code,
        codes.len(),
        records.len()
    );

    ScrapedHoldings { codes, records }
}

fn extract_codes(html: &Html) -> Vec<String> {
    let Some(element) = html.select(&CODE_LIST_SELECTOR).next() else {
        return Vec::new();
    };

    let text: String = element.text().collect();
    let mut codes: Vec<String> = text.split(',').map(|c| c.trim().to_string()).collect();
    if codes.last().is_some_and(|c| c.is_empty()) {
        codes.pop();
    }
    codes
}

fn find_holdings_table(html: &Html) -> Option<ElementRef<'_>> {
    html.select(&TABLE_SELECTOR).find(|table| {
        let text: String = table.text().collect();
        TABLE_MARKERS.iter().any(|marker| text.contains(marker))
    })
}

fn read_table(table: ElementRef<'_>) -> Vec<DisclosureRow> {
    let headers: Vec<String> = table
        .select(&HEADER_CELL_SELECTOR)
        .map(cell_text)
        .collect();
    let weight_column = weight_column_index(&headers);

    table
        .select(&BODY_ROW_SELECTOR)
        .filter_map(|tr| {
            let cols: Vec<String> = tr.select(&CELL_SELECTOR).map(cell_text).collect();
            if cols.is_empty() {
                return None;
            }

            let weight_idx = weight_column.unwrap_or(cols.len() - 1);
            let column = |idx: usize| cols.get(idx).cloned().unwrap_or_default();
            let raw_weight_text = column(weight_idx);

            Some(DisclosureRow {
                raw_code: column(0),
                raw_name: column(1),
                raw_names: column(2),
                weight_pct: parse_weight(&raw_weight_text),
                raw_weight_text,
            })
        })
        .collect()
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Index of the first header mentioning the net-value share, if any.
pub fn weight_column_index(headers: &[String]) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.contains(WEIGHT_HEADER_MARKER))
}

/// Parse weight text such as `"9.82%"` or `"1,024.5"`.
///
/// Returns 0 for anything that does not start with a number, and for
/// negative or non-finite values.
pub fn parse_weight(text: &str) -> f64 {
    let cleaned = text.replace('%', "").replace(',', "");
    LEADING_NUMBER_REGEX
        .find(cleaned.trim())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|w| w.is_finite() && *w >= 0.0)
        .unwrap_or(0.0)
}
