//! In-memory fakes shared by the service tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use leekfund_market_data::{FundDataProvider, FundSearchHit, MarketDataError, QuoteSnapshot};

use crate::watchlist::{WatchlistEntry, WatchlistRepositoryTrait};

/// Builds a disclosure page with a code list and, when rows are given, a
/// holdings table of `(stock code, stock name, weight text)`.
pub fn holdings_document(codes: &[&str], rows: &[(&str, &str, &str)]) -> String {
    let mut html = String::from("<html><body>");
    if !rows.is_empty() {
        html.push_str(
            "<table><thead><tr><th>序号</th><th>股票代码</th><th>股票名称</th>\
             <th>占净值比例</th><th>持股数（万股）</th></tr></thead><tbody>",
        );
        for (idx, (code, name, weight)) in rows.iter().enumerate() {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>100.00</td></tr>",
                idx + 1,
                code,
                name,
                weight
            ));
        }
        html.push_str("</tbody></table>");
    }
    html.push_str("<div id=\"gpdmList\">");
    for code in codes {
        html.push_str(code);
        html.push(',');
    }
    html.push_str("</div></body></html>");
    html
}

/// Provider serving canned documents and quotes, recording every request.
#[derive(Default)]
pub struct FakeProvider {
    documents: HashMap<String, String>,
    delays: HashMap<String, Duration>,
    quotes: Vec<QuoteSnapshot>,
    search_hits: Vec<FundSearchHit>,
    fail_quotes: bool,
    document_requests: AtomicUsize,
    search_requests: AtomicUsize,
    quote_requests: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, fund_code: &str, document: &str) -> Self {
        self.documents
            .insert(fund_code.to_string(), document.to_string());
        self
    }

    /// Delays the document response for one fund.
    pub fn with_delay(mut self, fund_code: &str, delay: Duration) -> Self {
        self.delays.insert(fund_code.to_string(), delay);
        self
    }

    pub fn with_quote(mut self, quote: QuoteSnapshot) -> Self {
        self.quotes.push(quote);
        self
    }

    pub fn with_search_hit(mut self, hit: FundSearchHit) -> Self {
        self.search_hits.push(hit);
        self
    }

    pub fn failing_quotes(mut self) -> Self {
        self.fail_quotes = true;
        self
    }

    pub fn document_requests(&self) -> usize {
        self.document_requests.load(Ordering::SeqCst)
    }

    pub fn search_requests(&self) -> usize {
        self.search_requests.load(Ordering::SeqCst)
    }

    pub fn quote_requests(&self) -> Vec<String> {
        self.quote_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl FundDataProvider for FakeProvider {
    fn id(&self) -> &'static str {
        "FAKE"
    }

    async fn fetch_holdings_document(&self, fund_code: &str) -> Result<String, MarketDataError> {
        self.document_requests.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(fund_code) {
            tokio::time::sleep(*delay).await;
        }
        self.documents
            .get(fund_code)
            .cloned()
            .ok_or_else(|| MarketDataError::HttpStatus {
                provider: "FAKE".to_string(),
                status: 404,
            })
    }

    async fn fetch_quotes(&self, secids: &str) -> Result<Vec<QuoteSnapshot>, MarketDataError> {
        self.quote_requests.lock().unwrap().push(secids.to_string());
        if self.fail_quotes {
            return Err(MarketDataError::HttpStatus {
                provider: "FAKE".to_string(),
                status: 503,
            });
        }
        Ok(self.quotes.clone())
    }

    async fn search_funds(&self, _key: &str) -> Result<Vec<FundSearchHit>, MarketDataError> {
        self.search_requests.fetch_add(1, Ordering::SeqCst);
        Ok(self.search_hits.clone())
    }
}

/// Watchlist store kept in memory.
#[derive(Default)]
pub struct InMemoryWatchlistRepository {
    entries: Mutex<Vec<WatchlistEntry>>,
}

impl InMemoryWatchlistRepository {
    pub fn with_entries(entries: Vec<WatchlistEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    pub fn entries(&self) -> Vec<WatchlistEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WatchlistRepositoryTrait for InMemoryWatchlistRepository {
    async fn load(&self) -> crate::Result<Vec<WatchlistEntry>> {
        Ok(self.entries())
    }

    async fn save(&self, entries: &[WatchlistEntry]) -> crate::Result<()> {
        *self.entries.lock().unwrap() = entries.to_vec();
        Ok(())
    }
}
