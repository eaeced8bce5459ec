use std::sync::Arc;

use futures::future::join_all;
use log::{debug, warn};

use super::watchlist_model::{WatchlistEntry, WatchlistSummaryItem};
use crate::events::{DomainEvent, DomainEventSink};
use crate::holdings::FundServiceTrait;

/// Fans a watchlist out over the fund service.
///
/// Every fund is estimated concurrently and all outcomes are awaited; one
/// failing fund never aborts the others.
pub struct WatchlistAggregator {
    fund_service: Arc<dyn FundServiceTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl WatchlistAggregator {
    pub fn new(
        fund_service: Arc<dyn FundServiceTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            fund_service,
            event_sink,
        }
    }

    /// Estimate each fund of the watchlist.
    ///
    /// The result has one item per entry, in watchlist order. Failed funds
    /// report a change of 0. Emits [`DomainEvent::RefreshCompleted`], whose
    /// `success` is false when any fund failed. An empty watchlist returns
    /// immediately without requests or events.
    pub async fn fetch_fund_data(&self, watchlist: &[WatchlistEntry]) -> Vec<WatchlistSummaryItem> {
        if watchlist.is_empty() {
            return Vec::new();
        }

        let outcomes = join_all(
            watchlist
                .iter()
                .map(|entry| self.fund_service.find_one(&entry.code)),
        )
        .await;

        let mut failed = 0;
        let summary: Vec<WatchlistSummaryItem> = watchlist
            .iter()
            .zip(outcomes)
            .map(|(entry, outcome)| {
                let change_percent = match outcome {
                    Ok(aggregate) if !aggregate.holdings.is_empty() => aggregate.weighted_change(),
                    Ok(_) => {
                        debug!("Fund {} has no disclosed holdings", entry.code);
                        0.0
                    }
                    Err(e) => {
                        warn!("Failed to estimate fund {}: {}", entry.code, e);
                        failed += 1;
                        0.0
                    }
                };
                WatchlistSummaryItem {
                    code: entry.code.clone(),
                    name: entry.name.clone(),
                    change_percent,
                }
            })
            .collect();

        debug!(
            "Watchlist refresh finished: {} funds, {} failed",
            watchlist.len(),
            failed
        );
        self.event_sink.emit(DomainEvent::refresh_completed(
            failed == 0,
            watchlist.len(),
            failed,
        ));

        summary
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::events::MockDomainEventSink;
    use crate::holdings::FundService;
    use crate::test_support::{holdings_document, FakeProvider};
    use leekfund_market_data::QuoteSnapshot;

    fn aggregator(provider: Arc<FakeProvider>, sink: MockDomainEventSink) -> WatchlistAggregator {
        WatchlistAggregator::new(Arc::new(FundService::new(provider)), Arc::new(sink))
    }

    fn watchlist(codes: &[&str]) -> Vec<WatchlistEntry> {
        codes
            .iter()
            .map(|code| WatchlistEntry::new(*code, format!("Fund {}", code)))
            .collect()
    }

    fn rising_provider() -> FakeProvider {
        let document = holdings_document(&["105.AAPL"], &[("AAPL", "苹果", "10.00%")]);
        FakeProvider::new()
            .with_document("000001", &document)
            .with_document("000003", &document)
            .with_quote(QuoteSnapshot::new("AAPL", "苹果").with_change_basis_points(125.0))
    }

    #[tokio::test]
    async fn test_failing_entry_is_isolated() {
        let provider = Arc::new(rising_provider());
        let sink = MockDomainEventSink::new();
        let aggregator = aggregator(provider, sink.clone());

        let summary = aggregator
            .fetch_fund_data(&watchlist(&["000001", "000002", "000003"]))
            .await;

        assert_eq!(summary.len(), 3);
        assert_eq!(summary[0].change_percent, 1.25);
        assert_eq!(summary[1].code, "000002");
        assert_eq!(summary[1].change_percent, 0.0);
        assert_eq!(summary[2].change_percent, 1.25);

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            DomainEvent::RefreshCompleted {
                success: false,
                total: 3,
                failed: 1,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_all_succeeding_reports_success() {
        let sink = MockDomainEventSink::new();
        let aggregator = aggregator(Arc::new(rising_provider()), sink.clone());

        aggregator
            .fetch_fund_data(&watchlist(&["000001", "000003"]))
            .await;

        assert!(matches!(
            sink.events()[0],
            DomainEvent::RefreshCompleted { success: true, .. }
        ));
    }

    #[tokio::test]
    async fn test_empty_watchlist_makes_no_requests() {
        let provider = Arc::new(FakeProvider::new());
        let sink = MockDomainEventSink::new();
        let aggregator = aggregator(provider.clone(), sink.clone());

        let summary = aggregator.fetch_fund_data(&[]).await;

        assert!(summary.is_empty());
        assert_eq!(provider.document_requests(), 0);
        assert!(provider.quote_requests().is_empty());
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_summary_keeps_watchlist_order() {
        let slow = holdings_document(&["105.MSFT"], &[("MSFT", "微软", "8.00%")]);
        let fast = holdings_document(&["105.AAPL"], &[("AAPL", "苹果", "8.00%")]);
        let provider = FakeProvider::new()
            .with_document("000010", &slow)
            .with_delay("000010", Duration::from_millis(50))
            .with_document("000020", &fast)
            .with_quote(QuoteSnapshot::new("MSFT", "微软").with_change_basis_points(-80.0))
            .with_quote(QuoteSnapshot::new("AAPL", "苹果").with_change_basis_points(40.0));
        let aggregator = aggregator(Arc::new(provider), MockDomainEventSink::new());

        let summary = aggregator
            .fetch_fund_data(&watchlist(&["000010", "000020"]))
            .await;

        assert_eq!(summary[0].code, "000010");
        assert_eq!(summary[0].change_percent, -0.8);
        assert_eq!(summary[1].code, "000020");
        assert_eq!(summary[1].change_percent, 0.4);
    }

    #[tokio::test]
    async fn test_fund_without_holdings_reports_zero_without_failure() {
        let provider = FakeProvider::new().with_document("000001", "<html></html>");
        let sink = MockDomainEventSink::new();
        let aggregator = aggregator(Arc::new(provider), sink.clone());

        let summary = aggregator.fetch_fund_data(&watchlist(&["000001"])).await;

        assert_eq!(summary[0].change_percent, 0.0);
        assert!(matches!(
            sink.events()[0],
            DomainEvent::RefreshCompleted { success: true, .. }
        ));
    }
}
