use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use leekfund_core::{
    events::DomainEventSink,
    holdings::{FundService, FundServiceTrait},
    watchlist::{WatchlistAggregator, WatchlistService, WatchlistServiceTrait},
};
use leekfund_market_data::{EastMoneyProvider, FundDataProvider};

use crate::{
    config::Config, domain_events::WebDomainEventSink, events::EventBus,
    watchlist_store::JsonWatchlistRepository,
};

pub struct AppState {
    pub fund_service: Arc<dyn FundServiceTrait>,
    pub watchlist_service: Arc<dyn WatchlistServiceTrait>,
    pub event_bus: EventBus,
}

pub fn init_tracing() {
    let log_format = std::env::var("LF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = EastMoneyProvider::with_options(config.request_timeout, config.holdings_top_n)?;
    build_state_with_provider(config, Arc::new(provider)).await
}

/// Wires the services around an arbitrary fund data provider.
pub async fn build_state_with_provider(
    config: &Config,
    provider: Arc<dyn FundDataProvider>,
) -> anyhow::Result<Arc<AppState>> {
    tracing::info!(
        "Watchlist file: {}, data provider: {}",
        config.watchlist_path.display(),
        provider.id()
    );

    let event_bus = EventBus::new(256);
    let domain_event_sink: Arc<dyn DomainEventSink> =
        Arc::new(WebDomainEventSink::new(event_bus.clone()));

    let fund_service: Arc<dyn FundServiceTrait> = Arc::new(FundService::new(provider));
    let aggregator = Arc::new(WatchlistAggregator::new(
        fund_service.clone(),
        domain_event_sink,
    ));
    let repository = Arc::new(JsonWatchlistRepository::new(config.watchlist_path.clone()));
    let watchlist_service: Arc<dyn WatchlistServiceTrait> =
        Arc::new(WatchlistService::new(repository, aggregator));

    // Fail fast on an unreadable watchlist file.
    let entries = watchlist_service.list().await?;
    tracing::info!("Loaded {} watchlist entries", entries.len());

    Ok(Arc::new(AppState {
        fund_service,
        watchlist_service,
        event_bus,
    }))
}
