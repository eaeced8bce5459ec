//! Background scheduler for periodic watchlist refresh.

use std::sync::Arc;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::main_lib::AppState;

/// Starts the background refresh scheduler.
///
/// The first refresh runs immediately. Refreshes are awaited one after the
/// other, so a slow refresh delays the next tick instead of overlapping it.
pub fn start_refresh_scheduler(state: Arc<AppState>, period: Duration) {
    tokio::spawn(async move {
        info!("Watchlist refresh scheduler started ({:?} interval)", period);

        let mut refresh_interval = interval(period);
        refresh_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            refresh_interval.tick().await;
            run_scheduled_refresh(&state).await;
        }
    });
}

/// Runs a single scheduled refresh.
async fn run_scheduled_refresh(state: &Arc<AppState>) {
    match state.watchlist_service.refresh().await {
        Ok(summary) if summary.is_empty() => {
            debug!("Scheduled refresh skipped: watchlist is empty");
        }
        Ok(summary) => {
            debug!("Scheduled refresh completed for {} funds", summary.len());
        }
        Err(e) => {
            warn!("Scheduled refresh failed: {}", e);
        }
    }
}
