//! Domain event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain events emitted by core services.
///
/// Runtime adapters translate them into platform-specific actions
/// (status messages, SSE pushes, tree redraws).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A watchlist refresh finished. Emitted once per non-empty refresh,
    /// after every fund has settled.
    RefreshCompleted {
        success: bool,
        /// Number of funds in the refreshed watchlist
        total: usize,
        /// Number of funds whose estimation failed
        failed: usize,
        completed_at: DateTime<Utc>,
    },
}

impl DomainEvent {
    pub fn refresh_completed(success: bool, total: usize, failed: usize) -> Self {
        Self::RefreshCompleted {
            success,
            total,
            failed,
            completed_at: Utc::now(),
        }
    }
}
