use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;

use leekfund_core::watchlist::{WatchlistEntry, WatchlistSummaryItem};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddFundRequest {
    code: String,
    #[serde(default)]
    name: String,
    amount: Option<f64>,
    proportion: Option<f64>,
}

async fn list_watchlist(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<WatchlistEntry>>> {
    let entries = state.watchlist_service.list().await?;
    Ok(Json(entries))
}

async fn add_fund(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddFundRequest>,
) -> ApiResult<(StatusCode, Json<WatchlistEntry>)> {
    let entry = WatchlistEntry {
        amount: req.amount,
        proportion: req.proportion,
        ..WatchlistEntry::new(req.code, req.name)
    };
    let added = state.watchlist_service.add(entry).await?;
    Ok((StatusCode::CREATED, Json(added)))
}

async fn remove_fund(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.watchlist_service.remove(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn move_fund_to_top(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.watchlist_service.move_to_top(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Refresh every fund now and return the new summary.
async fn refresh_watchlist(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<WatchlistSummaryItem>>> {
    let summary = state.watchlist_service.refresh().await?;
    Ok(Json(summary))
}

async fn get_summary(State(state): State<Arc<AppState>>) -> Json<Vec<WatchlistSummaryItem>> {
    Json(state.watchlist_service.last_summary())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/watchlist", get(list_watchlist).post(add_fund))
        .route("/watchlist/{code}", delete(remove_fund))
        .route("/watchlist/{code}/top", post(move_fund_to_top))
        .route("/watchlist/refresh", post(refresh_watchlist))
        .route("/watchlist/summary", get(get_summary))
}
