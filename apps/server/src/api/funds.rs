use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use leekfund_core::holdings::FundAggregate;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    key: String,
}

#[derive(Serialize)]
struct FundSearchResult {
    code: String,
    name: String,
}

/// Search funds by code or name.
async fn search_funds(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<FundSearchResult>>> {
    let hits = state.fund_service.search_funds(&query.key).await?;
    let results = hits
        .into_iter()
        .map(|hit| FundSearchResult {
            code: hit.code,
            name: hit.name,
        })
        .collect();
    Ok(Json(results))
}

/// Estimated holdings detail of one fund.
async fn get_fund_holdings(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<FundAggregate>> {
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ApiError::BadRequest(format!("Invalid fund code: {}", code)));
    }
    let aggregate = state.fund_service.find_one(&code).await?;
    Ok(Json(aggregate))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/funds/search", get(search_funds))
        .route("/funds/{code}/holdings", get(get_fund_holdings))
}
