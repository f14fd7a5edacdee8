use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::{info, warn};

use crate::models::{QuoteSource, StockQuote};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/:symbol", get(get_stock_info))
}

/// GET /api/stock/{symbol}
///
/// Always answers 200 with a quote; unknown symbols and provider outages
/// degrade to catalog fallbacks rather than an error.
pub async fn get_stock_info(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Json<StockQuote> {
    info!("GET /api/stock/{} - Resolving quote", symbol);
    let resolved = services::quote_service::resolve(state.quote_provider.as_ref(), &symbol).await;
    if resolved.source == QuoteSource::Fallback {
        warn!("⚠️ Serving fallback quote for {}", symbol);
    }
    Json(resolved.quote)
}
