use axum::{
    Json, Router,
    routing::get,
};
use serde_json::json;
use tracing::info;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
}

async fn root() -> Json<serde_json::Value> {
    info!("GET / - Liveness check");
    Json(json!({ "message": "ETF Rebalancer API" }))
}
