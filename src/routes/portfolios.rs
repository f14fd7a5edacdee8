use axum::extract::{Path, Query, State};
use axum::{Json, Router};
use axum::routing::{delete, get, post, put};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Portfolio, PortfolioSaveRequest, PortfolioWithHoldings, DEFAULT_USER_ID};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(save_portfolio).get(fetch_portfolios))
        .route("/:id", get(get_portfolio))
        .route("/:id", put(update_portfolio))
        .route("/:id", delete(delete_portfolio))
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    user_id: Option<String>,
}

#[axum::debug_handler]
pub async fn save_portfolio(
    State(state): State<AppState>,
    Json(data): Json<PortfolioSaveRequest>,
) -> Result<Json<Value>, AppError> {
    info!("POST /api/portfolios - Saving portfolio '{}'", data.name);
    let PortfolioSaveRequest {
        name,
        description,
        etf_holdings,
    } = data;

    let portfolio = services::portfolio_service::create(&state.pool, name, description)
        .await
        .map_err(|e| {
            error!("Failed to create portfolio: {}", e);
            e
        })?;

    // Second store call, not part of the insert above. A holdings failure
    // leaves the just-created portfolio behind with no holdings.
    services::portfolio_service::replace_holdings(&state.pool, portfolio.id, etf_holdings)
        .await
        .map_err(|e| {
            error!("Failed to save holdings for portfolio {}: {}", portfolio.id, e);
            e
        })?;

    Ok(Json(json!({
        "message": "Portfolio saved successfully",
        "portfolio_id": portfolio.id,
        "portfolio": portfolio
    })))
}

pub async fn fetch_portfolios(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Portfolio>>, AppError> {
    let user_id = params.user_id.unwrap_or_else(|| DEFAULT_USER_ID.to_string());
    info!("GET /api/portfolios - Listing portfolios for {}", user_id);
    let portfolios = services::portfolio_service::list_for_user(&state.pool, &user_id)
        .await
        .map_err(|e| {
            error!("Failed to list portfolios for {}: {}", user_id, e);
            e
        })?;
    Ok(Json(portfolios))
}

pub async fn get_portfolio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PortfolioWithHoldings>, AppError> {
    info!("GET /api/portfolios/{} - Fetching portfolio", id);
    let portfolio = services::portfolio_service::get_with_holdings(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to fetch portfolio {}: {}", id, e);
            e
        })?;
    Ok(Json(portfolio))
}

pub async fn update_portfolio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<PortfolioSaveRequest>,
) -> Result<Json<Value>, AppError> {
    info!("PUT /api/portfolios/{} - Updating portfolio", id);
    let portfolio = services::portfolio_service::update(&state.pool, id, data)
        .await
        .map_err(|e| {
            error!("Failed to update portfolio {}: {}", id, e);
            e
        })?;
    Ok(Json(json!({
        "message": "Portfolio updated successfully",
        "portfolio_id": portfolio.id,
        "portfolio": portfolio
    })))
}

pub async fn delete_portfolio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    info!("DELETE /api/portfolios/{} - Deleting portfolio", id);
    services::portfolio_service::delete(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to delete portfolio {}: {}", id, e);
            e
        })?;
    Ok(Json(json!({ "message": "Portfolio deleted successfully" })))
}
