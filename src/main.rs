mod app;
mod config;
mod db;
mod errors;
mod external;
mod logging;
mod models;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

use crate::config::DatabaseConfig;
use crate::external::yahoo::YahooFinanceProvider;
use crate::logging::{init_logging, LoggingConfig};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    init_logging(LoggingConfig::from_env())?;

    // DATABASE_URL wins; otherwise the URL is assembled from DB_* variables.
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DatabaseConfig::from_env().url());

    let pool = PgPoolOptions::new()
        .min_connections(2)
        .max_connections(10)
        .connect(&database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("✅ Database ready");

    let state = AppState {
        pool,
        quote_provider: Arc::new(YahooFinanceProvider::new()),
    };
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 ETF Rebalancer API running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
