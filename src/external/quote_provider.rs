use async_trait::async_trait;
use thiserror::Error;

/// Raw quote fields as reported upstream, before any normalization.
/// Every field is optional; providers routinely omit half of them.
#[derive(Debug, Clone, Default)]
pub struct ProviderQuote {
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    pub exchange: Option<String>,
    pub currency: Option<String>,
    pub current_price: Option<f64>,
    pub regular_market_price: Option<f64>,
    pub previous_close: Option<f64>,
    pub open: Option<f64>,
}

#[derive(Debug, Error)]
pub enum QuoteProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("no data found")]
    NotFound,

    #[error("rate limited")]
    RateLimited,
}

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetches the current quote snapshot for one ticker.
    async fn fetch_quote(&self, ticker: &str) -> Result<ProviderQuote, QuoteProviderError>;

    /// Fetches up to `days` recent daily closing prices, oldest first.
    async fn recent_closes(&self, ticker: &str, days: u32)
        -> Result<Vec<f64>, QuoteProviderError>;
}
