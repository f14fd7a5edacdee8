use crate::external::quote_provider::{ProviderQuote, QuoteProvider, QuoteProviderError};
use async_trait::async_trait;
use serde::Deserialize;

/// Yahoo Finance provider - free API, no key required
///
/// Quote snapshots come from the v7 quote endpoint, recent closes from the
/// v8 chart endpoint. Both are unauthenticated but rate limited, so 429s
/// get their own error variant.
pub struct YahooFinanceProvider {
    client: reqwest::Client,
}

impl YahooFinanceProvider {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("Mozilla/5.0 (compatible; EtfRebalancer/0.1)")
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }
}

impl Default for YahooFinanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

// Minimal response structs (only what we need)

#[derive(Debug, Deserialize)]
struct YahooQuoteResponse {
    #[serde(rename = "quoteResponse")]
    quote_response: YahooQuoteResult,
}

#[derive(Debug, Deserialize)]
struct YahooQuoteResult {
    result: Option<Vec<YahooQuoteEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct YahooQuoteEntry {
    long_name: Option<String>,
    short_name: Option<String>,
    full_exchange_name: Option<String>,
    exchange: Option<String>,
    currency: Option<String>,
    current_price: Option<f64>,
    regular_market_price: Option<f64>,
    previous_close: Option<f64>,
    regular_market_previous_close: Option<f64>,
    open: Option<f64>,
    regular_market_open: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooChartResult>>,
    error: Option<YahooChartError>,
}

#[derive(Debug, Deserialize)]
struct YahooChartError {
    description: String,
}

#[derive(Debug, Deserialize)]
struct YahooChartResult {
    indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooIndicators {
    quote: Vec<YahooClose>,
}

#[derive(Debug, Deserialize)]
struct YahooClose {
    close: Vec<Option<f64>>,
}

#[async_trait]
impl QuoteProvider for YahooFinanceProvider {
    async fn fetch_quote(&self, ticker: &str) -> Result<ProviderQuote, QuoteProviderError> {
        let url = format!(
            "https://query1.finance.yahoo.com/v7/finance/quote?symbols={ticker}"
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| QuoteProviderError::Network(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(QuoteProviderError::RateLimited);
        }
        if !resp.status().is_success() {
            return Err(QuoteProviderError::BadResponse(format!(
                "HTTP {}",
                resp.status()
            )));
        }

        let body: YahooQuoteResponse = resp
            .json()
            .await
            .map_err(|e| QuoteProviderError::Parse(e.to_string()))?;

        let entry = body
            .quote_response
            .result
            .and_then(|mut r| {
                if r.is_empty() {
                    None
                } else {
                    Some(r.remove(0))
                }
            })
            .ok_or(QuoteProviderError::NotFound)?;

        // Yahoo spells some fields two ways depending on the quote type.
        Ok(ProviderQuote {
            long_name: entry.long_name,
            short_name: entry.short_name,
            exchange: entry.full_exchange_name.or(entry.exchange),
            currency: entry.currency,
            current_price: entry.current_price,
            regular_market_price: entry.regular_market_price,
            previous_close: entry.previous_close.or(entry.regular_market_previous_close),
            open: entry.open.or(entry.regular_market_open),
        })
    }

    async fn recent_closes(
        &self,
        ticker: &str,
        days: u32,
    ) -> Result<Vec<f64>, QuoteProviderError> {
        // Yahoo supports ranges like "1d", "5d", "1mo". We map days roughly.
        let range = if days <= 1 { "1d" } else if days <= 5 { "5d" } else { "1mo" };

        let url = format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{ticker}?range={range}&interval=1d"
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| QuoteProviderError::Network(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(QuoteProviderError::RateLimited);
        }
        if !resp.status().is_success() {
            if resp.status() == reqwest::StatusCode::NOT_FOUND {
                return Err(QuoteProviderError::NotFound);
            }
            return Err(QuoteProviderError::BadResponse(format!(
                "HTTP {}",
                resp.status()
            )));
        }

        let body = resp
            .json::<YahooChartResponse>()
            .await
            .map_err(|e| QuoteProviderError::Parse(e.to_string()))?;

        if let Some(error) = body.chart.error {
            if error.description.contains("No data found") {
                return Err(QuoteProviderError::NotFound);
            }
            return Err(QuoteProviderError::BadResponse(error.description));
        }

        let result = body
            .chart
            .result
            .and_then(|mut r| {
                if r.is_empty() {
                    None
                } else {
                    Some(r.remove(0))
                }
            })
            .ok_or(QuoteProviderError::NotFound)?;

        // skip missing closes (market holidays etc.)
        let closes: Vec<f64> = result
            .indicators
            .quote
            .into_iter()
            .next()
            .map(|q| q.close.into_iter().flatten().collect())
            .unwrap_or_default();

        if closes.is_empty() {
            return Err(QuoteProviderError::NotFound);
        }

        Ok(closes)
    }
}
