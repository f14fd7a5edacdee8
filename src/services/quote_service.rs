use regex::Regex;
use tracing::{error, info, warn};

use crate::external::quote_provider::{ProviderQuote, QuoteProvider};
use crate::models::symbol_catalog;
use crate::models::{QuoteSource, ResolvedQuote, StockQuote};

/// Resolves a user-entered symbol to a displayable quote.
///
/// This never fails: a dead provider or unknown symbol degrades to the
/// static catalog (or a generated placeholder) tagged `QuoteSource::Fallback`.
pub async fn resolve(provider: &dyn QuoteProvider, symbol: &str) -> ResolvedQuote {
    let symbol = symbol.trim().to_uppercase();

    // Six decimal digits means a Korean listing, anything else is foreign.
    let korean = Regex::new(r"^\d{6}$").unwrap();
    if korean.is_match(&symbol) {
        resolve_korean(provider, &symbol).await
    } else {
        resolve_foreign(provider, &symbol).await
    }
}

async fn resolve_korean(provider: &dyn QuoteProvider, symbol: &str) -> ResolvedQuote {
    // Yahoo lists KRX instruments under a .KS suffix.
    let yahoo_symbol = format!("{symbol}.KS");

    let raw = match provider.fetch_quote(&yahoo_symbol).await {
        Ok(raw) => raw,
        Err(e) => {
            error!("✗ Quote lookup failed for {}: {}", yahoo_symbol, e);
            return korean_fallback(symbol);
        }
    };

    // Providers sometimes echo the ticker back as the short name.
    let name = raw
        .long_name
        .clone()
        .filter(|n| !n.is_empty())
        .or_else(|| raw.short_name.clone().filter(|n| !n.is_empty()))
        .filter(|n| n != &yahoo_symbol)
        .or_else(|| symbol_catalog::korean_etf_name(symbol).map(str::to_string))
        .unwrap_or_else(|| format!("Symbol {symbol}"));

    let exchange = raw
        .exchange
        .clone()
        .filter(|e| symbol_catalog::KOREAN_EXCHANGES.contains(&e.as_str()))
        .unwrap_or_else(|| "KRX".to_string());

    let mut current_price = pick_price(&raw);
    if current_price.is_none() {
        current_price = trailing_close(provider, &yahoo_symbol, 5).await;
    }

    // KRX quotes are in won, normally four digits or more. A single-digit
    // value means the provider converted the price to another currency.
    if let Some(price) = current_price {
        if price < 10.0 {
            info!(
                "Price {} for {} looks currency-converted, re-checking the daily close",
                price, yahoo_symbol
            );
            if let Some(close) = trailing_close(provider, &yahoo_symbol, 1).await {
                if close > 1000.0 {
                    info!("✓ Won-denominated close {} found for {}", close, yahoo_symbol);
                    current_price = Some(close);
                }
            }
        }
    }

    ResolvedQuote {
        quote: StockQuote {
            symbol: symbol.to_string(),
            name,
            exchange,
            country: "KR".to_string(),
            current_price,
            currency: "KRW".to_string(),
        },
        source: QuoteSource::Provider,
    }
}

fn korean_fallback(symbol: &str) -> ResolvedQuote {
    let name = symbol_catalog::korean_etf_name(symbol)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Symbol {symbol}"));

    ResolvedQuote {
        quote: StockQuote {
            symbol: symbol.to_string(),
            name,
            exchange: "KRX".to_string(),
            country: "KR".to_string(),
            current_price: None,
            currency: "KRW".to_string(),
        },
        source: QuoteSource::Fallback,
    }
}

async fn resolve_foreign(provider: &dyn QuoteProvider, symbol: &str) -> ResolvedQuote {
    let raw = match provider.fetch_quote(symbol).await {
        Ok(raw) => raw,
        Err(e) => {
            error!("✗ Quote lookup failed for {}: {}", symbol, e);
            return foreign_fallback(symbol);
        }
    };

    let name = raw
        .long_name
        .clone()
        .filter(|n| !n.is_empty())
        .or_else(|| raw.short_name.clone().filter(|n| !n.is_empty()))
        .unwrap_or_else(|| format!("{symbol} ETF"));

    let exchange = raw
        .exchange
        .clone()
        .unwrap_or_else(|| "NASDAQ".to_string());

    let country = symbol_catalog::country_for_exchange(&exchange).to_string();

    let mut current_price = pick_price(&raw);
    if current_price.is_none() {
        current_price = trailing_close(provider, symbol, 5).await;
    }

    let currency = raw.currency.unwrap_or_else(|| "USD".to_string());

    ResolvedQuote {
        quote: StockQuote {
            symbol: symbol.to_string(),
            name,
            exchange,
            country,
            current_price,
            currency,
        },
        source: QuoteSource::Provider,
    }
}

fn foreign_fallback(symbol: &str) -> ResolvedQuote {
    let quote = match symbol_catalog::famous_etf(symbol) {
        Some(etf) => StockQuote {
            symbol: symbol.to_string(),
            name: etf.name.to_string(),
            exchange: etf.exchange.to_string(),
            country: etf.country.to_string(),
            current_price: None,
            currency: "USD".to_string(),
        },
        None => StockQuote {
            symbol: symbol.to_string(),
            name: format!("{symbol} ETF"),
            exchange: "US".to_string(),
            country: "US".to_string(),
            current_price: None,
            currency: "USD".to_string(),
        },
    };

    ResolvedQuote {
        quote,
        source: QuoteSource::Fallback,
    }
}

fn pick_price(raw: &ProviderQuote) -> Option<f64> {
    raw.current_price
        .or(raw.regular_market_price)
        .or(raw.previous_close)
        .or(raw.open)
}

async fn trailing_close(provider: &dyn QuoteProvider, ticker: &str, days: u32) -> Option<f64> {
    match provider.recent_closes(ticker, days).await {
        Ok(closes) => closes.last().copied(),
        Err(e) => {
            warn!("⚠️ No recent closes for {}: {}", ticker, e);
            None
        }
    }
}
