use serde::{Deserialize, Serialize};

/// Quote payload served by `GET /api/stock/{symbol}`.
///
/// `current_price` is omitted from the JSON body entirely when no live or
/// recent price could be found, so clients can distinguish "no price" from
/// a price of zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockQuote {
    pub symbol: String,
    pub name: String,
    pub exchange: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    pub currency: String,
}

/// Where a resolved quote came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteSource {
    /// Live data from the upstream quote provider.
    Provider,
    /// Built from the static catalog after the provider failed.
    Fallback,
}

#[derive(Debug, Clone)]
pub struct ResolvedQuote {
    pub quote: StockQuote,
    pub source: QuoteSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_price_is_omitted_from_json() {
        let quote = StockQuote {
            symbol: "069500".into(),
            name: "KODEX 200".into(),
            exchange: "KRX".into(),
            country: "KR".into(),
            current_price: None,
            currency: "KRW".into(),
        };

        let json = serde_json::to_value(&quote).unwrap();
        assert!(json.get("current_price").is_none());
    }

    #[test]
    fn test_present_price_is_serialized() {
        let quote = StockQuote {
            symbol: "SPY".into(),
            name: "SPDR S&P 500 ETF Trust".into(),
            exchange: "ARCA".into(),
            country: "US".into(),
            current_price: Some(512.34),
            currency: "USD".into(),
        };

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["current_price"], 512.34);
    }
}
