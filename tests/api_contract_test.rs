/// API Contract Tests
///
/// Tests for the public HTTP surface:
/// - Quote lookup (GET /api/stock/{symbol})
/// - Portfolio save (POST /api/portfolios)
/// - Portfolio list (GET /api/portfolios?user_id=...)
/// - Portfolio detail (GET /api/portfolios/{id})
/// - Portfolio update (PUT /api/portfolios/{id})
/// - Portfolio delete (DELETE /api/portfolios/{id})
///
/// NOTE: These tests validate request/response structures and business rules.
/// Full integration tests against a live database require running the server.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

// ---------------------------------------------------------------------------
// Request / Response Structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
struct PortfolioSaveRequest {
    name: String,
    #[serde(default)]
    description: Option<String>,
    etf_holdings: Vec<HoldingPayload>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HoldingPayload {
    symbol: String,
    name: String,
    shares: f64,
    current_price: f64,
    purchase_price: f64,
    purchase_date: String,
    sector: String,
    #[serde(default)]
    currency: Option<String>,
}

#[derive(Debug, Serialize)]
struct StockQuote {
    symbol: String,
    name: String,
    exchange: String,
    country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    current_price: Option<f64>,
    currency: String,
}

// ---------------------------------------------------------------------------
// Business Rules
// ---------------------------------------------------------------------------

fn is_domestic_symbol(symbol: &str) -> bool {
    let normalized = symbol.trim().to_uppercase();
    regex::Regex::new(r"^\d{6}$").unwrap().is_match(&normalized)
}

fn validate_holding(payload: &HoldingPayload) -> Result<(), String> {
    NaiveDate::parse_from_str(&payload.purchase_date, "%Y-%m-%d").map_err(|_| {
        format!(
            "Invalid purchase date '{}' (expected YYYY-MM-DD)",
            payload.purchase_date
        )
    })?;
    for (value, field) in [
        (payload.shares, "shares"),
        (payload.current_price, "currentPrice"),
        (payload.purchase_price, "purchasePrice"),
    ] {
        if value < 0.0 {
            return Err(format!("Field '{}' cannot be negative", field));
        }
    }
    Ok(())
}

fn status_for_error(kind: &str) -> u16 {
    match kind {
        "not_found" => 404,
        // Rejected saves and store failures both answer 500; only the body
        // message differs.
        _ => 500,
    }
}

// ---------------------------------------------------------------------------
// Symbol Classification Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod symbol_classification {
    use super::*;

    #[test]
    fn test_six_digit_codes_are_domestic() {
        assert!(is_domestic_symbol("069500"));
        assert!(is_domestic_symbol("114800"));
        assert!(is_domestic_symbol("  251350 "));
    }

    #[test]
    fn test_alphabetic_tickers_are_foreign() {
        assert!(!is_domestic_symbol("SPY"));
        assert!(!is_domestic_symbol("QQQ"));
        assert!(!is_domestic_symbol("spy"));
    }

    #[test]
    fn test_wrong_digit_counts_are_foreign() {
        assert!(!is_domestic_symbol("12345"));
        assert!(!is_domestic_symbol("1234567"));
    }

    #[test]
    fn test_mixed_codes_are_foreign() {
        assert!(!is_domestic_symbol("069500A"));
        assert!(!is_domestic_symbol("069500.KS"));
    }
}

// ---------------------------------------------------------------------------
// Request Parsing Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod request_parsing {
    use super::*;

    #[test]
    fn test_save_request_parses_camel_case_holdings() {
        let body = json!({
            "name": "My Portfolio",
            "description": "Long-term savings",
            "etf_holdings": [{
                "symbol": "SPY",
                "name": "SPDR S&P 500 ETF Trust",
                "shares": 10.5,
                "currentPrice": 512.34,
                "purchasePrice": 440.0,
                "purchaseDate": "2023-05-01",
                "sector": "Equity",
                "currency": "USD"
            }]
        });

        let req: PortfolioSaveRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.name, "My Portfolio");
        assert_eq!(req.etf_holdings.len(), 1);
        assert_eq!(req.etf_holdings[0].current_price, 512.34);
        assert_eq!(req.etf_holdings[0].purchase_date, "2023-05-01");
    }

    #[test]
    fn test_description_and_currency_are_optional() {
        let body = json!({
            "name": "Bare",
            "etf_holdings": [{
                "symbol": "069500",
                "name": "KODEX 200",
                "shares": 3.0,
                "currentPrice": 34500.0,
                "purchasePrice": 33000.0,
                "purchaseDate": "2024-01-15",
                "sector": "Index"
            }]
        });

        let req: PortfolioSaveRequest = serde_json::from_value(body).unwrap();
        assert!(req.description.is_none());
        assert!(req.etf_holdings[0].currency.is_none());
    }

    #[test]
    fn test_empty_holdings_list_is_accepted() {
        let body = json!({ "name": "Empty", "etf_holdings": [] });
        let req: PortfolioSaveRequest = serde_json::from_value(body).unwrap();
        assert!(req.etf_holdings.is_empty());
    }

    #[test]
    fn test_snake_case_price_keys_are_rejected() {
        let body = json!({
            "name": "Wrong casing",
            "etf_holdings": [{
                "symbol": "SPY",
                "name": "SPDR S&P 500 ETF Trust",
                "shares": 1.0,
                "current_price": 512.34,
                "purchase_price": 440.0,
                "purchase_date": "2023-05-01",
                "sector": "Equity"
            }]
        });

        assert!(serde_json::from_value::<PortfolioSaveRequest>(body).is_err());
    }
}

// ---------------------------------------------------------------------------
// Holding Validation Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod holding_validation {
    use super::*;

    fn holding(date: &str) -> HoldingPayload {
        HoldingPayload {
            symbol: "SPY".into(),
            name: "SPDR S&P 500 ETF Trust".into(),
            shares: 2.0,
            current_price: 500.0,
            purchase_price: 450.0,
            purchase_date: date.into(),
            sector: "Equity".into(),
            currency: None,
        }
    }

    #[test]
    fn test_hyphenated_iso_date_is_valid() {
        assert!(validate_holding(&holding("2023-05-01")).is_ok());
    }

    #[test]
    fn test_slash_date_is_rejected() {
        assert!(validate_holding(&holding("2023/05/01")).is_err());
    }

    #[test]
    fn test_out_of_range_date_is_rejected() {
        assert!(validate_holding(&holding("2023-13-01")).is_err());
    }

    #[test]
    fn test_negative_shares_are_rejected() {
        let mut h = holding("2023-05-01");
        h.shares = -0.5;
        let err = validate_holding(&h).unwrap_err();
        assert!(err.contains("shares"));
    }

    #[test]
    fn test_zero_quantities_are_allowed() {
        let mut h = holding("2023-05-01");
        h.shares = 0.0;
        h.current_price = 0.0;
        assert!(validate_holding(&h).is_ok());
    }
}

// ---------------------------------------------------------------------------
// Response Shape Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod response_shapes {
    use super::*;

    #[test]
    fn test_save_response_carries_id_message_and_record() {
        let portfolio_id = uuid::Uuid::new_v4();
        let response = json!({
            "message": "Portfolio saved successfully",
            "portfolio_id": portfolio_id,
            "portfolio": {
                "id": portfolio_id,
                "name": "My Portfolio",
                "description": null,
                "user_id": "anonymous",
                "created_at": "2024-01-15T09:30:00Z",
                "updated_at": "2024-01-15T09:30:00Z"
            }
        });

        assert_eq!(response["message"], "Portfolio saved successfully");
        assert_eq!(response["portfolio_id"], json!(portfolio_id));
        assert_eq!(response["portfolio"]["user_id"], "anonymous");
    }

    #[test]
    fn test_delete_response_is_message_only() {
        let response = json!({ "message": "Portfolio deleted successfully" });
        assert_eq!(response.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_detail_response_nests_holdings_in_snake_case() {
        let response = json!({
            "id": "0c9f0dd4-3f4a-46a5-bb5a-97d4edfdb5b3",
            "name": "My Portfolio",
            "description": null,
            "user_id": "anonymous",
            "created_at": "2024-01-15T09:30:00+00:00",
            "updated_at": "2024-01-15T09:30:00+00:00",
            "holdings": [{
                "id": "a3a5b2a8-4cf2-4f3e-8ef5-5ad2a4c0e1aa",
                "portfolio_id": "0c9f0dd4-3f4a-46a5-bb5a-97d4edfdb5b3",
                "symbol": "SPY",
                "name": "SPDR S&P 500 ETF Trust",
                "shares": 10.5,
                "current_price": 512.34,
                "purchase_price": 440.0,
                "purchase_date": "2023-05-01",
                "sector": "Equity",
                "currency": "USD",
                "created_at": "2024-01-15T09:30:00+00:00"
            }]
        });

        let holding = &response["holdings"][0];
        assert!(holding.get("current_price").is_some());
        assert!(holding.get("currentPrice").is_none());

        let date = holding["purchase_date"].as_str().unwrap();
        assert!(NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_quote_with_price_serializes_all_fields() {
        let quote = StockQuote {
            symbol: "SPY".into(),
            name: "SPDR S&P 500 ETF Trust".into(),
            exchange: "ARCA".into(),
            country: "US".into(),
            current_price: Some(512.34),
            currency: "USD".into(),
        };

        let value = serde_json::to_value(&quote).unwrap();
        assert_eq!(value["current_price"], 512.34);
        assert_eq!(value["currency"], "USD");
    }

    #[test]
    fn test_quote_without_price_omits_the_field() {
        let quote = StockQuote {
            symbol: "069500".into(),
            name: "KODEX 200".into(),
            exchange: "KRX".into(),
            country: "KR".into(),
            current_price: None,
            currency: "KRW".into(),
        };

        let value = serde_json::to_value(&quote).unwrap();
        assert!(value.get("current_price").is_none());
    }
}

// ---------------------------------------------------------------------------
// Error Mapping Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod error_mapping {
    use super::*;

    #[test]
    fn test_missing_portfolio_maps_to_404() {
        assert_eq!(status_for_error("not_found"), 404);
    }

    #[test]
    fn test_rejected_save_maps_to_500() {
        assert_eq!(status_for_error("validation"), 500);
    }

    #[test]
    fn test_store_failure_maps_to_500() {
        assert_eq!(status_for_error("database"), 500);
    }
}
