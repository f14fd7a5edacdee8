use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Represents one ETF position inside a portfolio. Holdings have no lifecycle
// of their own; every save replaces the portfolio's full set.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EtfHolding {
    pub id: uuid::Uuid,
    pub portfolio_id: uuid::Uuid,
    pub symbol: String,
    pub name: String,
    pub shares: BigDecimal,
    pub current_price: BigDecimal,
    pub purchase_price: BigDecimal,
    pub purchase_date: NaiveDate,
    pub sector: String,
    pub currency: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// Holding as submitted by the frontend: camelCase keys, prices as plain JSON
// numbers, the purchase date as YYYY-MM-DD text.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingPayload {
    pub symbol: String,
    pub name: String,
    pub shares: f64,
    pub current_price: f64,
    pub purchase_price: f64,
    pub purchase_date: String,
    pub sector: String,
    #[serde(default)]
    pub currency: Option<String>,
}

// Holding as returned to clients: snake_case keys, ids and dates as text.
#[derive(Debug, Serialize)]
pub struct HoldingRecord {
    pub id: String,
    pub portfolio_id: String,
    pub symbol: String,
    pub name: String,
    pub shares: f64,
    pub current_price: f64,
    pub purchase_price: f64,
    pub purchase_date: String,
    pub sector: String,
    pub currency: String,
    pub created_at: String,
}

impl EtfHolding {
    // A bad purchase date or a negative quantity rejects the whole payload.
    pub(crate) fn from_payload(
        portfolio_id: uuid::Uuid,
        payload: HoldingPayload,
    ) -> Result<Self, String> {
        let purchase_date = NaiveDate::parse_from_str(&payload.purchase_date, "%Y-%m-%d")
            .map_err(|_| {
                format!(
                    "Invalid purchase date '{}' (expected YYYY-MM-DD)",
                    payload.purchase_date
                )
            })?;

        let shares = decimal_field(payload.shares, "shares")?;
        let current_price = decimal_field(payload.current_price, "currentPrice")?;
        let purchase_price = decimal_field(payload.purchase_price, "purchasePrice")?;

        Ok(Self {
            id: uuid::Uuid::new_v4(),
            portfolio_id,
            symbol: payload.symbol,
            name: payload.name,
            shares,
            current_price,
            purchase_price,
            purchase_date,
            sector: payload.sector,
            currency: payload.currency.unwrap_or_else(|| "USD".to_string()),
            created_at: chrono::Utc::now(),
        })
    }
}

// Share and price quantities must be finite and non-negative.
fn decimal_field(value: f64, field: &str) -> Result<BigDecimal, String> {
    if value < 0.0 {
        return Err(format!("Field '{}' cannot be negative", field));
    }
    BigDecimal::try_from(value).map_err(|_| format!("Field '{}' is not a valid number", field))
}

impl From<EtfHolding> for HoldingRecord {
    fn from(h: EtfHolding) -> Self {
        Self {
            id: h.id.to_string(),
            portfolio_id: h.portfolio_id.to_string(),
            symbol: h.symbol,
            name: h.name,
            shares: h.shares.to_f64().unwrap_or(0.0),
            current_price: h.current_price.to_f64().unwrap_or(0.0),
            purchase_price: h.purchase_price.to_f64().unwrap_or(0.0),
            purchase_date: h.purchase_date.format("%Y-%m-%d").to_string(),
            sector: h.sector,
            currency: h.currency,
            created_at: h.created_at.to_rfc3339(),
        }
    }
}
