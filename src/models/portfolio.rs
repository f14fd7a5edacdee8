use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::holding::{EtfHolding, HoldingPayload, HoldingRecord};

// Owner assigned to every portfolio until user accounts exist.
pub const DEFAULT_USER_ID: &str = "anonymous";

// Represents a named basket of ETF holdings saved by one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Portfolio {
    pub id: uuid::Uuid,
    pub name: String,
    pub description: Option<String>,
    pub user_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Portfolio {
    pub(crate) fn new(name: String, description: Option<String>, user_id: String) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: uuid::Uuid::new_v4(),
            name,
            description,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }
}

// Body shared by the create and update endpoints. Holdings always arrive as
// the complete set; there is no partial-update form.
#[derive(Debug, Deserialize)]
pub struct PortfolioSaveRequest {
    pub name: String,
    pub description: Option<String>,
    pub etf_holdings: Vec<HoldingPayload>,
}

#[derive(Debug, Serialize)]
pub struct PortfolioWithHoldings {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub holdings: Vec<HoldingRecord>,
}

impl PortfolioWithHoldings {
    pub(crate) fn from_parts(portfolio: Portfolio, holdings: Vec<EtfHolding>) -> Self {
        Self {
            id: portfolio.id.to_string(),
            name: portfolio.name,
            description: portfolio.description,
            user_id: portfolio.user_id,
            created_at: portfolio.created_at.to_rfc3339(),
            updated_at: portfolio.updated_at.to_rfc3339(),
            holdings: holdings.into_iter().map(HoldingRecord::from).collect(),
        }
    }
}
