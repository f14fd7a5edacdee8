use sqlx::{PgConnection, PgPool};
use uuid::Uuid;
use tracing::error;
use crate::models::EtfHolding;

pub async fn fetch_for_portfolio(
    pool: &PgPool,
    portfolio_id: Uuid,
) -> Result<Vec<EtfHolding>, sqlx::Error> {
    sqlx::query_as::<_, EtfHolding>(
        "SELECT id, portfolio_id, symbol, name, shares, current_price, purchase_price,
                purchase_date, sector, currency, created_at
         FROM etf_holdings
         WHERE portfolio_id = $1
         ORDER BY created_at ASC",
    )
    .bind(portfolio_id)
    .fetch_all(pool)
    .await
}

/// Deletes and reinserts the full holding set in one transaction. An empty
/// slice leaves the portfolio with no holdings.
pub async fn replace_for_portfolio(
    pool: &PgPool,
    portfolio_id: Uuid,
    holdings: &[EtfHolding],
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await.map_err(|e| {
        error!("Failed to begin transaction for portfolio {}: {}", portfolio_id, e);
        e
    })?;

    sqlx::query("DELETE FROM etf_holdings WHERE portfolio_id = $1")
        .bind(portfolio_id)
        .execute(&mut *tx)
        .await?;

    insert_all(&mut *tx, holdings).await?;

    tx.commit().await.map_err(|e| {
        error!("Failed to commit transaction for portfolio {}: {}", portfolio_id, e);
        e
    })?;
    Ok(())
}

pub(crate) async fn insert_all(
    conn: &mut PgConnection,
    holdings: &[EtfHolding],
) -> Result<(), sqlx::Error> {
    for h in holdings {
        sqlx::query(
            "INSERT INTO etf_holdings (id, portfolio_id, symbol, name, shares, current_price,
                                       purchase_price, purchase_date, sector, currency, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(h.id)
        .bind(h.portfolio_id)
        .bind(&h.symbol)
        .bind(&h.name)
        .bind(&h.shares)
        .bind(&h.current_price)
        .bind(&h.purchase_price)
        .bind(h.purchase_date)
        .bind(&h.sector)
        .bind(&h.currency)
        .bind(h.created_at)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}
