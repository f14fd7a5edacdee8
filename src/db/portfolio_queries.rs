use sqlx::PgPool;
use uuid::Uuid;
use tracing::error;
use crate::db::holding_queries;
use crate::models::{EtfHolding, Portfolio};

pub async fn insert(pool: &PgPool, input: Portfolio) -> Result<Portfolio, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>(
        "INSERT INTO portfolios (id, name, description, user_id, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id, name, description, user_id, created_at, updated_at",
    )
    .bind(input.id)
    .bind(input.name)
    .bind(input.description)
    .bind(input.user_id)
    .bind(input.created_at)
    .bind(input.updated_at)
    .fetch_one(pool)
    .await
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Option<Portfolio>, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>(
        "SELECT id, name, description, user_id, created_at, updated_at
         FROM portfolios
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn fetch_for_user(pool: &PgPool, user_id: &str) -> Result<Vec<Portfolio>, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>(
        "SELECT id, name, description, user_id, created_at, updated_at
         FROM portfolios
         WHERE user_id = $1
         ORDER BY updated_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Updates the portfolio row and swaps its holdings in one transaction.
/// Returns `None` without side effects when no row matches `id`.
pub async fn update_with_holdings(
    pool: &PgPool,
    id: Uuid,
    name: String,
    description: Option<String>,
    holdings: &[EtfHolding],
) -> Result<Option<Portfolio>, sqlx::Error> {
    let mut tx = pool.begin().await.map_err(|e| {
        error!("Failed to begin transaction for portfolio {}: {}", id, e);
        e
    })?;

    let updated = sqlx::query_as::<_, Portfolio>(
        "UPDATE portfolios
         SET name = $1, description = $2, updated_at = NOW()
         WHERE id = $3
         RETURNING id, name, description, user_id, created_at, updated_at",
    )
    .bind(name)
    .bind(description)
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(portfolio) = updated else {
        tx.rollback().await?;
        return Ok(None);
    };

    sqlx::query("DELETE FROM etf_holdings WHERE portfolio_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    holding_queries::insert_all(&mut *tx, holdings).await?;

    tx.commit().await.map_err(|e| {
        error!("Failed to commit transaction for portfolio {}: {}", id, e);
        e
    })?;

    Ok(Some(portfolio))
}

/// Holdings go with the portfolio via ON DELETE CASCADE.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM portfolios WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
