use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domains::properties::models::Property;

/// Favorite - a user's saved property
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub property_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    /// Toggle a favorite; returns true when the property ends up favorited.
    pub async fn toggle(user_id: Uuid, property_id: Uuid, pool: &PgPool) -> Result<bool> {
        let removed = sqlx::query(
            "DELETE FROM favorites WHERE user_id = $1 AND property_id = $2",
        )
        .bind(user_id)
        .bind(property_id)
        .execute(pool)
        .await?;

        if removed.rows_affected() > 0 {
            return Ok(false);
        }

        sqlx::query(
            r#"
            INSERT INTO favorites (user_id, property_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, property_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(property_id)
        .execute(pool)
        .await?;

        Ok(true)
    }

    /// Ids of everything the user has favorited (for card badges).
    pub async fn find_ids_for_user(user_id: Uuid, pool: &PgPool) -> Result<Vec<Uuid>> {
        let rows: Vec<(Uuid,)> =
            sqlx::query_as("SELECT property_id FROM favorites WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Favorited properties joined to live rows, newest favorite first.
    /// Properties deleted since favoriting drop out via the join.
    pub async fn find_properties_for_user(user_id: Uuid, pool: &PgPool) -> Result<Vec<Property>> {
        sqlx::query_as::<_, Property>(
            r#"
            SELECT p.* FROM properties p
            JOIN favorites f ON f.property_id = p.id
            WHERE f.user_id = $1
            ORDER BY f.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
