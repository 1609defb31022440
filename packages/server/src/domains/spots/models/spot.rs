use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Spot - a neighborhood point of interest
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Spot {
    pub id: Uuid,
    pub name: String,
    pub category: String, // 'education', 'healthcare', 'retail', 'transport'
    pub subcategory: Option<String>,
    pub city: String,
    pub area: String,
    pub address: Option<String>,
    // Real coordinates when known; the map derives area coordinates otherwise
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Spot category enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpotCategory {
    Education,
    Healthcare,
    Retail,
    Transport,
}

impl SpotCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpotCategory::Education => "education",
            SpotCategory::Healthcare => "healthcare",
            SpotCategory::Retail => "retail",
            SpotCategory::Transport => "transport",
        }
    }

    /// Marker color on the map; gray for anything unrecognized.
    pub fn marker_color(category: &str) -> &'static str {
        match category.parse::<SpotCategory>() {
            Ok(SpotCategory::Education) => "#3b82f6",
            Ok(SpotCategory::Healthcare) => "#ef4444",
            Ok(SpotCategory::Retail) => "#f59e0b",
            Ok(SpotCategory::Transport) => "#22c55e",
            Err(_) => "#6b7280",
        }
    }
}

impl std::fmt::Display for SpotCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SpotCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "education" => Ok(SpotCategory::Education),
            "healthcare" => Ok(SpotCategory::Healthcare),
            "retail" => Ok(SpotCategory::Retail),
            "transport" => Ok(SpotCategory::Transport),
            _ => Err(anyhow::anyhow!("Invalid spot category: {}", s)),
        }
    }
}

impl Spot {
    /// Spots in a city, optionally narrowed by category.
    pub async fn find_by_city(
        city: &str,
        category: Option<SpotCategory>,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM spots
            WHERE city = $1
              AND ($2::text IS NULL OR category = $2)
            ORDER BY name
            "#,
        )
        .bind(city)
        .bind(category.map(|c| c.to_string()))
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Spots in a specific area (property detail "what's nearby" panel).
    pub async fn find_by_area(city: &str, area: &str, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM spots WHERE city = $1 AND area = $2 ORDER BY category, name",
        )
        .bind(city)
        .bind(area)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for s in ["education", "healthcare", "retail", "transport"] {
            let c: SpotCategory = s.parse().unwrap();
            assert_eq!(c.to_string(), s);
        }
        assert!("nightlife".parse::<SpotCategory>().is_err());
    }

    #[test]
    fn test_marker_color_fallback() {
        assert_eq!(SpotCategory::marker_color("education"), "#3b82f6");
        assert_eq!(SpotCategory::marker_color("unknown"), "#6b7280");
    }
}
