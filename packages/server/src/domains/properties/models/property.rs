use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{NeighborhoodId, PropertyId, StoreResult};

pub const DEFAULT_LISTING_LIMIT: i64 = 50;
pub const MAX_LISTING_LIMIT: i64 = 200;

/// Public listing row for a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummary {
    pub id: PropertyId,
    pub code: String,
    pub title: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub purpose: String,
    pub price: Option<f64>,
    pub neighborhood_id: Option<NeighborhoodId>,
    pub neighborhood_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Property choice offered on the lead edit screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PropertyOption {
    pub id: PropertyId,
    pub code: String,
    pub title: String,
}

/// Query-string filter for `/api/properties`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PropertyFilter {
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub purpose: Option<String>,
    pub limit: Option<i64>,
}

impl PropertyFilter {
    pub fn effective_limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_LISTING_LIMIT)
            .clamp(1, MAX_LISTING_LIMIT)
    }
}

impl PropertySummary {
    /// Newest properties first, optionally narrowed by type and purpose.
    pub async fn find_filtered(filter: &PropertyFilter, pool: &PgPool) -> StoreResult<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT p.id, p.code, p.title,
                   p.type::text AS property_type,
                   p.purpose::text AS purpose,
                   p.price, p.neighborhood_id,
                   n.name AS neighborhood_name,
                   p.created_at
            FROM properties p
            LEFT JOIN neighborhoods n ON n.id = p.neighborhood_id
            WHERE ($1::text IS NULL OR p.type::text = $1)
              AND ($2::text IS NULL OR p.purpose::text = $2)
            ORDER BY p.created_at DESC
            LIMIT $3
            "#,
        )
        .bind(filter.property_type.as_deref())
        .bind(filter.purpose.as_deref())
        .bind(filter.effective_limit())
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}

impl PropertyOption {
    /// First `limit` properties ordered by code.
    pub async fn find_first(limit: i64, pool: &PgPool) -> StoreResult<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT id, code, title FROM properties ORDER BY code LIMIT $1")
            .bind(limit)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }
}
