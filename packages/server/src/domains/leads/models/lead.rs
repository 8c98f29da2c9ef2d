use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{LeadId, PropertyId, StoreResult, UserId};

pub const DEFAULT_LEAD_LIMIT: i64 = 50;
pub const MAX_LEAD_LIMIT: i64 = 200;

/// A lead (attendance): a contact interested in a property, assigned to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub property_id: Option<PropertyId>,
    pub user_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing row with the property code and assignee name resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LeadSummary {
    pub id: LeadId,
    pub name: String,
    pub status: String,
    pub property_code: Option<String>,
    pub user_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Query-string for `/api/leads`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LeadQuery {
    pub limit: Option<i64>,
}

impl LeadQuery {
    pub fn effective_limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LEAD_LIMIT).clamp(1, MAX_LEAD_LIMIT)
    }
}

impl Lead {
    pub async fn find_by_id(id: LeadId, pool: &PgPool) -> StoreResult<Self> {
        sqlx::query_as::<_, Self>("SELECT * FROM leads WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    /// Newest leads first.
    pub async fn find_recent(limit: i64, pool: &PgPool) -> StoreResult<Vec<LeadSummary>> {
        sqlx::query_as::<_, LeadSummary>(
            r#"
            SELECT l.id, l.name, l.status,
                   p.code AS property_code,
                   u.name AS user_name,
                   l.created_at
            FROM leads l
            LEFT JOIN properties p ON p.id = l.property_id
            LEFT JOIN users u ON u.id = l.user_id
            ORDER BY l.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
