use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{ConfigurationId, StoreError, StoreResult};

/// A tunable value shown in the admin settings screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub id: ConfigurationId,
    pub value: String,
    pub label: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a PATCH may change. Anything else in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigurationChanges {
    pub value: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
}

impl ConfigurationChanges {
    /// Apply the provided fields to an in-memory record.
    pub fn apply_to(&self, configuration: &mut Configuration) {
        if let Some(value) = &self.value {
            configuration.value = value.clone();
        }
        if let Some(label) = &self.label {
            configuration.label = label.clone();
        }
        if let Some(description) = &self.description {
            configuration.description = Some(description.clone());
        }
    }
}

impl Configuration {
    pub async fn find_all(pool: &PgPool) -> StoreResult<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM configurations ORDER BY label")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_id(id: ConfigurationId, pool: &PgPool) -> StoreResult<Self> {
        sqlx::query_as::<_, Self>("SELECT * FROM configurations WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn create(
        value: &str,
        label: &str,
        description: Option<&str>,
        pool: &PgPool,
    ) -> StoreResult<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO configurations (value, label, description)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(value)
        .bind(label)
        .bind(description)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Update only the fields present in `changes`.
    pub async fn update(
        id: ConfigurationId,
        changes: &ConfigurationChanges,
        pool: &PgPool,
    ) -> StoreResult<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE configurations
             SET value = COALESCE($2, value),
                 label = COALESCE($3, label),
                 description = COALESCE($4, description),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(changes.value.as_deref())
        .bind(changes.label.as_deref())
        .bind(changes.description.as_deref())
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn delete(id: ConfigurationId, pool: &PgPool) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM configurations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
