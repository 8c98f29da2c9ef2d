use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{StoreResult, UserId};

/// Role carried by every user and session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Agent,
    User,
}

/// User row for pickers on edit screens. Accounts are provisioned by the
/// identity provider; this service only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl UserSummary {
    /// All users ordered by name.
    pub async fn list_all(pool: &PgPool) -> StoreResult<Vec<UserSummary>> {
        sqlx::query_as::<_, UserSummary>(
            "SELECT id, name, email, role FROM users ORDER BY name",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
