use sqlx::PgPool;

use crate::common::StoreResult;

/// Postgres enum types whose labels are published to the web app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyEnum {
    Type,
    Purpose,
}

impl PropertyEnum {
    /// Name of the type in `pg_type`.
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyEnum::Type => "property_type",
            PropertyEnum::Purpose => "property_purpose",
        }
    }

    /// Labels of the enum in declaration order.
    ///
    /// sqlx has no typed enum-metadata API, so this reads the `pg_enum`
    /// catalog. An unknown type yields an empty list.
    pub async fn labels(&self, pool: &PgPool) -> StoreResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT e.enumlabel::text
            FROM pg_enum e
            INNER JOIN pg_type t ON t.oid = e.enumtypid
            WHERE t.typname = $1
            ORDER BY e.enumsortorder
            "#,
        )
        .bind(self.type_name())
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}

/// Drop every label listed in `excluded`, keeping order.
pub fn without_excluded(labels: Vec<String>, excluded: &[String]) -> Vec<String> {
    labels
        .into_iter()
        .filter(|label| !excluded.iter().any(|e| e == label))
        .collect()
}
