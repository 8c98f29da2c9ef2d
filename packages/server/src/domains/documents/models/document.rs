use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{DocumentId, StoreError, StoreResult, UserId};

/// A file uploaded to the document library (contracts, registrations, photos).
///
/// The binary lives in object storage; `url` points at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub description: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub document_type: String,
    pub category: String,
    pub tags: Vec<String>,
    pub url: Option<String>,
    pub uploaded_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Document joined with the name of the user who uploaded it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DocumentWithUploader {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub document: Document,
    pub uploader_name: Option<String>,
}

/// Fields a PATCH may change. `uploadedBy` is never writable.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocumentChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub document_type: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl DocumentChanges {
    /// Tags as a set: trimmed, blanks dropped, first occurrence kept.
    pub fn normalized_tags(&self) -> Option<Vec<String>> {
        self.tags.as_ref().map(|tags| {
            let mut seen = Vec::with_capacity(tags.len());
            for tag in tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
                if !seen.iter().any(|existing: &String| existing == tag) {
                    seen.push(tag.to_string());
                }
            }
            seen
        })
    }

    pub fn apply_to(&self, document: &mut Document) {
        if let Some(title) = &self.title {
            document.title = title.clone();
        }
        if let Some(description) = &self.description {
            document.description = Some(description.clone());
        }
        if let Some(document_type) = &self.document_type {
            document.document_type = document_type.clone();
        }
        if let Some(category) = &self.category {
            document.category = category.clone();
        }
        if let Some(tags) = self.normalized_tags() {
            document.tags = tags;
        }
    }
}

const SELECT_WITH_UPLOADER: &str = r#"
    SELECT d.*, u.name AS uploader_name
    FROM documents d
    LEFT JOIN users u ON u.id = d.uploaded_by
"#;

impl Document {
    /// All documents, newest first.
    pub async fn find_all(pool: &PgPool) -> StoreResult<Vec<DocumentWithUploader>> {
        sqlx::query_as::<_, DocumentWithUploader>(&format!(
            "{} ORDER BY d.created_at DESC",
            SELECT_WITH_UPLOADER
        ))
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id(id: DocumentId, pool: &PgPool) -> StoreResult<DocumentWithUploader> {
        sqlx::query_as::<_, DocumentWithUploader>(&format!(
            "{} WHERE d.id = $1",
            SELECT_WITH_UPLOADER
        ))
        .bind(id)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn create(
        title: &str,
        document_type: &str,
        category: &str,
        tags: &[String],
        uploaded_by: Option<UserId>,
        pool: &PgPool,
    ) -> StoreResult<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO documents (title, type, category, tags, uploaded_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(title)
        .bind(document_type)
        .bind(category)
        .bind(tags)
        .bind(uploaded_by)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Update the provided fields and return the row with its uploader name,
    /// in one statement.
    pub async fn update(
        id: DocumentId,
        changes: &DocumentChanges,
        pool: &PgPool,
    ) -> StoreResult<DocumentWithUploader> {
        sqlx::query_as::<_, DocumentWithUploader>(
            r#"
            WITH updated AS (
                UPDATE documents
                SET title = COALESCE($2, title),
                    description = COALESCE($3, description),
                    type = COALESCE($4, type),
                    category = COALESCE($5, category),
                    tags = COALESCE($6, tags),
                    updated_at = NOW()
                WHERE id = $1
                RETURNING *
            )
            SELECT updated.*, u.name AS uploader_name
            FROM updated
            LEFT JOIN users u ON u.id = updated.uploaded_by
            "#,
        )
        .bind(id)
        .bind(changes.title.as_deref())
        .bind(changes.description.as_deref())
        .bind(changes.document_type.as_deref())
        .bind(changes.category.as_deref())
        .bind(changes.normalized_tags())
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn delete(id: DocumentId, pool: &PgPool) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
