//! Postgres fixtures.
//!
//! Rows get unique codes and emails so tests can share one database.

use anyhow::Result;
use crm_core::common::{LeadId, PropertyId, UserId};
use crm_core::domains::configurations::Configuration;
use crm_core::domains::documents::Document;
use crm_core::domains::users::Role;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn create_test_user(pool: &PgPool, name: &str, role: Role) -> Result<UserId> {
    let id = sqlx::query_scalar::<_, UserId>(
        "INSERT INTO users (name, email, role) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(format!("{}@example.com", Uuid::new_v4()))
    .bind(role)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn create_test_configuration(pool: &PgPool, label: &str) -> Result<Configuration> {
    Ok(Configuration::create("initial", label, Some("seeded"), pool).await?)
}

pub async fn create_test_document(pool: &PgPool, uploaded_by: Option<UserId>) -> Result<Document> {
    Ok(Document::create(
        "Contrato de locacao",
        "PDF",
        "CONTRATO",
        &["contrato".to_string()],
        uploaded_by,
        pool,
    )
    .await?)
}

pub async fn create_test_property(
    pool: &PgPool,
    property_type: &str,
    purpose: &str,
) -> Result<PropertyId> {
    let id = sqlx::query_scalar::<_, PropertyId>(
        "INSERT INTO properties (code, title, type, purpose, price)
         VALUES ($1, 'Casa com quintal', $2::property_type, $3::property_purpose, 350000)
         RETURNING id",
    )
    .bind(format!("T-{}", Uuid::new_v4()))
    .bind(property_type)
    .bind(purpose)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn create_test_lead(
    pool: &PgPool,
    property_id: Option<PropertyId>,
    user_id: Option<UserId>,
) -> Result<LeadId> {
    let id = sqlx::query_scalar::<_, LeadId>(
        "INSERT INTO leads (name, phone, property_id, user_id)
         VALUES ('Fernanda', '+55 21 98888-0000', $1, $2)
         RETURNING id",
    )
    .bind(property_id)
    .bind(user_id)
    .fetch_one(pool)
    .await?;
    Ok(id)
}
