//! Postgres implementation of the store, delegating to the model queries.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::common::{ConfigurationId, DocumentId, LeadId, StoreResult};
use crate::domains::configurations::{Configuration, ConfigurationChanges};
use crate::domains::documents::{Document, DocumentChanges, DocumentWithUploader};
use crate::domains::leads::{Lead, LeadSummary};
use crate::domains::properties::{PropertyEnum, PropertyFilter, PropertyOption, PropertySummary};
use crate::domains::users::UserSummary;
use crate::kernel::BaseCrmStore;

#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseCrmStore for PostgresStore {
    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_configurations(&self) -> StoreResult<Vec<Configuration>> {
        Configuration::find_all(&self.pool).await
    }

    async fn find_configuration(&self, id: ConfigurationId) -> StoreResult<Configuration> {
        Configuration::find_by_id(id, &self.pool).await
    }

    async fn update_configuration(
        &self,
        id: ConfigurationId,
        changes: &ConfigurationChanges,
    ) -> StoreResult<Configuration> {
        Configuration::update(id, changes, &self.pool).await
    }

    async fn delete_configuration(&self, id: ConfigurationId) -> StoreResult<()> {
        Configuration::delete(id, &self.pool).await
    }

    async fn list_documents(&self) -> StoreResult<Vec<DocumentWithUploader>> {
        Document::find_all(&self.pool).await
    }

    async fn find_document(&self, id: DocumentId) -> StoreResult<DocumentWithUploader> {
        Document::find_by_id(id, &self.pool).await
    }

    async fn update_document(
        &self,
        id: DocumentId,
        changes: &DocumentChanges,
    ) -> StoreResult<DocumentWithUploader> {
        Document::update(id, changes, &self.pool).await
    }

    async fn delete_document(&self, id: DocumentId) -> StoreResult<()> {
        Document::delete(id, &self.pool).await
    }

    async fn enum_labels(&self, kind: PropertyEnum) -> StoreResult<Vec<String>> {
        kind.labels(&self.pool).await
    }

    async fn list_properties(&self, filter: &PropertyFilter) -> StoreResult<Vec<PropertySummary>> {
        PropertySummary::find_filtered(filter, &self.pool).await
    }

    async fn list_property_options(&self, limit: i64) -> StoreResult<Vec<PropertyOption>> {
        PropertyOption::find_first(limit, &self.pool).await
    }

    async fn list_leads(&self, limit: i64) -> StoreResult<Vec<LeadSummary>> {
        Lead::find_recent(limit, &self.pool).await
    }

    async fn find_lead(&self, id: LeadId) -> StoreResult<Lead> {
        Lead::find_by_id(id, &self.pool).await
    }

    async fn list_users(&self) -> StoreResult<Vec<UserSummary>> {
        UserSummary::list_all(&self.pool).await
    }
}
