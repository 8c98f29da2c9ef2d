// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Handlers receive them as trait objects so tests can swap in deterministic
// implementations (see test_dependencies.rs).
//
// Naming convention: Base* for trait names (e.g., BaseCrmStore)

use async_trait::async_trait;
use axum::http::HeaderMap;

use crate::common::{ConfigurationId, DocumentId, LeadId, Session, StoreResult};
use crate::domains::configurations::{Configuration, ConfigurationChanges};
use crate::domains::documents::{DocumentChanges, DocumentWithUploader};
use crate::domains::leads::{Lead, LeadSummary};
use crate::domains::properties::{PropertyEnum, PropertyFilter, PropertyOption, PropertySummary};
use crate::domains::users::UserSummary;

// =============================================================================
// Session Trait (Infrastructure - identity provider)
// =============================================================================

pub trait BaseSessionResolver: Send + Sync {
    /// Resolve the caller's identity from request headers.
    ///
    /// Never fails: a missing or unverifiable credential is `None`.
    fn resolve(&self, headers: &HeaderMap) -> Option<Session>;
}

// =============================================================================
// Store Trait (Infrastructure - CRM records)
// =============================================================================

/// One method per store round-trip. Each call is a single atomic operation;
/// nothing here composes calls into transactions.
#[async_trait]
pub trait BaseCrmStore: Send + Sync {
    /// Cheap connectivity probe for the health check
    async fn ping(&self) -> StoreResult<()>;

    // Configurations
    async fn list_configurations(&self) -> StoreResult<Vec<Configuration>>;
    async fn find_configuration(&self, id: ConfigurationId) -> StoreResult<Configuration>;
    async fn update_configuration(
        &self,
        id: ConfigurationId,
        changes: &ConfigurationChanges,
    ) -> StoreResult<Configuration>;
    async fn delete_configuration(&self, id: ConfigurationId) -> StoreResult<()>;

    // Documents
    async fn list_documents(&self) -> StoreResult<Vec<DocumentWithUploader>>;
    async fn find_document(&self, id: DocumentId) -> StoreResult<DocumentWithUploader>;
    async fn update_document(
        &self,
        id: DocumentId,
        changes: &DocumentChanges,
    ) -> StoreResult<DocumentWithUploader>;
    async fn delete_document(&self, id: DocumentId) -> StoreResult<()>;

    // Properties
    async fn enum_labels(&self, kind: PropertyEnum) -> StoreResult<Vec<String>>;
    async fn list_properties(&self, filter: &PropertyFilter) -> StoreResult<Vec<PropertySummary>>;
    async fn list_property_options(&self, limit: i64) -> StoreResult<Vec<PropertyOption>>;

    // Leads and users
    async fn list_leads(&self, limit: i64) -> StoreResult<Vec<LeadSummary>>;
    async fn find_lead(&self, id: LeadId) -> StoreResult<Lead>;
    async fn list_users(&self) -> StoreResult<Vec<UserSummary>>;
}
