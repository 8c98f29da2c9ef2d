// TestDependencies - in-memory implementations for testing
//
// Provides a store and a session resolver that can be injected into the
// router in place of Postgres and the JWT resolver.

use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::common::{
    ConfigurationId, DocumentId, LeadId, PropertyId, Session, StoreError, StoreResult, UserId,
};
use crate::config::{Config, Environment};
use crate::domains::configurations::{Configuration, ConfigurationChanges};
use crate::domains::documents::{Document, DocumentChanges, DocumentWithUploader};
use crate::domains::leads::{Lead, LeadSummary};
use crate::domains::properties::{PropertyEnum, PropertyFilter, PropertyOption, PropertySummary};
use crate::domains::users::{Role, UserSummary};
use crate::kernel::{BaseCrmStore, BaseSessionResolver};

/// Origin used by `test_config`.
pub const TEST_ORIGIN: &str = "https://crm.example.com";

/// Configuration for router tests; never read from the environment.
pub fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/unused".to_string(),
        port: 0,
        environment: Environment::Test,
        allowed_origin: TEST_ORIGIN.to_string(),
        jwt_secret: "test_secret".to_string(),
        jwt_issuer: "crm".to_string(),
        excluded_property_purposes: vec!["VENDA_ALUGUEL".to_string()],
    }
}

// =============================================================================
// Session Resolver
// =============================================================================

/// Maps bearer tokens to fixed sessions.
#[derive(Default)]
pub struct StaticSessionResolver {
    sessions: HashMap<String, Session>,
}

impl StaticSessionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(mut self, token: &str, session: Session) -> Self {
        self.sessions.insert(token.to_string(), session);
        self
    }
}

impl BaseSessionResolver for StaticSessionResolver {
    fn resolve(&self, headers: &HeaderMap) -> Option<Session> {
        let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
        let token = value.strip_prefix("Bearer ").unwrap_or(value);
        self.sessions.get(token).cloned()
    }
}

// =============================================================================
// Store
// =============================================================================

#[derive(Default)]
struct MemoryState {
    configurations: Vec<Configuration>,
    documents: Vec<Document>,
    users: Vec<UserSummary>,
    properties: Vec<PropertySummary>,
    leads: Vec<Lead>,
    enum_labels: HashMap<PropertyEnum, Vec<String>>,
    mutation_calls: usize,
    unavailable: bool,
}

/// In-memory store with call accounting.
///
/// `mutation_calls` counts every update/delete that reached the store,
/// successful or not, so tests can assert a rejected request never got there.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<MemoryState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_configuration(self, configuration: Configuration) -> Self {
        self.lock().configurations.push(configuration);
        self
    }

    pub fn with_document(self, document: Document) -> Self {
        self.lock().documents.push(document);
        self
    }

    pub fn with_user(self, user: UserSummary) -> Self {
        self.lock().users.push(user);
        self
    }

    pub fn with_property(self, property: PropertySummary) -> Self {
        self.lock().properties.push(property);
        self
    }

    pub fn with_lead(self, lead: Lead) -> Self {
        self.lock().leads.push(lead);
        self
    }

    pub fn with_enum_labels(self, kind: PropertyEnum, labels: &[&str]) -> Self {
        self.lock()
            .enum_labels
            .insert(kind, labels.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Every call fails as if the database were unreachable.
    pub fn unavailable(self) -> Self {
        self.lock().unavailable = true;
        self
    }

    pub fn mutation_calls(&self) -> usize {
        self.lock().mutation_calls
    }

    pub fn configuration(&self, id: ConfigurationId) -> Option<Configuration> {
        self.lock()
            .configurations
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    pub fn document(&self, id: DocumentId) -> Option<Document> {
        self.lock().documents.iter().find(|d| d.id == id).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        // A panic in another test thread must not cascade here.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn available(&self) -> StoreResult<std::sync::MutexGuard<'_, MemoryState>> {
        let state = self.lock();
        if state.unavailable {
            return Err(StoreError::Connection("in-memory store offline".to_string()));
        }
        Ok(state)
    }
}

impl MemoryState {
    fn with_uploader(&self, document: &Document) -> DocumentWithUploader {
        let uploader_name = document
            .uploaded_by
            .and_then(|id| self.users.iter().find(|u| u.id == id))
            .map(|u| u.name.clone());
        DocumentWithUploader {
            document: document.clone(),
            uploader_name,
        }
    }
}

#[async_trait]
impl BaseCrmStore for InMemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        self.available().map(|_| ())
    }

    async fn list_configurations(&self) -> StoreResult<Vec<Configuration>> {
        let state = self.available()?;
        let mut configurations = state.configurations.clone();
        configurations.sort_by(|a, b| a.label.cmp(&b.label));
        Ok(configurations)
    }

    async fn find_configuration(&self, id: ConfigurationId) -> StoreResult<Configuration> {
        let state = self.available()?;
        state
            .configurations
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update_configuration(
        &self,
        id: ConfigurationId,
        changes: &ConfigurationChanges,
    ) -> StoreResult<Configuration> {
        let mut state = self.lock();
        state.mutation_calls += 1;
        if state.unavailable {
            return Err(StoreError::Connection("in-memory store offline".to_string()));
        }
        let configuration = state
            .configurations
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound)?;
        changes.apply_to(configuration);
        configuration.updated_at = Utc::now();
        Ok(configuration.clone())
    }

    async fn delete_configuration(&self, id: ConfigurationId) -> StoreResult<()> {
        let mut state = self.lock();
        state.mutation_calls += 1;
        if state.unavailable {
            return Err(StoreError::Connection("in-memory store offline".to_string()));
        }
        let before = state.configurations.len();
        state.configurations.retain(|c| c.id != id);
        if state.configurations.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_documents(&self) -> StoreResult<Vec<DocumentWithUploader>> {
        let state = self.available()?;
        let mut documents: Vec<_> = state
            .documents
            .iter()
            .map(|d| state.with_uploader(d))
            .collect();
        documents.sort_by(|a, b| b.document.created_at.cmp(&a.document.created_at));
        Ok(documents)
    }

    async fn find_document(&self, id: DocumentId) -> StoreResult<DocumentWithUploader> {
        let state = self.available()?;
        state
            .documents
            .iter()
            .find(|d| d.id == id)
            .map(|d| state.with_uploader(d))
            .ok_or(StoreError::NotFound)
    }

    async fn update_document(
        &self,
        id: DocumentId,
        changes: &DocumentChanges,
    ) -> StoreResult<DocumentWithUploader> {
        let mut state = self.lock();
        state.mutation_calls += 1;
        if state.unavailable {
            return Err(StoreError::Connection("in-memory store offline".to_string()));
        }
        let document = state
            .documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(StoreError::NotFound)?;
        changes.apply_to(document);
        document.updated_at = Utc::now();
        let updated = document.clone();
        Ok(state.with_uploader(&updated))
    }

    async fn delete_document(&self, id: DocumentId) -> StoreResult<()> {
        let mut state = self.lock();
        state.mutation_calls += 1;
        if state.unavailable {
            return Err(StoreError::Connection("in-memory store offline".to_string()));
        }
        let before = state.documents.len();
        state.documents.retain(|d| d.id != id);
        if state.documents.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn enum_labels(&self, kind: PropertyEnum) -> StoreResult<Vec<String>> {
        let state = self.available()?;
        Ok(state.enum_labels.get(&kind).cloned().unwrap_or_default())
    }

    async fn list_properties(&self, filter: &PropertyFilter) -> StoreResult<Vec<PropertySummary>> {
        let state = self.available()?;
        let mut properties: Vec<_> = state
            .properties
            .iter()
            .filter(|p| {
                filter
                    .property_type
                    .as_deref()
                    .map_or(true, |t| p.property_type == t)
            })
            .filter(|p| filter.purpose.as_deref().map_or(true, |t| p.purpose == t))
            .cloned()
            .collect();
        properties.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        properties.truncate(filter.effective_limit() as usize);
        Ok(properties)
    }

    async fn list_property_options(&self, limit: i64) -> StoreResult<Vec<PropertyOption>> {
        let state = self.available()?;
        let mut options: Vec<_> = state
            .properties
            .iter()
            .map(|p| PropertyOption {
                id: p.id,
                code: p.code.clone(),
                title: p.title.clone(),
            })
            .collect();
        options.sort_by(|a, b| a.code.cmp(&b.code));
        options.truncate(limit.max(0) as usize);
        Ok(options)
    }

    async fn list_leads(&self, limit: i64) -> StoreResult<Vec<LeadSummary>> {
        let state = self.available()?;
        let mut leads: Vec<_> = state
            .leads
            .iter()
            .map(|lead| LeadSummary {
                id: lead.id,
                name: lead.name.clone(),
                status: lead.status.clone(),
                property_code: lead
                    .property_id
                    .and_then(|id| state.properties.iter().find(|p| p.id == id))
                    .map(|p| p.code.clone()),
                user_name: lead
                    .user_id
                    .and_then(|id| state.users.iter().find(|u| u.id == id))
                    .map(|u| u.name.clone()),
                created_at: lead.created_at,
            })
            .collect();
        leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        leads.truncate(limit.max(0) as usize);
        Ok(leads)
    }

    async fn find_lead(&self, id: LeadId) -> StoreResult<Lead> {
        let state = self.available()?;
        state
            .leads
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn list_users(&self) -> StoreResult<Vec<UserSummary>> {
        let state = self.available()?;
        let mut users = state.users.clone();
        users.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(users)
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub fn configuration_fixture(label: &str, value: &str) -> Configuration {
    Configuration {
        id: ConfigurationId::new(),
        value: value.to_string(),
        label: label.to_string(),
        description: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn document_fixture(title: &str, uploaded_by: Option<UserId>) -> Document {
    Document {
        id: DocumentId::new(),
        title: title.to_string(),
        description: None,
        document_type: "PDF".to_string(),
        category: "CONTRATO".to_string(),
        tags: vec!["contrato".to_string()],
        url: None,
        uploaded_by,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn user_fixture(name: &str, role: Role) -> UserSummary {
    UserSummary {
        id: UserId::new(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        role,
    }
}

pub fn property_fixture(code: &str, property_type: &str, purpose: &str) -> PropertySummary {
    PropertySummary {
        id: PropertyId::new(),
        code: code.to_string(),
        title: format!("Imovel {}", code),
        property_type: property_type.to_string(),
        purpose: purpose.to_string(),
        price: Some(450_000.0),
        neighborhood_id: None,
        neighborhood_name: None,
        created_at: Utc::now(),
    }
}

pub fn lead_fixture(name: &str, property_id: Option<PropertyId>, user_id: Option<UserId>) -> Lead {
    Lead {
        id: LeadId::new(),
        name: name.to_string(),
        email: None,
        phone: Some("+55 11 99999-0000".to_string()),
        message: None,
        status: "NEW".to_string(),
        property_id,
        user_id,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
