// Common types and utilities shared across the application

pub mod auth;
pub mod entity_ids;
pub mod id;
pub mod store_error;

pub use auth::{authorize, Actor, AuthError, Capability, Session};
pub use entity_ids::{
    ConfigurationId, DocumentId, LeadId, NeighborhoodId, PropertyId, UserId,
};
pub use id::Id;
pub use store_error::{StoreError, StoreResult};
