//! Typed ID aliases for every CRM entity.

pub use super::id::Id;

/// Entity marker types. Kept in their own module so they never shadow the
/// model structs of the same name.
pub mod markers {
    pub struct User;
    pub struct Configuration;
    pub struct Document;
    pub struct Lead;
    pub struct Property;
    pub struct Neighborhood;
}

pub type UserId = Id<markers::User>;
pub type ConfigurationId = Id<markers::Configuration>;
pub type DocumentId = Id<markers::Document>;
pub type LeadId = Id<markers::Lead>;
pub type PropertyId = Id<markers::Property>;
pub type NeighborhoodId = Id<markers::Neighborhood>;
