// Business domains
pub mod auth;
pub mod configurations;
pub mod documents;
pub mod leads;
pub mod properties;
pub mod users;
