pub mod models;

pub use models::{Lead, LeadQuery, LeadSummary};
