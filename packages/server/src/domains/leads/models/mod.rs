pub mod lead;

pub use lead::{Lead, LeadQuery, LeadSummary};
