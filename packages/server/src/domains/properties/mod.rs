pub mod models;

pub use models::{
    without_excluded, PropertyEnum, PropertyFilter, PropertyOption, PropertySummary,
};
