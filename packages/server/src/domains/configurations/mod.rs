pub mod models;

pub use models::{Configuration, ConfigurationChanges};
