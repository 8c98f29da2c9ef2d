pub mod configuration;

pub use configuration::{Configuration, ConfigurationChanges};
