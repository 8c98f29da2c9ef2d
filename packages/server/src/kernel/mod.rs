//! Kernel module - server infrastructure and dependencies.

pub mod postgres_store;
pub mod test_dependencies;
pub mod traits;

pub use postgres_store::PostgresStore;
pub use test_dependencies::{InMemoryStore, StaticSessionResolver};
pub use traits::*;
