// Real-estate CRM - API Core
//
// Route handlers, session wiring and page loaders for the CRM back office:
// property listings, leads, documents and configuration records.
// Storage sits behind the kernel traits so handlers can run against Postgres
// or an in-memory store.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
