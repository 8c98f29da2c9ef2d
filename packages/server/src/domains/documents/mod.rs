pub mod models;

pub use models::{Document, DocumentChanges, DocumentWithUploader};
