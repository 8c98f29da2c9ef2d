// HTTP routes
pub mod configurations;
pub mod documents;
pub mod health;
pub mod leads;
pub mod properties;
pub mod property_metadata;

pub use configurations::*;
pub use documents::*;
pub use health::*;
pub use leads::*;
pub use properties::*;
pub use property_metadata::*;

use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_json::{json, Value};

/// Body returned by successful deletes.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Json<Self> {
        Json(Self { success: true })
    }
}

/// Fallback for unknown paths.
pub async fn not_found_handler() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
