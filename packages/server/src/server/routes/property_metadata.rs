use axum::{extract::State, Json};
use serde::Serialize;

use crate::domains::properties::{without_excluded, PropertyEnum};
use crate::server::{ApiError, AxumAppState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyTypesResponse {
    pub property_types: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPurposesResponse {
    pub property_purposes: Vec<String>,
}

/// `GET /api/property-types` (public)
pub async fn list_property_types(
    State(state): State<AxumAppState>,
) -> Result<Json<PropertyTypesResponse>, ApiError> {
    let property_types = state.store.enum_labels(PropertyEnum::Type).await?;

    Ok(Json(PropertyTypesResponse { property_types }))
}

/// `GET /api/property-purposes` (public)
///
/// Labels listed in `excluded_property_purposes` are never returned.
pub async fn list_property_purposes(
    State(state): State<AxumAppState>,
) -> Result<Json<PropertyPurposesResponse>, ApiError> {
    let labels = state.store.enum_labels(PropertyEnum::Purpose).await?;
    let property_purposes = without_excluded(labels, &state.config.excluded_property_purposes);

    Ok(Json(PropertyPurposesResponse { property_purposes }))
}
