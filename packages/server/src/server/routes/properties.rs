use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::domains::properties::{PropertyFilter, PropertySummary};
use crate::server::{ApiError, AxumAppState};

/// `GET /api/properties?type=&purpose=&limit=` (public)
pub async fn list_properties(
    State(state): State<AxumAppState>,
    query: Result<Query<PropertyFilter>, QueryRejection>,
) -> Result<Json<Vec<PropertySummary>>, ApiError> {
    let Query(filter) = query?;

    Ok(Json(state.store.list_properties(&filter).await?))
}
