use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::common::Capability;
use crate::domains::leads::{LeadQuery, LeadSummary};
use crate::server::middleware::CurrentSession;
use crate::server::{ApiError, AxumAppState};

/// `GET /api/leads?limit=` (any signed-in user)
pub async fn list_leads(
    State(state): State<AxumAppState>,
    session: CurrentSession,
    query: Result<Query<LeadQuery>, QueryRejection>,
) -> Result<Json<Vec<LeadSummary>>, ApiError> {
    session.require(Capability::ViewLeads)?;
    let Query(query) = query?;

    Ok(Json(state.store.list_leads(query.effective_limit()).await?))
}
