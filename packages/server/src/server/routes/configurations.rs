use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use tracing::info;

use super::SuccessResponse;
use crate::common::{Capability, ConfigurationId};
use crate::domains::configurations::{Configuration, ConfigurationChanges};
use crate::server::middleware::CurrentSession;
use crate::server::{ApiError, AxumAppState};

/// `GET /api/configurations` (ADMIN)
pub async fn list_configurations(
    State(state): State<AxumAppState>,
    session: CurrentSession,
) -> Result<Json<Vec<Configuration>>, ApiError> {
    session.require(Capability::ManageConfigurations)?;

    Ok(Json(state.store.list_configurations().await?))
}

/// `GET /api/configurations/{id}` (ADMIN)
pub async fn get_configuration(
    State(state): State<AxumAppState>,
    session: CurrentSession,
    path: Result<Path<ConfigurationId>, PathRejection>,
) -> Result<Json<Configuration>, ApiError> {
    session.require(Capability::ManageConfigurations)?;
    let Path(id) = path?;

    Ok(Json(state.store.find_configuration(id).await?))
}

/// `PATCH /api/configurations/{id}` (ADMIN)
///
/// Only `value`, `label` and `description` are read from the body.
pub async fn update_configuration(
    State(state): State<AxumAppState>,
    session: CurrentSession,
    path: Result<Path<ConfigurationId>, PathRejection>,
    body: Result<Json<ConfigurationChanges>, JsonRejection>,
) -> Result<Json<Configuration>, ApiError> {
    let actor = session.require(Capability::ManageConfigurations)?;
    let Path(id) = path?;
    let Json(changes) = body?;

    let configuration = state.store.update_configuration(id, &changes).await?;
    info!(configuration_id = %id, user_id = %actor.user_id, "Configuration updated");

    Ok(Json(configuration))
}

/// `DELETE /api/configurations/{id}` (ADMIN)
pub async fn delete_configuration(
    State(state): State<AxumAppState>,
    session: CurrentSession,
    path: Result<Path<ConfigurationId>, PathRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let actor = session.require(Capability::ManageConfigurations)?;
    let Path(id) = path?;

    state.store.delete_configuration(id).await?;
    info!(configuration_id = %id, user_id = %actor.user_id, "Configuration deleted");

    Ok(SuccessResponse::ok())
}
