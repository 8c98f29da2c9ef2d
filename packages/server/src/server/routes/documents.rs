use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use tracing::info;

use super::SuccessResponse;
use crate::common::{Capability, DocumentId};
use crate::domains::documents::{DocumentChanges, DocumentWithUploader};
use crate::server::middleware::CurrentSession;
use crate::server::{ApiError, AxumAppState};

/// `GET /api/documents` (any signed-in user)
pub async fn list_documents(
    State(state): State<AxumAppState>,
    session: CurrentSession,
) -> Result<Json<Vec<DocumentWithUploader>>, ApiError> {
    session.require(Capability::ManageDocuments)?;

    Ok(Json(state.store.list_documents().await?))
}

/// `GET /api/documents/{id}` (any signed-in user)
pub async fn get_document(
    State(state): State<AxumAppState>,
    session: CurrentSession,
    path: Result<Path<DocumentId>, PathRejection>,
) -> Result<Json<DocumentWithUploader>, ApiError> {
    session.require(Capability::ManageDocuments)?;
    let Path(id) = path?;

    Ok(Json(state.store.find_document(id).await?))
}

/// `PATCH /api/documents/{id}` (any signed-in user)
///
/// Reads `title`, `description`, `type`, `category` and `tags`; the uploader
/// cannot be reassigned.
pub async fn update_document(
    State(state): State<AxumAppState>,
    session: CurrentSession,
    path: Result<Path<DocumentId>, PathRejection>,
    body: Result<Json<DocumentChanges>, JsonRejection>,
) -> Result<Json<DocumentWithUploader>, ApiError> {
    let actor = session.require(Capability::ManageDocuments)?;
    let Path(id) = path?;
    let Json(changes) = body?;

    let document = state.store.update_document(id, &changes).await?;
    info!(document_id = %id, user_id = %actor.user_id, "Document updated");

    Ok(Json(document))
}

/// `DELETE /api/documents/{id}` (any signed-in user)
pub async fn delete_document(
    State(state): State<AxumAppState>,
    session: CurrentSession,
    path: Result<Path<DocumentId>, PathRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let actor = session.require(Capability::ManageDocuments)?;
    let Path(id) = path?;

    state.store.delete_document(id).await?;
    info!(document_id = %id, user_id = %actor.user_id, "Document deleted");

    Ok(SuccessResponse::ok())
}
