//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::Request,
    middleware::{self, Next},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::kernel::{BaseCrmStore, BaseSessionResolver};
use crate::server::middleware::{public_cors, restricted_cors, session_middleware};
use crate::server::pages::lead_edit_page;
use crate::server::routes::{
    delete_configuration, delete_document, get_configuration, get_document, health_handler,
    list_configurations, list_documents, list_leads, list_properties, list_property_purposes,
    list_property_types, not_found_handler, update_configuration, update_document,
};

/// Shared application state
///
/// Everything here is immutable after startup; requests share nothing else.
#[derive(Clone)]
pub struct AxumAppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn BaseCrmStore>,
}

/// Build the Axum application router
///
/// Request flow: trace → CORS (`/api` only, answers preflights) → session
/// resolution → handler.
///
/// The public listings live on their own router so their wildcard CORS layer
/// never stacks with the credentialed one.
pub fn build_app(
    config: Arc<Config>,
    store: Arc<dyn BaseCrmStore>,
    sessions: Arc<dyn BaseSessionResolver>,
) -> Result<Router> {
    let restricted = restricted_cors(&config)?;
    let state = AxumAppState { config, store };

    let session_layer = middleware::from_fn(move |req: Request, next: Next| {
        session_middleware(sessions.clone(), req, next)
    });

    // Property listings (anonymous) and leads (VIEW_LEADS, bearer token cross-origin)
    let public_api = Router::new()
        .route("/properties", get(list_properties))
        .route("/leads", get(list_leads))
        .layer(session_layer.clone())
        .layer(public_cors());

    let restricted_api = Router::new()
        // Configuration records (ADMIN)
        .route("/configurations", get(list_configurations))
        .route(
            "/configurations/:id",
            get(get_configuration)
                .patch(update_configuration)
                .delete(delete_configuration),
        )
        // Document library (any signed-in user)
        .route("/documents", get(list_documents))
        .route(
            "/documents/:id",
            get(get_document)
                .patch(update_document)
                .delete(delete_document),
        )
        // Property metadata
        .route("/property-types", get(list_property_types))
        .route("/property-purposes", get(list_property_purposes))
        // Unknown `/api` paths still get CORS headers and preflight answers
        .fallback(not_found_handler)
        .layer(session_layer.clone())
        .layer(restricted);

    let app = Router::new()
        .route("/leads/:id/edit", get(lead_edit_page))
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .layer(session_layer)
        .nest("/api", public_api.merge(restricted_api))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
