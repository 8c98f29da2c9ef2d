//! Authorization tests for mutating endpoints.
//!
//! A rejected request must answer 401 and never reach the store.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{TestApp, ADMIN_TOKEN, AGENT_TOKEN};
use crm_core::common::{Session, UserId};
use crm_core::domains::auth::{JwtService, JwtSessionResolver};
use crm_core::domains::users::Role;
use crm_core::kernel::test_dependencies::{configuration_fixture, document_fixture};
use crm_core::kernel::InMemoryStore;
use serde_json::json;

fn store_with_records() -> (Arc<InMemoryStore>, String, String) {
    let configuration = configuration_fixture("Comissao padrao", "6%");
    let document = document_fixture("Contrato", None);
    let configuration_uri = format!("/api/configurations/{}", configuration.id);
    let document_uri = format!("/api/documents/{}", document.id);
    let store = InMemoryStore::new()
        .with_configuration(configuration)
        .with_document(document);

    (Arc::new(store), configuration_uri, document_uri)
}

#[tokio::test]
async fn mutations_without_session_are_rejected() {
    let (store, configuration_uri, document_uri) = store_with_records();
    let app = TestApp::new(store.clone());
    let body = json!({ "value": "v", "label": "l", "description": "d" });

    let responses = vec![
        app.patch(&configuration_uri, None, body.clone()).await,
        app.delete(&configuration_uri, None).await,
        app.patch(&document_uri, None, json!({ "title": "x" })).await,
        app.delete(&document_uri, None).await,
    ];

    for response in responses {
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.json(), json!({ "error": "Unauthorized" }));
    }
    assert_eq!(store.mutation_calls(), 0);
}

#[tokio::test]
async fn agent_cannot_touch_configurations() {
    let (store, configuration_uri, _) = store_with_records();
    let app = TestApp::new(store.clone());

    let patch = app
        .patch(
            &configuration_uri,
            Some(AGENT_TOKEN),
            json!({ "value": "v", "label": "l", "description": "d" }),
        )
        .await;
    let delete = app.delete(&configuration_uri, Some(AGENT_TOKEN)).await;
    let read = app.get("/api/configurations", Some(AGENT_TOKEN)).await;

    for response in [&patch, &delete, &read] {
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.json(),
            json!({ "error": "Unauthorized: admin access required" })
        );
    }
    assert_eq!(store.mutation_calls(), 0);
}

#[tokio::test]
async fn invalid_body_is_rejected_after_authorization() {
    let (store, configuration_uri, _) = store_with_records();
    let app = TestApp::new(store.clone());

    // Unauthenticated callers learn nothing about body validation
    let anonymous = app
        .patch(&configuration_uri, None, json!({ "value": 42 }))
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let admin = app
        .patch(&configuration_uri, Some(ADMIN_TOKEN), json!({ "value": 42 }))
        .await;
    assert_eq!(admin.status, StatusCode::BAD_REQUEST);
    assert_eq!(store.mutation_calls(), 0);
}

#[tokio::test]
async fn unknown_token_is_treated_as_anonymous() {
    let (store, _, document_uri) = store_with_records();
    let app = TestApp::new(store.clone());

    let response = app.delete(&document_uri, Some("forged-token")).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(store.mutation_calls(), 0);
}

#[tokio::test]
async fn signed_admin_token_passes_the_gate() {
    let configuration = configuration_fixture("Taxa de visita", "0");
    let uri = format!("/api/configurations/{}", configuration.id);
    let store = Arc::new(InMemoryStore::new().with_configuration(configuration));

    let jwt = JwtService::new("integration_secret", "crm".to_string());
    let admin = Session::new(UserId::new(), Role::Admin);
    let agent = Session::new(UserId::new(), Role::Agent);
    let admin_token = jwt.create_token(&admin).expect("token");
    let agent_token = jwt.create_token(&agent).expect("token");

    let app = TestApp::with_resolver(
        store.clone(),
        Arc::new(JwtSessionResolver::new(jwt)),
        admin.user_id,
        agent.user_id,
    );

    let rejected = app.delete(&uri, Some(agent_token.as_str())).await;
    assert_eq!(rejected.status, StatusCode::UNAUTHORIZED);
    assert_eq!(store.mutation_calls(), 0);

    let accepted = app.delete(&uri, Some(admin_token.as_str())).await;
    assert_eq!(accepted.status, StatusCode::OK);
    assert_eq!(accepted.json(), json!({ "success": true }));
}
