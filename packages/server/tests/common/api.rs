//! Router-level test client.
//!
//! Drives the full router (CORS, session middleware, handlers) through
//! `tower::ServiceExt::oneshot`, backed by whatever store the test supplies.

use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, HeaderName, Method, Request, StatusCode},
    Router,
};
use crm_core::common::{Session, UserId};
use crm_core::domains::users::Role;
use crm_core::kernel::test_dependencies::test_config;
use crm_core::kernel::{BaseCrmStore, BaseSessionResolver, StaticSessionResolver};
use crm_core::server::build_app;
use serde_json::Value;
use tower::ServiceExt;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const AGENT_TOKEN: &str = "agent-token";

pub struct TestApp {
    router: Router,
    pub admin_id: UserId,
    pub agent_id: UserId,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn header(&self, name: HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl TestApp {
    /// Router over `store` with one ADMIN and one AGENT session.
    pub fn new(store: Arc<dyn BaseCrmStore>) -> Self {
        let admin_id = UserId::new();
        let agent_id = UserId::new();
        let sessions = StaticSessionResolver::new()
            .with_session(ADMIN_TOKEN, Session::new(admin_id, Role::Admin))
            .with_session(AGENT_TOKEN, Session::new(agent_id, Role::Agent));

        Self::with_resolver(store, Arc::new(sessions), admin_id, agent_id)
    }

    pub fn with_resolver(
        store: Arc<dyn BaseCrmStore>,
        sessions: Arc<dyn BaseSessionResolver>,
        admin_id: UserId,
        agent_id: UserId,
    ) -> Self {
        let router =
            build_app(Arc::new(test_config()), store, sessions).expect("Failed to build router");
        Self {
            router,
            admin_id,
            agent_id,
        }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn patch(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.send(Method::PATCH, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(Method::DELETE, uri, token, None).await
    }

    pub async fn options(&self, uri: &str) -> TestResponse {
        self.send(Method::OPTIONS, uri, None, None).await
    }
}
