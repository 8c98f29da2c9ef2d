//! CORS layers for `/api` routes.
//!
//! Both layers answer `OPTIONS` themselves with `200` and an empty body, so
//! preflights never reach a handler.
//!
//! - `restricted_cors`: the single configured origin, with credentials.
//! - `public_cors`: any origin, no credentials. Used for the public
//!   listings (`/api/properties`, `/api/leads`).
//!
//! Routes outside `/api` get neither layer.

use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    HeaderName, HeaderValue, Method,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;

pub const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
    Method::OPTIONS,
];

pub const ALLOWED_HEADERS: [HeaderName; 2] = [CONTENT_TYPE, AUTHORIZATION];

/// How long browsers may cache a preflight answer.
pub const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(86_400);

/// CORS for every `/api` route except the public listings.
pub fn restricted_cors(config: &Config) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(&config.allowed_origin)
        .with_context(|| format!("Invalid CORS origin: {}", config.allowed_origin))?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::exact(origin))
        .allow_credentials(true)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(ALLOWED_HEADERS)
        .max_age(PREFLIGHT_MAX_AGE))
}

/// CORS for the public listings.
///
/// A wildcard origin cannot carry credentials, so cross-origin browsers can
/// only read `/api/leads` when they send the token in `Authorization`; the
/// session cookie is not sent to a wildcard origin.
pub fn public_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(ALLOWED_HEADERS)
        .max_age(PREFLIGHT_MAX_AGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::{test_config, TEST_ORIGIN};
    use axum::{
        body::Body,
        extract::Request,
        http::{header, StatusCode},
        routing::get,
        Router,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(calls: Arc<AtomicUsize>) -> Router {
        let counter = move || {
            let calls = calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                ([(header::VARY, "accept-encoding")], "ok")
            }
        };

        let public = Router::new()
            .route("/properties", get(counter.clone()))
            .layer(public_cors());
        let restricted = Router::new()
            .route("/configurations/:id", get(counter.clone()))
            .layer(restricted_cors(&test_config()).unwrap());

        Router::new()
            .nest("/api", public.merge(restricted))
            .route("/dashboard", get(counter))
    }

    fn request(method: Method, uri: &str) -> Request {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let mut config = test_config();
        config.allowed_origin = "https://bad\norigin".to_string();
        assert!(restricted_cors(&config).is_err());
    }

    #[tokio::test]
    async fn test_preflight_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let response = app(calls.clone())
            .oneshot(request(Method::OPTIONS, "/api/configurations/abc"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], TEST_ORIGIN);
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET,POST,PUT,PATCH,DELETE,OPTIONS"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_public_listing_is_permissive() {
        let calls = Arc::new(AtomicUsize::new(0));
        let response = app(calls.clone())
            .oneshot(request(Method::GET, "/api/properties"))
            .await
            .unwrap();

        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_private_route_is_not_widened() {
        let calls = Arc::new(AtomicUsize::new(0));
        let response = app(calls)
            .oneshot(request(Method::GET, "/api/configurations/abc"))
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            TEST_ORIGIN
        );
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
            "true"
        );
    }

    #[tokio::test]
    async fn test_handler_vary_header_is_kept() {
        let calls = Arc::new(AtomicUsize::new(0));
        let response = app(calls)
            .oneshot(request(Method::GET, "/api/configurations/abc"))
            .await
            .unwrap();

        let vary: Vec<_> = response
            .headers()
            .get_all(header::VARY)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_ascii_lowercase)
            .collect();
        assert!(vary.iter().any(|v| v.contains("accept-encoding")));
        assert!(vary.iter().any(|v| v.contains("origin")));
    }

    #[tokio::test]
    async fn test_non_api_paths_untouched() {
        let calls = Arc::new(AtomicUsize::new(0));
        let response = app(calls.clone())
            .oneshot(request(Method::GET, "/dashboard"))
            .await
            .unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
