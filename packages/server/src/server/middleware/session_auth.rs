use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::common::{Actor, AuthError, Capability, Session};
use crate::kernel::BaseSessionResolver;

/// Session middleware
///
/// Resolves the caller's session and adds it to request extensions.
/// Requests without a valid session continue anonymously; handlers decide
/// whether that is acceptable.
pub async fn session_middleware(
    resolver: Arc<dyn BaseSessionResolver>,
    mut request: Request,
    next: Next,
) -> Response {
    match resolver.resolve(request.headers()) {
        Some(session) => {
            debug!(
                "Authenticated user: {} (role: {:?})",
                session.user_id, session.role
            );
            request.extensions_mut().insert(session);
        }
        None => debug!("No valid session"),
    }

    next.run(request).await
}

/// The session resolved by `session_middleware`, if any.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Option<Session>);

impl CurrentSession {
    /// Run the authorization gate for `capability`.
    pub fn require(&self, capability: Capability) -> Result<&Session, AuthError> {
        Actor::new(self.0.as_ref()).can(capability).check()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentSession(parts.extensions.get::<Session>().cloned()))
    }
}
