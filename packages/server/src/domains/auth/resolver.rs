use axum::http::{header, HeaderMap};
use tracing::debug;

use super::JwtService;
use crate::common::Session;
use crate::kernel::BaseSessionResolver;

/// Cookie the web app stores the session token in.
pub const SESSION_COOKIE: &str = "session-token";

/// Resolves sessions from signed tokens.
///
/// Looks at `Authorization` first (`Bearer <token>` or a raw token), then the
/// session cookie. Missing or invalid tokens resolve to no session.
pub struct JwtSessionResolver {
    jwt: JwtService,
}

impl JwtSessionResolver {
    pub fn new(jwt: JwtService) -> Self {
        Self { jwt }
    }
}

impl BaseSessionResolver for JwtSessionResolver {
    fn resolve(&self, headers: &HeaderMap) -> Option<Session> {
        let token = bearer_token(headers).or_else(|| cookie_token(headers))?;

        match self.jwt.verify_token(token) {
            Ok(claims) => Some(claims.into_session()),
            Err(e) => {
                debug!(error = %e, "Rejected session token");
                None
            }
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    (!token.is_empty()).then_some(token)
}

fn cookie_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}
