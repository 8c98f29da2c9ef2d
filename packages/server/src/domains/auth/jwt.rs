use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Session, UserId};
use crate::domains::users::Role;

/// JWT Claims - data stored in the token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,            // Subject (user_id as string)
    pub user_id: Uuid,          // User UUID
    pub role: Role,             // ADMIN / AGENT / USER
    pub name: Option<String>,   // Display name
    pub avatar: Option<String>, // Avatar image reference
    pub exp: i64,               // Expiration timestamp
    pub iat: i64,               // Issued at timestamp
    pub iss: String,            // Issuer
    pub jti: String,            // JWT ID (unique token identifier)
}

impl Claims {
    pub fn into_session(self) -> Session {
        Session {
            user_id: UserId::from_uuid(self.user_id),
            role: self.role,
            name: self.name,
            avatar: self.avatar,
        }
    }
}

/// JWT Service - creates and verifies session tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl JwtService {
    /// Create new JWT service with secret and issuer
    pub fn new(secret: &str, issuer: String) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
        }
    }

    /// Create a token for a session
    ///
    /// Token expires after 24 hours
    pub fn create_token(&self, session: &Session) -> Result<String> {
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::hours(24);

        let claims = Claims {
            sub: session.user_id.to_string(),
            user_id: session.user_id.into_uuid(),
            role: session.role,
            name: session.name.clone(),
            avatar: session.avatar.clone(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify and decode a token
    ///
    /// Returns claims if the signature, issuer and expiry all check out
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(Into::into)
    }
}
