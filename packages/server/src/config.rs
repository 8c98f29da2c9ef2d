use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

/// Origin allowed by CORS when running locally.
pub const DEVELOPMENT_ORIGIN: &str = "http://localhost:3000";

/// Purpose labels hidden from `/api/property-purposes` unless overridden.
pub const DEFAULT_EXCLUDED_PURPOSES: &[&str] = &["VENDA_ALUGUEL"];

/// Runtime environment, read from `NODE_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            "test" => Ok(Environment::Test),
            other => bail!("Unknown NODE_ENV value: {}", other),
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub environment: Environment,
    /// Single origin echoed in `Access-Control-Allow-Origin` for `/api` routes.
    pub allowed_origin: String,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub excluded_property_purposes: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let environment: Environment = env::var("NODE_ENV")
            .unwrap_or_default()
            .parse()
            .context("NODE_ENV must be development, production or test")?;

        let allowed_origin = resolve_allowed_origin(
            environment,
            env::var("CORS_ORIGIN").ok(),
            env::var("SITE_URL").ok(),
        )?;

        let excluded_property_purposes = match env::var("EXCLUDED_PROPERTY_PURPOSES") {
            Ok(raw) => parse_label_list(&raw),
            Err(_) => DEFAULT_EXCLUDED_PURPOSES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            environment,
            allowed_origin,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "crm".to_string()),
            excluded_property_purposes,
        })
    }
}

/// Pick the CORS origin for the environment.
///
/// An explicit `CORS_ORIGIN` wins. Otherwise development uses the local web
/// app and every deployed environment falls back to `SITE_URL`.
pub fn resolve_allowed_origin(
    environment: Environment,
    cors_origin: Option<String>,
    site_url: Option<String>,
) -> Result<String> {
    let non_empty = |value: Option<String>| {
        value
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
    };

    if let Some(origin) = non_empty(cors_origin) {
        return Ok(origin);
    }
    if environment.is_development() {
        return Ok(DEVELOPMENT_ORIGIN.to_string());
    }
    non_empty(site_url).context("SITE_URL must be set outside development")
}

/// Split a comma-separated list, dropping blanks.
pub fn parse_label_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
