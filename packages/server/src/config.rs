use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Deployment environment. Controls the `Secure` attribute on the session
/// cookie: local development runs without TLS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub token_secret: String,
    pub token_issuer: String,
    pub environment: Environment,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let environment = match env::var("ENVIRONMENT").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            token_secret: env::var("TOKEN_SECRET").context("TOKEN_SECRET must be set")?,
            token_issuer: env::var("TOKEN_ISSUER").unwrap_or_else(|_| "luna".to_string()),
            environment,
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_flags() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Development.is_production());
    }
}
