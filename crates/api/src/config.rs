use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::HeaderValue;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub introspection: bool,
    /// `None` allows any origin.
    pub allowed_origins: Option<Vec<HeaderValue>>,
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 4000,
            introspection: true,
            allowed_origins: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {raw:?}"))?,
            Err(_) => defaults.port,
        };

        let introspection = env::var("GQL_INTROSPECTION")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(defaults.introspection);

        let allowed_origins = env::var("ALLOWED_ORIGINS").ok().map(|origins| {
            origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect()
        });

        Ok(Self {
            port,
            introspection,
            allowed_origins,
            ..defaults
        })
    }
}
