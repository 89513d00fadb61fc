//! Runtime configuration read from the environment.

use anyhow::{Context, Result};
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:minicash.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub cors_origin: String,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// Outside production a `.env` file is loaded first if present.
    pub fn from_env() -> Result<Self> {
        if std::env::var("ENV").ok().as_deref() != Some("prod") {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind_addr = value("BIND_ADDR", DEFAULT_BIND_ADDR);

        Ok(Self {
            database_url: value("DATABASE_URL", DEFAULT_DATABASE_URL),
            bind_addr: bind_addr
                .parse()
                .with_context(|| format!("BIND_ADDR '{bind_addr}' is not a socket address"))?,
            cors_origin: value("CORS_ORIGIN", DEFAULT_CORS_ORIGIN),
        })
    }
}
