// src/config.rs
use crate::application::{commands::monuments::MonumentCommandSettings, services::ServiceSettings};
use crate::domain::monument::SlugPolicy;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    public_base_url: Option<String>,
    slug_max_suffix: u32,
    slug_persist_attempts: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://heritage.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_persist_attempts() -> u32 {
    3
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates numeric knobs.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let public_base_url = lookup("PUBLIC_BASE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let slug_max_suffix = parse_u32(&lookup, "SLUG_MAX_SUFFIX")?
            .unwrap_or(SlugPolicy::DEFAULT_MAX_SUFFIX);
        if slug_max_suffix < 2 {
            return Err(ConfigError::Invalid(
                "SLUG_MAX_SUFFIX must be at least 2".into(),
            ));
        }

        let slug_persist_attempts = parse_u32(&lookup, "SLUG_PERSIST_ATTEMPTS")?
            .unwrap_or_else(default_persist_attempts);
        if slug_persist_attempts == 0 {
            return Err(ConfigError::Invalid(
                "SLUG_PERSIST_ATTEMPTS must be at least 1".into(),
            ));
        }

        Ok(Self {
            database_url,
            listen_addr,
            public_base_url,
            slug_max_suffix,
            slug_persist_attempts,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Prefix for the public page links in monument responses.
    pub fn public_base_url(&self) -> Option<&str> {
        self.public_base_url.as_deref()
    }

    pub fn slug_max_suffix(&self) -> u32 {
        self.slug_max_suffix
    }

    pub fn slug_persist_attempts(&self) -> u32 {
        self.slug_persist_attempts
    }

    pub fn service_settings(&self) -> Result<ServiceSettings, ConfigError> {
        let slug_policy = SlugPolicy::new(self.slug_max_suffix)
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;
        Ok(ServiceSettings {
            slug_policy,
            commands: MonumentCommandSettings {
                persist_attempts: self.slug_persist_attempts,
                public_base_url: self.public_base_url.clone(),
            },
        })
    }
}

fn parse_u32(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<u32>, ConfigError> {
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::Invalid(format!("{key} must be a positive integer, got `{raw}`")))
        })
        .transpose()
}
