//! Host configuration parsed from environment variables.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_BASE_URL: &str = client::config::DEFAULT_API_BASE_URL;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),

    /// `TESTGEN_API_BASE_URL` is not an http(s) URL.
    #[error("invalid TESTGEN_API_BASE_URL '{0}' (expected http:// or https://)")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the generation service, without trailing slash.
    pub api_base_url: String,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `TESTGEN_API_BASE_URL`: default `http://localhost:5000`
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let api_base_url = parse_base_url(std::env::var("TESTGEN_API_BASE_URL").ok().as_deref())?;
        Ok(Self { port, api_base_url })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Ok(DEFAULT_API_BASE_URL.to_owned());
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(value.to_owned()));
    }
    Ok(value.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
