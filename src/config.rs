//! Configuration management for the contact service.
//!
//! This module handles loading and validating configuration from environment
//! variables. Every setting has a working default so the service can start
//! without any environment at all.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to (default: "127.0.0.1")
    pub bind_addr: String,

    /// Port the HTTP server listens on (default: 3000)
    pub port: u16,

    /// Base URL the submission client posts to (default: "http://127.0.0.1:3000")
    pub api_base_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Artificial processing delay applied by the logging sink, in
    /// milliseconds (default: 1000). Stands in for a real email or
    /// persistence collaborator.
    pub processing_delay_ms: u64,

    /// How long the success banner stays visible, in seconds (default: 5)
    pub success_banner_secs: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BIND_ADDR`: server bind address (default: "127.0.0.1")
    /// - `CONTACT_PORT`: server port (default: 3000)
    /// - `CONTACT_API_BASE_URL`: base URL for the submission client
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `PROCESSING_DELAY_MS`: sink delay in milliseconds (default: 1000)
    /// - `SUCCESS_BANNER_SECS`: success banner duration (default: 5)
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present, without failing when it is missing
        let _ = dotenvy::dotenv();

        let bind_addr = env::var("CONTACT_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = Self::parse_env_u16("CONTACT_PORT", 3000)?;

        let api_base_url = env::var("CONTACT_API_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let processing_delay_ms = Self::parse_env_u64("PROCESSING_DELAY_MS", 1000)?;
        let success_banner_secs = Self::parse_env_u64("SUCCESS_BANNER_SECS", 5)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            bind_addr,
            port,
            api_base_url,
            request_timeout,
            processing_delay_ms,
            success_banner_secs,
            log_level,
        })
    }

    /// Socket address string for the HTTP server.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a port number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: "127.0.0.1".to_string(),
            port: 3000,
            api_base_url: "http://127.0.0.1:3000".to_string(),
            request_timeout: 10,
            processing_delay_ms: 1000,
            success_banner_secs: 5,
            log_level: "info".to_string(),
        }
    }
}
