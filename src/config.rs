use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_FINNHUB_BASE_URL: &str = "https://finnhub.io/api/v1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API Key not found. Please set it in the environment variable 'FINNHUB_API_KEY'.")]
    MissingApiKey,

    #[error("invalid FINNHUB_BASE_URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("invalid HOST '{0}'")]
    InvalidHost(String),

    #[error("invalid PORT '{0}'")]
    InvalidPort(String),
}

/// Everything the service needs at startup. Built once in `main` and handed
/// to the components that need it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub finnhub_api_key: String,
    pub finnhub_base_url: String,
    pub host: IpAddr,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let finnhub_api_key = lookup("FINNHUB_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let finnhub_base_url = lookup("FINNHUB_BASE_URL")
            .unwrap_or_else(|| DEFAULT_FINNHUB_BASE_URL.to_string());
        url::Url::parse(&finnhub_base_url)
            .map_err(|_| ConfigError::InvalidBaseUrl(finnhub_base_url.clone()))?;

        let host_raw = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let host = host_raw
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host_raw.clone()))?;

        let port_raw = lookup("PORT").unwrap_or_else(|| "3000".to_string());
        let port = port_raw
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port_raw.clone()))?;

        Ok(Self {
            finnhub_api_key,
            finnhub_base_url: finnhub_base_url.trim_end_matches('/').to_string(),
            host,
            port,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
