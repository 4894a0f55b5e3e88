use axum::http::HeaderValue;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_FIELD_URL: &str = "https://feeds.datagolf.com/field-updates";
pub const DEFAULT_SCHEDULE_PATH: &str = "Data/Schedule.xlsx";
pub const DEFAULT_RANKINGS_PATH: &str = "Data/GolfRankings.xlsx";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOST is not a valid IP address: {0}")]
    InvalidHost(String),

    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),

    #[error("ALLOWED_ORIGIN is not a valid header value: {0}")]
    InvalidOrigin(String),
}

/// Upstream field-updates feed and the fixed query it is called with.
#[derive(Debug, Clone)]
pub struct FieldUpstream {
    pub url: String,
    pub tour: String,
    pub file_format: String,
    pub api_key: String,
}

impl Default for FieldUpstream {
    fn default() -> Self {
        Self {
            url: DEFAULT_FIELD_URL.to_string(),
            tour: "pga".to_string(),
            file_format: "json".to_string(),
            api_key: String::new(),
        }
    }
}

/// Process-wide settings, read once at startup and shared read-only by every handler.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub allowed_origin: HeaderValue,
    pub field: FieldUpstream,
    pub schedule_path: PathBuf,
    pub rankings_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            allowed_origin: HeaderValue::from_static(DEFAULT_ORIGIN),
            field: FieldUpstream::default(),
            schedule_path: PathBuf::from(DEFAULT_SCHEDULE_PATH),
            rankings_path: PathBuf::from(DEFAULT_RANKINGS_PATH),
        }
    }
}

impl Config {
    /// Build the config from process environment variables (after `.env` is loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Unset or blank keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Config::default();

        if let Some(host) = get("HOST") {
            config.host = host.parse().map_err(|_| ConfigError::InvalidHost(host))?;
        }

        if let Some(port) = get("PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;
        }

        if let Some(origin) = get("ALLOWED_ORIGIN") {
            config.allowed_origin =
                HeaderValue::from_str(&origin).map_err(|_| ConfigError::InvalidOrigin(origin))?;
        }

        if let Some(url) = get("FIELD_URL") {
            config.field.url = url;
        }
        if let Some(tour) = get("FIELD_TOUR") {
            config.field.tour = tour;
        }
        if let Some(format) = get("FIELD_FILE_FORMAT") {
            config.field.file_format = format;
        }
        if let Some(key) = get("DATAGOLF_API_KEY") {
            config.field.api_key = key;
        }

        if let Some(path) = get("SCHEDULE_PATH") {
            config.schedule_path = PathBuf::from(path);
        }
        if let Some(path) = get("RANKINGS_PATH") {
            config.rankings_path = PathBuf::from(path);
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
