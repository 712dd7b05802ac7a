// config.rs
use dotenv::dotenv;
use std::path::PathBuf;
use std::{env, fmt};

pub const DEFAULT_DATA_FILE: &str = "asn_dummy_500.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    pub static_dir: PathBuf,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(v) => write!(f, "APP_PORT tidak valid: {}", v),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("APP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => 8000,
        };

        Ok(Self {
            data_file: lookup("DATA_FILE")
                .unwrap_or_else(|| DEFAULT_DATA_FILE.into())
                .into(),
            host: lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".into()),
            port,
            cors_origin: lookup("CORS_ORIGIN").unwrap_or_else(|| "http://localhost:3000".into()),
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "./static".into()).into(),
        })
    }
}
