use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Error opening configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_max_connections() -> u32 {
    5
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Config::from_json(&text)
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_keys_fall_back_to_defaults() {
        let config =
            Config::from_json(r#"{"port": 5000, "database_url": "postgres://localhost/booking"}"#)
                .unwrap();
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.listen_address(), "0.0.0.0:5000");
    }

    #[test]
    fn explicit_keys_win() {
        let config = Config::from_json(
            r#"{"port": 8080, "database_url": "postgres://db/booking",
                "max_connections": 12, "bind_address": "127.0.0.1"}"#,
        )
        .unwrap();
        assert_eq!(config.max_connections, 12);
        assert_eq!(config.listen_address(), "127.0.0.1:8080");
    }

    #[test]
    fn missing_database_url_is_malformed() {
        let err = Config::from_json(r#"{"port": 8080}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::load("/nonexistent/showbill.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
