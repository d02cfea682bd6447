//! Process configuration
//!
//! All upstream endpoints and credentials are supplied through the
//! environment and injected explicitly into the outbound clients; no
//! configuration is read at call time.

use bridge_http::SapCredentials;
use thiserror::Error;

/// Default shipping-provider endpoint.
pub const DEFAULT_MYPARCEL_URL: &str = "https://api.myparcel.nl";

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Errors that can occur while reading configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

/// Resolved process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub sap: SapCredentials,
    pub myparcel_base_url: String,
    pub myparcel_api_key: String,
    pub bind_addr: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `SAP_BASE_URL`, `SAP_COMPANY_DB`, `SAP_USERNAME`, `SAP_PASSWORD` and
    /// `MYPARCEL_API_KEY` are required. `MYPARCEL_BASE_URL` and `BIND_ADDR`
    /// have defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            sap: SapCredentials {
                base_url: require("SAP_BASE_URL")?,
                company_db: require("SAP_COMPANY_DB")?,
                username: require("SAP_USERNAME")?,
                password: require("SAP_PASSWORD")?,
            },
            myparcel_base_url: std::env::var("MYPARCEL_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_MYPARCEL_URL.to_string()),
            myparcel_api_key: require("MYPARCEL_API_KEY")?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::Missing(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment mutation is process-wide; serialize the tests touching it.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn set_required_vars() {
        std::env::set_var("SAP_BASE_URL", "http://localhost:50000/b1s/v1");
        std::env::set_var("SAP_COMPANY_DB", "SBODEMO");
        std::env::set_var("SAP_USERNAME", "manager");
        std::env::set_var("SAP_PASSWORD", "secret");
        std::env::set_var("MYPARCEL_API_KEY", "bearer key");
    }

    #[test]
    fn test_from_env_with_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_required_vars();
        std::env::remove_var("MYPARCEL_BASE_URL");
        std::env::remove_var("BIND_ADDR");

        let config = Config::from_env().unwrap();
        assert_eq!(config.sap.company_db, "SBODEMO");
        assert_eq!(config.myparcel_base_url, DEFAULT_MYPARCEL_URL);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn test_missing_api_key_is_reported_by_name() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_required_vars();
        std::env::remove_var("MYPARCEL_API_KEY");

        let err = Config::from_env().unwrap_err();
        assert_eq!(err, ConfigError::Missing("MYPARCEL_API_KEY"));
    }
}
