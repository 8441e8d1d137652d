//! Merchant dashboard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MERCHANT_HOST` - Bind address (default: 127.0.0.1)
//! - `MERCHANT_PORT` - Listen port (default: 3000)
//! - `REVIEWS_API_URL` - GraphQL endpoint of the review API
//!   (default: http://127.0.0.1:3001/graphql)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Merchant dashboard application configuration.
#[derive(Debug, Clone)]
pub struct MerchantConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// GraphQL endpoint of the review API
    pub reviews_api_url: String,
}

impl MerchantConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("MERCHANT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("MERCHANT_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("MERCHANT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("MERCHANT_PORT".to_string(), e.to_string()))?;
        let reviews_api_url =
            get_env_or_default("REVIEWS_API_URL", "http://127.0.0.1:3001/graphql");

        Ok(Self {
            host,
            port,
            reviews_api_url,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = MerchantConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            reviews_api_url: "http://127.0.0.1:3001/graphql".to_string(),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
