//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;

use thiserror::Error;

pub const BIND_ADDR_ENV: &str = "USERHUB_BIND_ADDR";
pub const PUBLIC_URL_ENV: &str = "USERHUB_PUBLIC_URL";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("USERHUB_BIND_ADDR: invalid socket address `{0}`")]
    InvalidBindAddr(String),
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Base for `Location` headers (e.g. `https://users.example.com`).
    /// When unset, `Location` is a path relative to the request host.
    pub public_base_url: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            public_base_url: None,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (env, test map, ...).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(BIND_ADDR_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(raw_addr.clone()))?;

        let public_base_url = lookup(PUBLIC_URL_ENV)
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());

        Ok(Self {
            bind_addr,
            public_base_url,
        })
    }

    /// Public location of a user resource.
    pub fn user_location(&self, user_id: &str) -> String {
        format!(
            "{}/api/v1/users/{}",
            self.public_base_url.as_deref().unwrap_or(""),
            user_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn reads_bind_addr_and_public_url() {
        let config = ApiConfig::from_lookup(lookup(&[
            (BIND_ADDR_ENV, "127.0.0.1:9000"),
            (PUBLIC_URL_ENV, "https://users.example.com/"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(
            config.user_location("abc"),
            "https://users.example.com/api/v1/users/abc"
        );
    }

    #[test]
    fn rejects_malformed_bind_addr() {
        let err = ApiConfig::from_lookup(lookup(&[(BIND_ADDR_ENV, "localhost")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidBindAddr("localhost".to_string()));
    }

    #[test]
    fn relative_location_without_public_url() {
        assert_eq!(ApiConfig::default().user_location("abc"), "/api/v1/users/abc");
    }
}
