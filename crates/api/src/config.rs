//! Server configuration.
//!
//! The listen address is fixed at port 3000 unless `STOREFRONT_ADDR` overrides it.

use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;

/// Environment variable holding the socket address to bind.
pub const ADDR_ENV: &str = "STOREFRONT_ADDR";

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a socket address: {value:?}")]
    InvalidAddr { var: &'static str, value: String },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// An invalid value is logged and replaced by the default rather than aborting startup.
    pub fn from_env() -> Self {
        match Self::from_lookup(|key| std::env::var(key).ok()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}; using default {}", Self::default().bind_addr);
                Self::default()
            }
        }
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let Some(value) = lookup(ADDR_ENV) else {
            return Ok(Self::default());
        };
        let bind_addr = value.trim().parse().map_err(|_| ConfigError::InvalidAddr {
            var: ADDR_ENV,
            value,
        })?;
        Ok(Self { bind_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_port_3000_on_all_interfaces() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse().unwrap());
    }

    #[test]
    fn env_override_is_parsed() {
        let config = ServerConfig::from_lookup(|key| {
            (key == ADDR_ENV).then(|| "127.0.0.1:8081".to_string())
        })
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8081".parse().unwrap());
    }

    #[test]
    fn invalid_override_is_an_error() {
        let err = ServerConfig::from_lookup(|_| Some("not-an-addr".to_string())).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidAddr {
                var: ADDR_ENV,
                value: "not-an-addr".to_string()
            }
        );
    }
}
