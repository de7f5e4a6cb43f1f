//! Server configuration from environment variables
//!
//! - `EVENTS_HOST`: IP address to bind (default `0.0.0.0`)
//! - `EVENTS_PORT`: TCP port to bind (default `8080`, `0` picks a free port)

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::types::ServiceResult;

/// Listen address for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub const HOST_VAR: &'static str = "EVENTS_HOST";
    pub const PORT_VAR: &'static str = "EVENTS_PORT";
    pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
    pub const DEFAULT_PORT: u16 = 8080;

    /// Load configuration from the process environment
    pub fn from_env() -> ServiceResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Unset keys fall back to the defaults; set but unparsable keys are errors.
    pub fn from_lookup<F>(lookup: F) -> ServiceResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup(Self::HOST_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {} value '{}': {}", Self::HOST_VAR, raw, e))?,
            None => Self::DEFAULT_HOST,
        };

        let port = match lookup(Self::PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {} value '{}': {}", Self::PORT_VAR, raw, e))?,
            None => Self::DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// Socket address to bind
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST,
            port: Self::DEFAULT_PORT,
        }
    }
}
