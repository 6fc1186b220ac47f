//! Process configuration.
//!
//! Every setting can be given as a command-line flag or through the
//! environment. The store is optional: without `DATABASE_URL` the service
//! renders components but records nothing.

use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use thiserror::Error;

/// Default number of pooled store connections.
pub const DEFAULT_POOL_SIZE: u32 = 4;

/// Errors raised while interpreting configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The host could not be parsed as an IP address.
    #[error("invalid listen address '{host}': {reason}")]
    InvalidAddress {
        /// Host as configured.
        host: String,
        /// Parser message.
        reason: String,
    },
}

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "vibecraft", version, about = "VibeCraft generation backend")]
pub struct ServiceConfig {
    /// Postgres connection string. Persistence is disabled when unset.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Address to listen on.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Maximum pooled store connections.
    #[arg(
        long,
        env = "DATABASE_POOL_SIZE",
        default_value_t = DEFAULT_POOL_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub database_pool_size: u32,
}

impl ServiceConfig {
    /// Returns the configured store URL, treating a blank value as unset.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Resolves the listen address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddress`] when `host` is not an IP
    /// address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|err: std::net::AddrParseError| ConfigError::InvalidAddress {
                host: self.host.clone(),
                reason: err.to_string(),
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
