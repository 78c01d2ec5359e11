//! Application settings loaded via OrthoConfig.
//!
//! Values layer CLI flags over `ACADEMIC_*` environment variables over
//! configuration files over the defaults declared on each field.

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MONGO_URL: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "academic_db";
const DEFAULT_MONGO_TIMEOUT_SECS: u64 = 5;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_STORE: &str = "mongo";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("unknown store kind `{0}`; expected `mongo` or `memory`")]
    UnknownStore(String),
    #[error("invalid host `{0}`; expected an IP address")]
    InvalidHost(String),
}

/// Backing document store selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreKind {
    #[default]
    Mongo,
    /// Process-local store; contents vanish on restart.
    Memory,
}

impl FromStr for StoreKind {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "memory" => Ok(Self::Memory),
            _ => Err(SettingsError::UnknownStore(s.to_owned())),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mongo => "mongo",
            Self::Memory => "memory",
        })
    }
}

/// Server, store, and CORS settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ACADEMIC")]
pub struct AppSettings {
    /// Interface to bind.
    #[ortho_config(default = String::from(DEFAULT_HOST))]
    pub host: String,
    /// TCP port to bind.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
    /// `mongo` or `memory`.
    #[ortho_config(default = String::from(DEFAULT_STORE))]
    pub store: String,
    /// MongoDB connection string.
    #[ortho_config(default = String::from(DEFAULT_MONGO_URL))]
    pub mongo_url: String,
    /// Database holding the three collections.
    #[ortho_config(default = String::from(DEFAULT_DATABASE))]
    pub database: String,
    /// Seconds to wait for a MongoDB server before failing an operation.
    #[ortho_config(default = DEFAULT_MONGO_TIMEOUT_SECS)]
    pub mongo_timeout_secs: u64,
    /// Single origin allowed by CORS.
    #[ortho_config(default = String::from(DEFAULT_CORS_ORIGIN))]
    pub cors_origin: String,
}

impl AppSettings {
    /// Socket address built from `host` and `port`.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| SettingsError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// # Errors
    /// Returns [`SettingsError::UnknownStore`] for anything but `mongo` or `memory`.
    pub fn store_kind(&self) -> Result<StoreKind, SettingsError> {
        StoreKind::from_str(&self.store)
    }

    pub fn mongo_url(&self) -> &str {
        self.mongo_url.as_str()
    }

    pub fn mongo_timeout(&self) -> Duration {
        Duration::from_secs(self.mongo_timeout_secs)
    }

    pub fn database(&self) -> &str {
        self.database.as_str()
    }

    pub fn cors_origin(&self) -> &str {
        self.cors_origin.as_str()
    }
}
