//! HTTP server configuration object.

use std::net::SocketAddr;

/// Bind address and CORS origin for [`super::create_server`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) cors_origin: String,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, cors_origin: impl Into<String>) -> Self {
        Self {
            bind_addr,
            cors_origin: cors_origin.into(),
        }
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Origin allowed to call the API from a browser.
    #[must_use]
    pub fn cors_origin(&self) -> &str {
        &self.cors_origin
    }
}
