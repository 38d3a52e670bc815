//! Error types for the CGI client

use thiserror::Error;

/// Errors that can occur while talking to a device over HTTP
#[derive(Debug, Error)]
pub enum CgiError {
    /// Network or I/O failure (connection refused, timeout, truncated body)
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The device answered with a non-success HTTP status
    #[error("HTTP status {0}")]
    Http(u16),

    /// TLS connector could not be built
    #[error("TLS setup failed: {0}")]
    Tls(String),
}
