use cgi_client::CgiError;
use thiserror::Error;

use crate::result_code::CgiResult;

/// High-level API errors for Foscam operations
///
/// Response normalization itself never fails; these errors come from the
/// transport, from configuration, or from a command whose reply does not
/// have the shape the command expects.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    ///
    /// Connection refused, timeouts, DNS failures or a body that could not
    /// be read.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The camera answered with a non-success HTTP status
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// TLS setup for the transport failed
    #[error("TLS error: {0}")]
    TlsError(String),

    /// The client configuration cannot be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid parameter value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The reply was absent, not XML, or missing fields a command needs
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// The camera reported a non-zero `result` code
    #[error("CGI command failed: {0}")]
    CgiFailure(CgiResult),

    /// A parsed reply could not be mapped onto its typed form
    #[error("Decode error: {0}")]
    DecodeError(String),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<CgiError> for ApiError {
    fn from(error: CgiError) -> Self {
        match error {
            CgiError::Network(msg) => ApiError::NetworkError(msg),
            CgiError::Http(code) => ApiError::HttpStatus(code),
            CgiError::Tls(msg) => ApiError::TlsError(msg),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::DecodeError(error.to_string())
    }
}
