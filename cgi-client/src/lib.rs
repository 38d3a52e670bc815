//! Private HTTP client for Foscam CGI device communication
//!
//! This crate provides a minimal blocking client for the `CGIProxy.fcgi`
//! endpoint exposed by Foscam cameras. It only moves bytes: building the
//! command URL and normalizing the XML reply happen in the crates above it.

mod error;

pub use error::CgiError;

use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Connection settings for the transport
#[derive(Debug, Clone)]
pub struct TransportOptions {
    /// Maximum time to establish a connection
    /// Default: 5 seconds
    pub connect_timeout: Duration,

    /// Maximum time to wait for the response body
    /// Default: 10 seconds
    pub read_timeout: Duration,

    /// Reject self-signed or otherwise unverifiable certificates
    /// Default: true
    pub reject_unauthorized_certs: bool,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(10),
            reject_unauthorized_certs: true,
        }
    }
}

/// A minimal HTTP client for CGI device communication
#[derive(Debug, Clone)]
pub struct CgiClient {
    agent: ureq::Agent,
}

impl CgiClient {
    /// Create a new CGI client with default configuration
    pub fn new() -> Self {
        let options = TransportOptions::default();
        Self {
            agent: Self::agent_builder(&options).build(),
        }
    }

    /// Create a CGI client from explicit transport options
    ///
    /// Cameras ship with self-signed certificates, so HTTPS users commonly
    /// turn `reject_unauthorized_certs` off. In that case a native-tls
    /// connector that skips certificate and hostname verification is used.
    pub fn with_options(options: &TransportOptions) -> Result<Self, CgiError> {
        let mut builder = Self::agent_builder(options);

        if !options.reject_unauthorized_certs {
            let connector = native_tls::TlsConnector::builder()
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true)
                .build()
                .map_err(|e| CgiError::Tls(e.to_string()))?;
            builder = builder.tls_connector(Arc::new(connector));
        }

        Ok(Self {
            agent: builder.build(),
        })
    }

    fn agent_builder(options: &TransportOptions) -> ureq::AgentBuilder {
        ureq::AgentBuilder::new()
            .timeout_connect(options.connect_timeout)
            .timeout_read(options.read_timeout)
    }

    /// Issue a GET request and return the raw response body
    ///
    /// # Returns
    /// `Ok(None)` when the device answered with an empty body, otherwise the
    /// body text exactly as received.
    pub fn get(&self, url: &Url) -> Result<Option<String>, CgiError> {
        // The query carries credentials, so only the endpoint is logged
        tracing::debug!(host = url.host_str().unwrap_or_default(), path = url.path(), "CGI GET");

        let response = match self.agent.request_url("GET", url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => return Err(CgiError::Http(code)),
            Err(e) => return Err(CgiError::Network(e.to_string())),
        };

        let body = response
            .into_string()
            .map_err(|e| CgiError::Network(e.to_string()))?;

        tracing::trace!(bytes = body.len(), "CGI response received");

        if body.is_empty() {
            Ok(None)
        } else {
            Ok(Some(body))
        }
    }
}

impl Default for CgiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cgi_client_creation() {
        let _client = CgiClient::new();
        let _default_client = CgiClient::default();
    }

    #[test]
    fn test_transport_options_default() {
        let options = TransportOptions::default();
        assert_eq!(options.connect_timeout, Duration::from_secs(5));
        assert_eq!(options.read_timeout, Duration::from_secs(10));
        assert!(options.reject_unauthorized_certs);
    }

    #[test]
    fn test_with_options_accepting_invalid_certs() {
        let options = TransportOptions {
            reject_unauthorized_certs: false,
            ..Default::default()
        };
        assert!(CgiClient::with_options(&options).is_ok());
    }

    #[test]
    fn test_get_unreachable_host() {
        let options = TransportOptions {
            connect_timeout: Duration::from_millis(200),
            ..Default::default()
        };
        let client = CgiClient::with_options(&options).unwrap();
        // Port 9 (discard) on localhost is closed in test environments
        let url = Url::parse("http://127.0.0.1:9/cgi-bin/CGIProxy.fcgi").unwrap();

        match client.get(&url) {
            Err(CgiError::Network(_)) => {}
            other => panic!("Expected CgiError::Network, got {:?}", other),
        }
    }
}
