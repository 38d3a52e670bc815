//! Configuration types for the Foscam client
//!
//! A camera is addressed by host, port and scheme, and authenticated with
//! the `usr`/`pwd` pair the CGI endpoint expects in every query.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use cgi_client::TransportOptions;

use crate::error::{ApiError, Result};

/// Path of the CGI endpoint on every Foscam camera
pub const CGI_PATH: &str = "/cgi-bin/CGIProxy.fcgi";

/// URL scheme used to reach the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    #[default]
    Http,
    Https,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Http => f.write_str("http"),
            Protocol::Https => f.write_str("https"),
        }
    }
}

impl FromStr for Protocol {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            other => Err(ApiError::InvalidConfig(format!("unsupported protocol '{}'", other))),
        }
    }
}

/// Configuration for a [`crate::FoscamClient`]
#[derive(Debug, Clone)]
pub struct FoscamConfig {
    /// Account name sent as `usr`
    /// Default: "admin"
    pub username: String,

    /// Account password sent as `pwd`
    /// Default: ""
    pub password: String,

    /// Camera host name or IP address (required)
    pub host: String,

    /// Camera port
    /// Default: 88 (the factory HTTP port)
    pub port: u16,

    /// URL scheme
    /// Default: http
    pub protocol: Protocol,

    /// Refuse certificates that cannot be verified
    /// Default: true
    pub reject_unauthorized_certs: bool,

    /// Connection timeout
    /// Default: 5 seconds
    pub connect_timeout: Duration,

    /// Response read timeout
    /// Default: 10 seconds
    pub read_timeout: Duration,
}

impl Default for FoscamConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: String::new(),
            host: String::new(),
            port: 88,
            protocol: Protocol::Http,
            reject_unauthorized_certs: true,
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(10),
        }
    }
}

impl FoscamConfig {
    /// Create a configuration for `host` with default values otherwise
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn with_reject_unauthorized_certs(mut self, reject: bool) -> Self {
        self.reject_unauthorized_certs = reject;
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, read: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self
    }

    /// Check that the configuration can address a camera
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ApiError::InvalidConfig("host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(ApiError::InvalidConfig("port must not be 0".to_string()));
        }
        Ok(())
    }

    /// Base URL of the CGI endpoint, e.g.
    /// `https://192.168.1.50:443/cgi-bin/CGIProxy.fcgi`
    pub fn endpoint(&self) -> String {
        format!("{}://{}:{}{}", self.protocol, self.host, self.port, CGI_PATH)
    }

    pub(crate) fn transport_options(&self) -> TransportOptions {
        TransportOptions {
            connect_timeout: self.connect_timeout,
            read_timeout: self.read_timeout,
            reject_unauthorized_certs: self.reject_unauthorized_certs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_valid_certs_only() {
        let config = FoscamConfig::default();
        assert!(config.reject_unauthorized_certs);
        assert_eq!(config.port, 88);
        assert_eq!(config.protocol, Protocol::Http);
        assert_eq!(config.username, "admin");
    }

    #[test]
    fn test_allows_accepting_invalid_certs() {
        let config = FoscamConfig::new("cam.local").with_reject_unauthorized_certs(false);
        assert!(!config.reject_unauthorized_certs);
        assert!(!config.transport_options().reject_unauthorized_certs);
    }

    #[test]
    fn test_endpoint() {
        let config = FoscamConfig::new("192.168.1.50")
            .with_credentials("foo", "bar")
            .with_port(443)
            .with_protocol(Protocol::Https);

        assert_eq!(config.endpoint(), "https://192.168.1.50:443/cgi-bin/CGIProxy.fcgi");
    }

    #[test]
    fn test_validate() {
        assert!(FoscamConfig::new("192.168.1.50").validate().is_ok());
        assert!(matches!(FoscamConfig::default().validate(), Err(ApiError::InvalidConfig(_))));
        assert!(matches!(FoscamConfig::new("  ").validate(), Err(ApiError::InvalidConfig(_))));
        assert!(matches!(
            FoscamConfig::new("cam").with_port(0).validate(),
            Err(ApiError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_protocol_parsing() {
        assert_eq!("HTTPS".parse::<Protocol>().unwrap(), Protocol::Https);
        assert_eq!("http".parse::<Protocol>().unwrap(), Protocol::Http);
        assert!("rtsp".parse::<Protocol>().is_err());
        assert_eq!(Protocol::Https.to_string(), "https");
    }
}
