//! High-level API for Foscam camera control
//!
//! This crate talks to the `CGIProxy.fcgi` endpoint of Foscam IP cameras.
//! It uses the private `cgi-client` crate for HTTP and `foscam-parser` to
//! normalize XML replies.
//!
//! ```rust,no_run
//! use foscam_api::{FoscamClient, FoscamConfig, PtzCommand, Protocol};
//!
//! let config = FoscamConfig::new("192.168.1.50")
//!     .with_credentials("admin", "secret")
//!     .with_port(443)
//!     .with_protocol(Protocol::Https)
//!     .with_reject_unauthorized_certs(false);
//!
//! let client = FoscamClient::new(config)?;
//! client.ptz(PtzCommand::MoveLeft)?;
//! client.ptz(PtzCommand::Stop)?;
//! # Ok::<(), foscam_api::ApiError>(())
//! ```
//!
//! Commands without a typed wrapper go through [`FoscamClient::execute`],
//! with [`coerce`] translating `0`/`1` flags on the way in and out.

pub mod client;
pub mod coerce;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod result_code;

pub use client::FoscamClient;
pub use coerce::{boolean_to_number, number_to_boolean, Options};
pub use commands::{DeviceInfo, OsdSetting, PtzCommand};
pub use config::{FoscamConfig, Protocol, CGI_PATH};
pub use error::{ApiError, Result};
pub use foscam_parser::{parse_response, Response, Value};
pub use result_code::CgiResult;
