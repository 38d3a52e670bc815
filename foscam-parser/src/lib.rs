//! # foscam-parser
//!
//! Normalization of Foscam CGI XML responses into a canonical value.
//!
//! Every `CGIProxy.fcgi` reply is a small XML document wrapped in a
//! `<CGI_Result>` envelope. This crate parses it, removes the envelope and
//! converts leaf text into numbers wherever that is lossless.
//!
//! ## Usage
//!
//! ```rust
//! use foscam_parser::{normalize, Value};
//!
//! let xml = "<CGI_Result><result>0</result><mac>999999999999</mac></CGI_Result>";
//! let value = normalize(Some(xml)).into_value().unwrap();
//!
//! assert_eq!(value.get("mac"), Some(&Value::Number(999999999999.0)));
//! ```
//!
//! The asynchronous entry point [`parse_response`] has the same contract.

pub mod error;
pub mod normalize;
pub mod numeric;
pub mod value;

// Re-export error types for convenient top-level access
pub use error::{ParseError, ParseResult};

pub use normalize::{normalize, parse_response, Response, CGI_RESULT_ENVELOPE};
pub use value::Value;
