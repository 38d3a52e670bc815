//! Error types for XML parsing operations

use thiserror::Error;

/// Errors raised while reading or writing response XML
///
/// None of these reach callers of [`crate::normalize`]; a failed parse is
/// reported there as [`crate::Response::Unparsed`].
#[derive(Error, Debug)]
pub enum ParseError {
    /// The input is not a single well-formed XML document
    #[error("Invalid XML structure: {0}")]
    InvalidXmlStructure(String),

    /// A canonical value could not be written back out as XML
    #[error("XML serialization failed: {0}")]
    XmlSerializationFailed(String),
}

/// Result type alias for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
