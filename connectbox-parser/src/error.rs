//! Error types for XML decoding operations

use thiserror::Error;

/// Errors that can occur while decoding a getter.xml response
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// XML deserialization failed
    #[error("XML deserialization failed: {0}")]
    XmlDeserializationFailed(String),

    /// Uptime text did not match the `Nday(s)Hh:Mm:Ss` format
    #[error("invalid duration string: {0:?}")]
    InvalidDuration(String),

    /// The function code has no response record (setters, unknown codes)
    #[error("no decoder registered for function code {0}")]
    NoDecoder(String),
}

/// Result type alias for decoding operations
pub type ParseResult<T> = Result<T, ParseError>;
