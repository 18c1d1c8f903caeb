//! Crate-wide error type.
//!
//! Validation failures get their own variants; parse failures from the
//! underlying date/number/base64/XML calls propagate through `#[from]`
//! conversions unchanged. There is no retry or fallback layer anywhere in
//! this crate: every error is fatal to the current call.

use thiserror::Error;

/// Errors produced by the model, XML, and extension layers
#[derive(Debug, Error)]
pub enum Error {
    /// A required string field was assigned an empty value
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    /// A required child element was absent during XML decode
    #[error("missing required element: {name}")]
    MissingElement { name: String },

    /// An element's name did not match the type being decoded
    #[error("unexpected element <{found}>, expected <{expected}>")]
    UnexpectedElement { expected: String, found: String },

    /// Structurally broken input (unbalanced tags, empty document, bad payload)
    #[error("malformed input: {0}")]
    Malformed(String),

    /// URL failed to parse when appending query parameters
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    #[error("invalid number: {0}")]
    Number(#[from] std::num::ParseIntError),

    #[error("invalid boolean: {0}")]
    Boolean(#[from] std::str::ParseBoolError),

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid hex payload: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("invalid utf-8 payload: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("xml attribute error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    #[error("xml serde error: {0}")]
    XmlSerde(#[from] quick_xml::DeError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
