//! Filter errors.
//!
//! One enum covers every way a filter invocation can fail: the name is
//! unknown, the configuration is malformed, or the input text cannot be
//! interpreted by the filter (bad JSON, bad URL, bad base64, corrupt
//! compressed payload). Filters never produce partial output — any error
//! means the selection is left untouched by the harness.

use thiserror::Error;

/// Everything that can go wrong while building or applying a filter.
#[derive(Debug, Error)]
pub enum FilterError {
    /// No filter registered under the requested name.
    #[error("unknown filter `{0}`")]
    UnknownFilter(String),

    /// An option key the filter does not recognize.
    #[error("filter `{filter}` does not accept option `{key}`")]
    UnknownOption {
        /// The filter being configured.
        filter: &'static str,
        /// The offending option key.
        key: String,
    },

    /// An option value that failed to parse as its expected type.
    #[error("bad value `{value}` for option `{key}` ({expected})")]
    BadOption {
        /// The option key.
        key: String,
        /// The raw value as given.
        value: String,
        /// What the filter expected, e.g. `"true or false"`.
        expected: &'static str,
    },

    /// Input that was expected to be JSON but did not decode.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Input that was expected to be a URL but did not parse.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Input that was expected to be base64 but did not decode.
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Structured input (the URL object form) with a missing or
    /// wrongly-typed component.
    #[error("malformed input: {0}")]
    Malformed(String),

    /// I/O failure from the compression codec or the harness.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A decompressed payload that is not valid UTF-8 text.
    #[error("decoded payload is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}
