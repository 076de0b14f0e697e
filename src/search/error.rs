//! Errors produced while searching.

use thiserror::Error;

/// Why a search produced no usable page of results.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The request never got a response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("search service returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message from the response body, if any.
        message: String,
    },

    /// The response had no item list, e.g. a rate-limit notice or
    /// malformed JSON.
    #[error("unusable search response: {0}")]
    Unusable(String),

    /// Configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
