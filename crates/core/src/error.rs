//! Error types.
//!
//! Routine non-matches are `None`, never an error: scraped date text
//! failing to parse is the common case. Errors here cover contract
//! misuse only.

use thiserror::Error;

/// Errors raised for caller misuse rather than scraped-data noise.
#[derive(Debug, Error)]
pub enum ParseDateError {
    /// The caller-supplied reference instant is not an RFC 3339 string.
    #[error("invalid reference instant {input:?}: {source}")]
    InvalidReference {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}
