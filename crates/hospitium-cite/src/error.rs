//! Error types for citation processing.
//!
//! Formatting itself never fails: missing fields degrade to placeholders.
//! These errors cover the edges of the pipeline (configuration, decoding,
//! export and the bibliography precondition).

use thiserror::Error;

/// Result type alias for hospitium-cite operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around citation processing.
#[derive(Debug, Error)]
pub enum Error {
    /// A bibliography was requested for zero entries.
    #[error("Cannot assemble a bibliography from zero entries")]
    EmptyBibliography,

    /// Citation style outside APA / MLA / Chicago.
    #[error("Unsupported citation style '{value}' (expected APA, MLA or Chicago)")]
    UnsupportedStyle { value: String },

    /// Sort order outside the known orderings.
    #[error(
        "Unsupported sort order '{value}' (expected alphabetical, chronological, reverse-chronological or citation-count)"
    )]
    UnsupportedSortOrder { value: String },

    /// Configuration text could not be parsed.
    #[error("Invalid citation configuration: {message}")]
    InvalidConfig { message: String },

    /// Citation record payload could not be decoded.
    #[error("Invalid citation records: {message}")]
    InvalidRecords { message: String },

    /// CSV writer failure.
    #[error("CSV export failed: {0}")]
    Export(#[from] csv::Error),

    /// I/O error (e.g., reading a configuration file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::InvalidConfig {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidRecords {
            message: err.to_string(),
        }
    }
}
