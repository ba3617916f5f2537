//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `FtError` as one variant
//! where they need to surface core failures.

use thiserror::Error;

/// The top-level error type for `ft-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FtError {
    /// The startup location was not a JSON array of 2 or 3 numbers.
    #[error("invalid location {input:?}: {reason}")]
    Location { input: String, reason: String },

    /// The startup heading was not a finite number of degrees.
    #[error("invalid heading {input:?}: {reason}")]
    Heading { input: String, reason: String },

    #[error("unknown device kind {0:?} (expected car, drone or phone)")]
    UnknownKind(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ft-*` crates.
pub type FtResult<T> = Result<T, FtError>;
