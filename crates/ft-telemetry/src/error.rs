//! Error types for ft-telemetry.

use thiserror::Error;

/// A single failed delivery attempt.  Every variant is treated as transient
/// by the emitter.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ingestion endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("record is not a telemetry payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("sink rejected record: {0}")]
    Rejected(String),
}

/// Errors that escape [`TelemetryEmitter::emit`](crate::TelemetryEmitter::emit).
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("payload encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Alias for `Result<T, SinkError>`.
pub type SinkResult<T> = Result<T, SinkError>;

/// Alias for `Result<T, TelemetryError>`.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
