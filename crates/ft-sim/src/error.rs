use ft_core::FtError;
use ft_telemetry::{SinkError, TelemetryError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("fleet configuration error: {0}")]
    Config(String),

    #[error("invalid config file: {0}")]
    ConfigFile(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] FtError),

    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),

    #[error("sink error: {0}")]
    Sink(#[from] SinkError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
