//! Offline sink that writes every record to the log.

use tracing::info;

use crate::{SinkResult, TelemetrySink};

/// Logs each payload at `info` and always succeeds.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl TelemetrySink for LogSink {
    async fn put_record(&self, stream: &str, partition_key: &str, data: &[u8]) -> SinkResult<()> {
        info!(
            stream,
            device = partition_key,
            payload = %String::from_utf8_lossy(data),
            "offline telemetry"
        );
        Ok(())
    }
}
