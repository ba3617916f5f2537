//! The `TelemetrySink` trait implemented by every delivery target.

use std::future::Future;
use std::sync::Arc;

use crate::{CsvSink, HttpSink, LogSink, SinkResult};

/// Somewhere a serialized payload can be put.
///
/// One call is one delivery attempt; the emitter owns retries.  Sinks are
/// shared across agent tasks, so they take `&self` and must be `Send + Sync`.
pub trait TelemetrySink: Send + Sync + 'static {
    /// Deliver `data` to `stream`, keyed by `partition_key`.
    fn put_record(
        &self,
        stream:        &str,
        partition_key: &str,
        data:          &[u8],
    ) -> impl Future<Output = SinkResult<()>> + Send;
}

impl<S: TelemetrySink> TelemetrySink for Arc<S> {
    fn put_record(
        &self,
        stream:        &str,
        partition_key: &str,
        data:          &[u8],
    ) -> impl Future<Output = SinkResult<()>> + Send {
        (**self).put_record(stream, partition_key, data)
    }
}

// ── AnySink ───────────────────────────────────────────────────────────────────

/// Runtime choice between the network sink and the two offline sinks.
///
/// Offline mode is just a different variant: agents see the same
/// [`TelemetrySink`] either way.
pub enum AnySink {
    Http(HttpSink),
    Log(LogSink),
    Csv(CsvSink),
}

impl TelemetrySink for AnySink {
    async fn put_record(&self, stream: &str, partition_key: &str, data: &[u8]) -> SinkResult<()> {
        match self {
            AnySink::Http(s) => s.put_record(stream, partition_key, data).await,
            AnySink::Log(s)  => s.put_record(stream, partition_key, data).await,
            AnySink::Csv(s)  => s.put_record(stream, partition_key, data).await,
        }
    }
}

impl From<HttpSink> for AnySink {
    fn from(s: HttpSink) -> Self {
        AnySink::Http(s)
    }
}

impl From<LogSink> for AnySink {
    fn from(s: LogSink) -> Self {
        AnySink::Log(s)
    }
}

impl From<CsvSink> for AnySink {
    fn from(s: CsvSink) -> Self {
        AnySink::Csv(s)
    }
}
