//! `ft-telemetry` — payload construction and delivery for the fleet_twin
//! simulator.
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`payload`] | [`Payload`], the one-JSON-object-per-tick wire shape       |
//! | [`sink`]    | [`TelemetrySink`] trait and [`AnySink`] runtime selection  |
//! | [`http`]    | [`HttpSink`], posts records to the ingestion endpoint      |
//! | [`log`]     | [`LogSink`], offline pass-through to `tracing`             |
//! | [`csv`]     | [`CsvSink`], offline recorder, one row per payload         |
//! | [`memory`]  | [`MemorySink`], in-memory recorder with scripted failures  |
//! | [`retry`]   | [`RetryPolicy`], attempts and exponential backoff bounds   |
//! | [`emitter`] | [`TelemetryEmitter`], serialize → deliver → retry or drop  |
//! | [`error`]   | [`SinkError`], [`TelemetryError`]                          |
//!
//! Delivery is at-most-once: after `max_attempts` failures a sample is logged
//! and dropped, and the emitter reports [`EmitOutcome::Dropped`] instead of
//! returning an error.  Only payload encoding failures propagate.

pub mod csv;
pub mod emitter;
pub mod error;
pub mod http;
pub mod log;
pub mod memory;
pub mod payload;
pub mod retry;
pub mod sink;

#[cfg(test)]
mod tests;

pub use csv::CsvSink;
pub use emitter::{EmitOutcome, EmitStats, EmitStatsSnapshot, TelemetryEmitter};
pub use error::{SinkError, SinkResult, TelemetryError, TelemetryResult};
pub use http::HttpSink;
pub use log::LogSink;
pub use memory::{MemorySink, SentRecord};
pub use payload::Payload;
pub use retry::RetryPolicy;
pub use sink::{AnySink, TelemetrySink};
