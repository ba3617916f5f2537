//! Offline sink that records payloads as CSV rows.
//!
//! Columns: `device_id,timestamp,status,lat,lon,alt,resource_key,resource`.

use std::fs::File;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use csv::Writer;

use crate::{Payload, SinkResult, TelemetrySink};

pub const CSV_HEADER: [&str; 8] =
    ["device_id", "timestamp", "status", "lat", "lon", "alt", "resource_key", "resource"];

/// Appends one row per payload to a single CSV file.
///
/// Shared by every agent of a fleet, hence the mutex.  Rows are flushed per
/// record so a cancelled run leaves a complete file.
pub struct CsvSink {
    writer: Mutex<Writer<File>>,
}

impl CsvSink {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path) -> SinkResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(CSV_HEADER)?;
        writer.flush()?;
        Ok(Self { writer: Mutex::new(writer) })
    }

    /// Write one payload synchronously.
    pub fn record(&self, payload: &Payload) -> SinkResult<()> {
        let mut w = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        write_row(&mut w, payload)?;
        w.flush()?;
        Ok(())
    }

    /// Write a batch under a single lock and flush once.
    pub fn record_all(&self, payloads: &[Payload]) -> SinkResult<()> {
        let mut w = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        for p in payloads {
            write_row(&mut w, p)?;
        }
        w.flush()?;
        Ok(())
    }
}

fn write_row(w: &mut Writer<File>, p: &Payload) -> SinkResult<()> {
    let level = p.resource_level().map(|v| v.to_string()).unwrap_or_default();
    w.write_record(&[
        p.device_id.to_string(),
        p.timestamp.to_string(),
        p.status.to_string(),
        p.location.lat.to_string(),
        p.location.lon.to_string(),
        p.location.alt.to_string(),
        p.resource_key().to_owned(),
        level,
    ])?;
    Ok(())
}

impl TelemetrySink for CsvSink {
    async fn put_record(&self, _stream: &str, _partition_key: &str, data: &[u8]) -> SinkResult<()> {
        let payload: Payload = serde_json::from_slice(data)?;
        self.record(&payload)
    }
}
