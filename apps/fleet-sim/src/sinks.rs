//! Sink selection from command-line flags.

use std::path::Path;

use anyhow::{Context, Result, bail};
use ft_sim::FleetConfig;
use ft_telemetry::{AnySink, CsvSink, HttpSink, LogSink};
use tracing::info;

/// Network sink unless offline; offline writes to `record` if given, else
/// to the log.  Offline may come from `--test` or from the config file.
pub fn build_sink(config: &FleetConfig, record: Option<&Path>) -> Result<AnySink> {
    if !config.offline {
        if let Some(path) = record {
            bail!("--record {} needs offline mode (--test or \"offline\": true)", path.display());
        }
        let sink = HttpSink::new(&config.endpoint, config.request_timeout())
            .context("building HTTP client")?;
        info!(url = %sink.records_url(&config.stream_name), "sending telemetry");
        return Ok(sink.into());
    }
    match record {
        Some(path) => {
            let sink = CsvSink::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            info!(path = %path.display(), "offline: recording telemetry to CSV");
            Ok(sink.into())
        }
        None => {
            info!("offline: logging telemetry");
            Ok(LogSink.into())
        }
    }
}
