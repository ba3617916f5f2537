//! Network sink: one POST per record.

use std::time::Duration;

use tracing::trace;

use crate::{SinkError, SinkResult, TelemetrySink};

pub const PARTITION_KEY_HEADER: &str = "x-partition-key";

/// Posts each record to `{endpoint}/streams/{stream}/records`.
///
/// Transport errors, timeouts and non-2xx responses are all failures of the
/// attempt.
#[derive(Clone, Debug)]
pub struct HttpSink {
    client:   reqwest::Client,
    endpoint: String,
}

impl HttpSink {
    pub fn new(endpoint: &str, timeout: Duration) -> SinkResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_owned(),
        })
    }

    pub fn records_url(&self, stream: &str) -> String {
        format!("{}/streams/{}/records", self.endpoint, stream)
    }
}

impl TelemetrySink for HttpSink {
    async fn put_record(&self, stream: &str, partition_key: &str, data: &[u8]) -> SinkResult<()> {
        let url = self.records_url(stream);
        trace!(%url, partition_key, bytes = data.len(), "put_record");

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(PARTITION_KEY_HEADER, partition_key)
            .body(data.to_vec())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(SinkError::Status { status: status.as_u16(), body })
    }
}
