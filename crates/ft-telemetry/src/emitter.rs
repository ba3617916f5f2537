//! `TelemetryEmitter<S>` — serialize, deliver, back off, give up.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, error, warn};

use crate::{Payload, RetryPolicy, TelemetryResult, TelemetrySink};

/// What happened to one payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitOutcome {
    Delivered { attempts: u32 },
    /// Every attempt failed; the sample is gone.
    Dropped { attempts: u32 },
}

impl EmitOutcome {
    pub fn is_delivered(self) -> bool {
        matches!(self, EmitOutcome::Delivered { .. })
    }

    pub fn attempts(self) -> u32 {
        match self {
            EmitOutcome::Delivered { attempts } | EmitOutcome::Dropped { attempts } => attempts,
        }
    }
}

// ── EmitStats ─────────────────────────────────────────────────────────────────

/// Delivery counters, shareable across every emitter of a fleet.
#[derive(Debug, Default)]
pub struct EmitStats {
    delivered: AtomicU64,
    dropped:   AtomicU64,
    retries:   AtomicU64,
}

/// A point-in-time copy of [`EmitStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmitStatsSnapshot {
    pub delivered: u64,
    pub dropped:   u64,
    pub retries:   u64,
}

impl EmitStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> EmitStatsSnapshot {
        EmitStatsSnapshot {
            delivered: self.delivered.load(Ordering::Relaxed),
            dropped:   self.dropped.load(Ordering::Relaxed),
            retries:   self.retries.load(Ordering::Relaxed),
        }
    }

    fn record_delivered(&self) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }

    fn record_dropped(&self) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
    }

    fn record_retry(&self) {
        self.retries.fetch_add(1, Ordering::Relaxed);
    }
}

// ── TelemetryEmitter ──────────────────────────────────────────────────────────

/// Delivers payloads to one stream through a [`TelemetrySink`].
pub struct TelemetryEmitter<S> {
    sink:   S,
    stream: String,
    policy: RetryPolicy,
    stats:  Arc<EmitStats>,
}

impl<S: TelemetrySink> TelemetryEmitter<S> {
    /// Emitter with the default [`RetryPolicy`] and its own stats.
    pub fn new(sink: S, stream: impl Into<String>) -> Self {
        Self {
            sink,
            stream: stream.into(),
            policy: RetryPolicy::default(),
            stats:  Arc::new(EmitStats::new()),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Count into `stats` instead of a private instance.
    pub fn with_stats(mut self, stats: Arc<EmitStats>) -> Self {
        self.stats = stats;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn stream(&self) -> &str {
        &self.stream
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn stats(&self) -> &Arc<EmitStats> {
        &self.stats
    }

    /// Serialize `payload` and deliver it, retrying per the policy.
    ///
    /// Delivery failures never escape: after the last attempt the sample is
    /// logged at `error` and [`EmitOutcome::Dropped`] is returned.  An `Err`
    /// means the payload could not be encoded at all.
    pub async fn emit(&self, payload: &Payload) -> TelemetryResult<EmitOutcome> {
        let data = serde_json::to_vec(payload)?;
        let key = payload.partition_key();
        let max = self.policy.attempts();

        for attempt in 1..=max {
            if attempt > 1 {
                self.stats.record_retry();
                let delay = self.policy.delay_before(attempt);
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            }

            match self.sink.put_record(&self.stream, key, &data).await {
                Ok(()) => {
                    debug!(device = key, attempt, "telemetry delivered");
                    self.stats.record_delivered();
                    return Ok(EmitOutcome::Delivered { attempts: attempt });
                }
                Err(e) => {
                    warn!(device = key, attempt, max, error = %e, "telemetry attempt failed");
                }
            }
        }

        error!(device = key, attempts = max, "telemetry dropped after retries");
        self.stats.record_dropped();
        Ok(EmitOutcome::Dropped { attempts: max })
    }
}
