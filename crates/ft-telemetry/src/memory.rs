//! In-memory sink for tests and dry runs.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::{SinkError, SinkResult, TelemetrySink};

/// One successfully delivered record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRecord {
    pub stream:        String,
    pub partition_key: String,
    pub data:          Vec<u8>,
}

/// Records every delivered record; can be scripted to fail.
///
/// `fail_next(n)` makes the next `n` attempts fail; `always_failing()` makes
/// every attempt fail.  [`attempts`](Self::attempts) counts successes and
/// failures alike.
#[derive(Debug, Default)]
pub struct MemorySink {
    records:       Mutex<Vec<SentRecord>>,
    pending_fails: AtomicU32,
    always_fail:   bool,
    attempts:      AtomicU64,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn always_failing() -> Self {
        Self { always_fail: true, ..Self::default() }
    }

    pub fn fail_next(self, n: u32) -> Self {
        self.pending_fails.store(n, Ordering::Relaxed);
        self
    }

    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    pub fn records(&self) -> Vec<SentRecord> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn should_fail(&self) -> bool {
        if self.always_fail {
            return true;
        }
        self.pending_fails
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1))
            .is_ok()
    }
}

impl TelemetrySink for MemorySink {
    async fn put_record(&self, stream: &str, partition_key: &str, data: &[u8]) -> SinkResult<()> {
        self.attempts.fetch_add(1, Ordering::Relaxed);
        if self.should_fail() {
            return Err(SinkError::Rejected("scripted failure".into()));
        }
        self.records.lock().unwrap_or_else(PoisonError::into_inner).push(SentRecord {
            stream:        stream.to_owned(),
            partition_key: partition_key.to_owned(),
            data:          data.to_vec(),
        });
        Ok(())
    }
}
