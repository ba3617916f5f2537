//! `DeviceAgent` — the timer-driven driver around a [`Device`].

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use ft_behavior::{DeviceModel, ResourceModel};
use ft_core::DeviceId;
use ft_telemetry::{EmitOutcome, TelemetryEmitter, TelemetrySink};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::{Device, SimResult};

/// Shortest accepted wall-clock interval between ticks.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// What one agent did before it stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub device_id: DeviceId,
    pub ticks:     u64,
    pub delivered: u64,
    pub dropped:   u64,
    /// `true` if the run ended on the cancellation token rather than the
    /// tick budget.
    pub cancelled: bool,
}

impl RunSummary {
    fn new(device_id: DeviceId) -> Self {
        Self { device_id, ticks: 0, delivered: 0, dropped: 0, cancelled: false }
    }

    fn record(&mut self, outcome: EmitOutcome) {
        self.ticks += 1;
        match outcome {
            EmitOutcome::Delivered { .. } => self.delivered += 1,
            EmitOutcome::Dropped { .. }   => self.dropped += 1,
        }
    }
}

/// Runs one device: tick, emit, wait, repeat.
///
/// A tick's emission, retries included, finishes before the next tick is
/// scheduled.  Missed ticks are delayed rather than bursted.
pub struct DeviceAgent<S, M: ResourceModel = DeviceModel> {
    device:   Device<M>,
    emitter:  TelemetryEmitter<S>,
    interval: Duration,
}

impl<S: TelemetrySink, M: ResourceModel> DeviceAgent<S, M> {
    pub fn new(device: Device<M>, emitter: TelemetryEmitter<S>, interval: Duration) -> Self {
        Self { device, emitter, interval: interval.max(MIN_INTERVAL) }
    }

    pub fn device(&self) -> &Device<M> {
        &self.device
    }

    pub fn emitter(&self) -> &TelemetryEmitter<S> {
        &self.emitter
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// One step plus its emission, stamped with the current wall clock.
    pub async fn tick(&mut self) -> SimResult<EmitOutcome> {
        let payload = self.device.step(unix_now());
        debug!(
            device   = %payload.device_id,
            tick     = %self.device.tick,
            status   = %payload.status,
            location = %payload.location,
            resource = payload.resource_level(),
            "tick"
        );
        Ok(self.emitter.emit(&payload).await?)
    }

    /// Tick every `interval` until `cancel` fires or `max_ticks` ticks ran.
    ///
    /// The first tick fires immediately.  Cancellation is observed between
    /// ticks; an in-flight emission is never interrupted.
    pub async fn run(&mut self, cancel: CancellationToken, max_ticks: Option<u64>) -> SimResult<RunSummary> {
        let mut summary = RunSummary::new(self.device.id().clone());
        info!(
            device   = %summary.device_id,
            kind     = %self.device.state.kind,
            speed    = self.device.state.speed_kmh,
            offline  = self.device.state.offline,
            interval = ?self.interval,
            "agent started"
        );

        let mut timer = tokio::time::interval(self.interval);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            if max_ticks.is_some_and(|max| summary.ticks >= max) {
                break;
            }
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    summary.cancelled = true;
                    break;
                }
                _ = timer.tick() => {}
            }
            let outcome = self.tick().await?;
            summary.record(outcome);
        }

        info!(
            device    = %summary.device_id,
            ticks     = summary.ticks,
            delivered = summary.delivered,
            dropped   = summary.dropped,
            distance  = self.device.state.distance_km,
            cancelled = summary.cancelled,
            "agent stopped"
        );
        Ok(summary)
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
