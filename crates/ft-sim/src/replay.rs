//! `Replay` — fast-forward devices with no timer and no network.

use ft_behavior::{DeviceModel, ResourceModel};
use ft_core::{SimClock, Tick};
use ft_telemetry::{CsvSink, Payload, SinkError};
use tracing::info;

use crate::{Device, Fleet, FleetConfig, SimResult};

// ── Observer ──────────────────────────────────────────────────────────────────

/// Callbacks invoked by [`Replay::run`].  All methods default to no-ops.
pub trait ReplayObserver {
    /// Called after every device has stepped, with one payload per device
    /// in fleet order.
    fn on_tick_end(&mut self, _tick: Tick, _payloads: &[Payload]) {}

    /// Called once after the final tick.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

pub struct NoopObserver;

impl ReplayObserver for NoopObserver {}

/// Writes every replayed payload to a [`CsvSink`].
///
/// Observer methods cannot fail, so the first write error is kept and can
/// be retrieved with [`take_error`](Self::take_error) after the run.
pub struct CsvRecorder {
    sink:       CsvSink,
    last_error: Option<SinkError>,
}

impl CsvRecorder {
    pub fn new(sink: CsvSink) -> Self {
        Self { sink, last_error: None }
    }

    pub fn take_error(&mut self) -> Option<SinkError> {
        self.last_error.take()
    }
}

impl ReplayObserver for CsvRecorder {
    fn on_tick_end(&mut self, _tick: Tick, payloads: &[Payload]) {
        if let Err(e) = self.sink.record_all(payloads) {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

// ── Replay ────────────────────────────────────────────────────────────────────

/// A set of devices advanced in lock-step on a simulated clock.
///
/// Payload timestamps come from the clock, one simulated second per tick.
pub struct Replay<M: ResourceModel = DeviceModel> {
    devices: Vec<Device<M>>,
    clock:   SimClock,
}

impl Replay {
    /// The same devices [`Fleet::launch`] would create for `config` and
    /// `seed`, starting at `start_unix_secs`.
    pub fn from_config(config: &FleetConfig, seed: u64, start_unix_secs: i64) -> SimResult<Self> {
        Ok(Self::new(Fleet::plan(config, seed)?, SimClock::simulated(start_unix_secs)))
    }
}

impl<M: ResourceModel> Replay<M> {
    pub fn new(devices: Vec<Device<M>>, clock: SimClock) -> Self {
        Self { devices, clock }
    }

    pub fn devices(&self) -> &[Device<M>] {
        &self.devices
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Advance every device `ticks` times.
    pub fn run<O: ReplayObserver>(&mut self, ticks: u64, observer: &mut O) {
        info!(devices = self.devices.len(), ticks, start = %self.clock, "replay started");
        for _ in 0..ticks {
            let now = self.clock.current_tick;
            let payloads = self.step_all(self.clock.current_unix_secs());
            observer.on_tick_end(now, &payloads);
            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
        info!(end = %self.clock, "replay finished");
    }

    fn step_all(&mut self, now_unix: i64) -> Vec<Payload> {
        #[cfg(not(feature = "parallel"))]
        {
            self.devices.iter_mut().map(|d| d.step(now_unix)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.devices.par_iter_mut().map(|d| d.step(now_unix)).collect()
        }
    }
}
