//! `Fleet` — one tokio task per device under a shared cancellation token.

use std::collections::HashSet;
use std::sync::Arc;

use ft_behavior::DeviceModel;
use ft_core::{DeviceId, DeviceRng, SimRng};
use ft_telemetry::{EmitStats, EmitStatsSnapshot, TelemetryEmitter, TelemetrySink};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::{Device, DeviceAgent, FleetConfig, RunSummary, SimResult};

/// Numeric device-id suffixes are drawn from this range (7 digits).
const ID_RANGE: std::ops::RangeInclusive<u32> = 1_000_000..=9_999_999;

/// An agent task that ended with an error or a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentFailure {
    /// `None` when the task panicked before reporting its id.
    pub device_id: Option<DeviceId>,
    pub reason:    String,
}

/// Result of [`Fleet::join`].
#[derive(Debug, Clone, Default)]
pub struct FleetReport {
    pub summaries: Vec<RunSummary>,
    pub failures:  Vec<AgentFailure>,
    pub stats:     EmitStatsSnapshot,
}

impl FleetReport {
    pub fn total_ticks(&self) -> u64 {
        self.summaries.iter().map(|s| s.ticks).sum()
    }
}

/// A running fleet.
///
/// Dropping a `Fleet` aborts its tasks; call [`cancel`](Self::cancel) then
/// [`join`](Self::join) for a clean stop.
pub struct Fleet {
    tasks:  JoinSet<(DeviceId, SimResult<RunSummary>)>,
    cancel: CancellationToken,
    stats:  Arc<EmitStats>,
    seed:   u64,
}

impl Fleet {
    /// The devices a fleet launched with `config` and `seed` would run.
    ///
    /// Slot `i` gets `DeviceRng::new(seed, i)`; ids, start positions and
    /// headings come from one fleet-level RNG seeded with `seed`.
    pub fn plan(config: &FleetConfig, seed: u64) -> SimResult<Vec<Device>> {
        config.validate()?;
        let mut rng = SimRng::new(seed);
        let mut taken = HashSet::new();

        let devices = config
            .composition
            .kinds()
            .into_iter()
            .enumerate()
            .map(|(slot, kind)| {
                let id = loop {
                    let id = DeviceId::for_kind(kind, rng.gen_range(ID_RANGE));
                    if taken.insert(id.clone()) {
                        break id;
                    }
                };
                let position = config.area.random_position(&mut rng);
                let heading = rng.cardinal_heading();
                Device::create(id, position, heading, DeviceModel::for_kind(kind), DeviceRng::new(seed, slot as u64))
                    .offline(config.offline)
            })
            .collect();
        Ok(devices)
    }

    /// Plan the fleet and spawn one agent per device onto the current tokio
    /// runtime.  All agents share `sink` and one [`EmitStats`].
    pub fn launch<S: TelemetrySink>(config: &FleetConfig, sink: S) -> SimResult<Self> {
        let seed = config.seed.unwrap_or_else(|| SimRng::from_entropy().random());
        let devices = Self::plan(config, seed)?;
        let (phones, cars, drones) = config.composition.counts();
        info!(seed, phones, cars, drones, stream = %config.stream_name, offline = config.offline, "launching fleet");
        Ok(Self::spawn(devices, config, sink, seed))
    }

    /// Spawn agents for an explicit device list.
    pub fn spawn<S: TelemetrySink>(devices: Vec<Device>, config: &FleetConfig, sink: S, seed: u64) -> Self {
        let sink = Arc::new(sink);
        let stats = Arc::new(EmitStats::new());
        let cancel = CancellationToken::new();
        let mut tasks = JoinSet::new();

        for device in devices {
            let emitter = TelemetryEmitter::new(Arc::clone(&sink), config.stream_name.clone())
                .with_policy(config.retry)
                .with_stats(Arc::clone(&stats));
            let mut agent = DeviceAgent::new(device, emitter, config.interval());
            let token = cancel.child_token();
            let max_ticks = config.max_ticks;
            tasks.spawn(async move {
                let id = agent.device().id().clone();
                let result = agent.run(token, max_ticks).await;
                (id, result)
            });
        }

        Self { tasks, cancel, stats, seed }
    }

    /// Number of agent tasks still tracked.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The seed the fleet was planned with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn stats(&self) -> EmitStatsSnapshot {
        self.stats.snapshot()
    }

    /// A clone of the fleet-wide token, e.g. for a Ctrl-C handler.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Ask every agent to stop after its current tick.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for every agent to finish.
    pub async fn join(mut self) -> FleetReport {
        let mut report = FleetReport::default();

        while let Some(joined) = self.tasks.join_next().await {
            match joined {
                Ok((_, Ok(summary))) => report.summaries.push(summary),
                Ok((id, Err(e))) => {
                    error!(device = %id, error = %e, "agent failed");
                    report.failures.push(AgentFailure { device_id: Some(id), reason: e.to_string() });
                }
                Err(e) => {
                    error!(error = %e, "agent task aborted");
                    report.failures.push(AgentFailure { device_id: None, reason: e.to_string() });
                }
            }
        }

        report.summaries.sort_by(|a, b| a.device_id.as_str().cmp(b.device_id.as_str()));
        report.stats = self.stats.snapshot();
        info!(
            agents    = report.summaries.len(),
            failures  = report.failures.len(),
            delivered = report.stats.delivered,
            dropped   = report.stats.dropped,
            "fleet stopped"
        );
        report
    }
}
