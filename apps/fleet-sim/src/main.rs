//! fleet-sim — run simulated telemetry devices.
//!
//! ```text
//! fleet-sim device car 1234567 "[-1.2921, 36.8219]" 90 --test
//! fleet-sim fleet --devices 30 --ticks 100
//! fleet-sim replay --devices 30 --ticks 3600 --out replay.csv --seed 42
//! ```
//!
//! Logging goes through `tracing`; set `RUST_LOG=debug` to see every tick.

mod sinks;


use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use ft_agent::{parse_heading, parse_location};
use ft_behavior::DeviceModel;
use ft_core::{DeviceId, DeviceKind, DeviceRng, SimRng};
use ft_sim::{CsvRecorder, Device, DeviceAgent, Fleet, FleetConfig, Replay};
use ft_telemetry::{CsvSink, TelemetryEmitter};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sinks::build_sink;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "fleet-sim", version, about = "Simulated fleet telemetry devices")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one device until Ctrl-C or the tick budget.
    Device(DeviceArgs),
    /// Launch a mixed fleet, one task per device.
    Fleet(FleetArgs),
    /// Fast-forward a fleet with no network and write every payload to CSV.
    Replay(ReplayArgs),
}

#[derive(Args)]
struct DeviceArgs {
    /// car, drone or phone.
    kind: DeviceKind,
    /// Numeric id; the device is named `<kind>-<id>`.
    id: String,
    /// JSON array `[lat, lon]` or `[lat, lon, alt]`.
    #[arg(allow_hyphen_values = true)]
    location: String,
    /// Initial heading in degrees (0 = north).
    #[arg(allow_hyphen_values = true)]
    heading: String,
    #[command(flatten)]
    common: CommonArgs,
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct FleetArgs {
    /// Fleet size (overrides the config file).
    #[arg(long)]
    devices: Option<usize>,
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args)]
struct CommonArgs {
    /// Offline: do not contact the ingestion endpoint.
    #[arg(long)]
    test: bool,
    /// Offline only: append payloads to this CSV file instead of logging them.
    #[arg(long)]
    record: Option<PathBuf>,
    /// Stop after this many ticks.
    #[arg(long)]
    ticks: Option<u64>,
    /// JSON fleet configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct ReplayArgs {
    #[arg(long, default_value_t = 30)]
    devices: usize,
    #[arg(long)]
    ticks: u64,
    #[arg(long)]
    out: PathBuf,
    #[arg(long)]
    seed: Option<u64>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Command::Device(args) => run_device(args).await,
        Command::Fleet(args)  => run_fleet(args).await,
        Command::Replay(args) => run_replay(args),
    }
}

fn load_config(common: &CommonArgs) -> Result<FleetConfig> {
    let mut config = match &common.config {
        Some(path) => FleetConfig::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => FleetConfig::default(),
    };
    config.offline |= common.test;
    if common.ticks.is_some() {
        config.max_ticks = common.ticks;
    }
    Ok(config)
}

/// Cancel `token` on the first Ctrl-C.
fn cancel_on_ctrl_c(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl-C received, stopping after the current tick");
            token.cancel();
        }
    });
}

// ── Subcommands ───────────────────────────────────────────────────────────────

async fn run_device(args: DeviceArgs) -> Result<()> {
    let mut config = load_config(&args.common)?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    let position = parse_location(&args.location)?;
    let heading = parse_heading(&args.heading)?;

    let rng = match config.seed {
        Some(seed) => DeviceRng::new(seed, 0),
        None       => DeviceRng::from_entropy(),
    };
    let id = DeviceId::for_kind(args.kind, &args.id);
    let device = Device::create(id, position, heading, DeviceModel::for_kind(args.kind), rng)
        .offline(config.offline);

    let sink = build_sink(&config, args.common.record.as_deref())?;
    let emitter = TelemetryEmitter::new(sink, config.stream_name.clone()).with_policy(config.retry);
    let mut agent = DeviceAgent::new(device, emitter, config.interval());

    let token = CancellationToken::new();
    cancel_on_ctrl_c(token.clone());
    let summary = agent.run(token, config.max_ticks).await?;
    if summary.dropped > 0 {
        warn!(dropped = summary.dropped, "some telemetry was not delivered");
    }
    Ok(())
}

async fn run_fleet(args: FleetArgs) -> Result<()> {
    let mut config = load_config(&args.common)?;
    if let Some(n) = args.devices {
        config.composition = config.composition.with_devices(n);
    }

    let sink = build_sink(&config, args.common.record.as_deref())?;
    let fleet = Fleet::launch(&config, sink)?;
    cancel_on_ctrl_c(fleet.cancel_token());

    let report = fleet.join().await;
    info!(
        agents    = report.summaries.len(),
        ticks     = report.total_ticks(),
        delivered = report.stats.delivered,
        dropped   = report.stats.dropped,
        retries   = report.stats.retries,
        "fleet report"
    );
    if !report.failures.is_empty() {
        bail!("{} agent(s) failed", report.failures.len());
    }
    Ok(())
}

fn run_replay(args: ReplayArgs) -> Result<()> {
    let mut config = FleetConfig::default();
    config.composition = config.composition.with_devices(args.devices);
    let seed = args.seed.unwrap_or_else(|| SimRng::from_entropy().random());

    let mut recorder = CsvRecorder::new(open_csv(&args.out)?);
    let mut replay = Replay::from_config(&config, seed, unix_now())?;

    let t0 = Instant::now();
    replay.run(args.ticks, &mut recorder);
    if let Some(e) = recorder.take_error() {
        bail!("writing {}: {e}", args.out.display());
    }
    info!(
        seed,
        devices = args.devices,
        ticks   = args.ticks,
        elapsed = ?t0.elapsed(),
        out     = %args.out.display(),
        "replay written"
    );
    Ok(())
}

fn open_csv(path: &Path) -> Result<CsvSink> {
    CsvSink::create(path).with_context(|| format!("creating {}", path.display()))
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
