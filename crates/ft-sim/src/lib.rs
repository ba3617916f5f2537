//! `ft-sim` — drives devices through time.
//!
//! # Per-tick pipeline
//!
//! ```text
//! Idle ─▶ ResourceModel::step ─▶ KinematicModel ─▶ Payload ─▶ TelemetryEmitter ─▶ Idle
//! ```
//!
//! [`Device::step`] is the pure part (state machine, kinematics, payload).
//! [`DeviceAgent`] wraps it in a wall-clock timer and an emitter.  [`Fleet`]
//! runs one agent per tokio task under a shared cancellation token, and
//! [`Replay`] fast-forwards the same devices without sleeping or network I/O.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | Replay steps devices on Rayon's thread pool.        |

pub mod agent;
pub mod config;
pub mod device;
pub mod error;
pub mod fleet;
pub mod replay;


pub use agent::{DeviceAgent, RunSummary};
pub use config::{Area, Composition, FleetConfig, MAX_DEVICES};
pub use device::Device;
pub use error::{SimError, SimResult};
pub use fleet::{AgentFailure, Fleet, FleetReport};
pub use replay::{CsvRecorder, NoopObserver, Replay, ReplayObserver};
