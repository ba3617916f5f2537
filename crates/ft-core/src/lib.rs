//! `ft-core` — foundational types for the `fleet_twin` telemetry simulator.
//!
//! This crate is a dependency of every other `ft-*` crate.  It has no `ft-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `DeviceId`                                                |
//! | [`geo`]     | `Position`, `VelocityVector`, fixed-precision rounding    |
//! | [`kind`]    | `DeviceKind`, `Mode`                                      |
//! | [`time`]    | `Tick`, `SimClock`                                        |
//! | [`rng`]     | `DeviceRng` (per-device), `SimRng` (fleet-level)          |
//! | [`error`]   | `FtError`, `FtResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!
//! With `serde`, `Position` serializes as a bare `[lat, lon, alt]` array.

pub mod error;
pub mod geo;
pub mod ids;
pub mod kind;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FtError, FtResult};
pub use geo::{Position, VelocityVector, round_to};
pub use ids::DeviceId;
pub use kind::{DeviceKind, Mode};
pub use rng::{DeviceRng, SimRng};
pub use time::{SimClock, Tick};
