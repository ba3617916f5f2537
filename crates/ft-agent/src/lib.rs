//! `ft-agent` — the mutable state owned by one simulated device.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`state`]     | `DeviceState`, resource bounds                           |
//! | [`builder`]   | `DeviceStateBuilder` (fluent construction)               |
//! | [`startup`]   | `parse_location`, `parse_heading` (startup validation)   |
//!
//! A `DeviceState` is created once per agent, mutated in place once per tick
//! by that agent only, and dropped with it.  Nothing here is shared between
//! devices, so nothing here locks.

pub mod builder;
pub mod startup;
pub mod state;


pub use builder::DeviceStateBuilder;
pub use startup::{parse_heading, parse_location};
pub use state::{DeviceState, RESOURCE_EMPTY, RESOURCE_FULL};
