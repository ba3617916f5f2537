//! `ft-behavior` — resource state machines, one per device kind.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`motion`]  | `Motion` — what the kinematic stage should do this tick      |
//! | [`model`]   | `ResourceModel` trait                                        |
//! | [`car`]     | `CarModel` — fuel, random turns, stochastic refills          |
//! | [`drone`]   | `DroneModel` — `Flying → Descending → Landed → Flying`       |
//! | [`phone`]   | `PhoneModel` — `Moving ⇄ Charging`                           |
//! | [`device`]  | `DeviceModel` — tagged variant selecting one of the above    |
//!
//! # Tick contract
//!
//! Every model follows the same order inside [`ResourceModel::step`]:
//!
//! 1. **Transition** — decide the new mode from the resource level (and, for
//!    drones, the altitude) observed at the start of the tick.
//! 2. **Adjust** — drain or recharge according to the new mode, re-clamping
//!    the level to `[0, 100]`.
//! 3. **Motion** — return a [`Motion`] for the kinematic stage.  Models never
//!    touch the position themselves except to pin a landed drone to the
//!    ground.

pub mod car;
pub mod device;
pub mod drone;
pub mod model;
pub mod motion;
pub mod phone;

#[cfg(test)]
mod tests;

pub use car::CarModel;
pub use device::DeviceModel;
pub use drone::DroneModel;
pub use model::ResourceModel;
pub use motion::Motion;
pub use phone::PhoneModel;
