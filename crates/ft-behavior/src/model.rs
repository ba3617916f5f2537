//! The `ResourceModel` trait — the per-kind extension point.

use ft_agent::DeviceState;
use ft_core::{DeviceKind, DeviceRng, Tick};

use crate::Motion;

/// A device kind's resource state machine.
///
/// Models hold only their tuning constants; every piece of per-device state
/// lives in [`DeviceState`] and randomness comes from the device's own
/// [`DeviceRng`], so one model value can drive any number of devices on any
/// number of threads.
///
/// # Example
///
/// ```rust,ignore
/// struct Parked;
///
/// impl ResourceModel for Parked {
///     fn kind(&self) -> DeviceKind { DeviceKind::Car }
///     fn initial_speed_kmh(&self, _rng: &mut DeviceRng) -> f64 { 0.0 }
///     fn step(&self, _state: &mut DeviceState, _tick: Tick, _rng: &mut DeviceRng) -> Motion {
///         Motion::Hold
///     }
/// }
/// ```
pub trait ResourceModel: Send + Sync + 'static {
    /// The device kind this model drives.
    fn kind(&self) -> DeviceKind;

    /// Cruise speed for a newly created device (may be a random draw).
    fn initial_speed_kmh(&self, rng: &mut DeviceRng) -> f64;

    /// Advance `state` by exactly one tick: transition, adjust the resource,
    /// and return the motion to integrate.
    fn step(&self, state: &mut DeviceState, tick: Tick, rng: &mut DeviceRng) -> Motion;
}
