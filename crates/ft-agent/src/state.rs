//! `DeviceState` — everything one device remembers between ticks.

use ft_core::{DeviceId, DeviceKind, Mode, Position};

/// Lower bound of every resource level.
pub const RESOURCE_EMPTY: f64 = 0.0;
/// Upper bound of every resource level, and the level a new device starts at.
pub const RESOURCE_FULL: f64 = 100.0;

/// The mutable state of one simulated device.
///
/// Fields are `pub` so state machines and tests can set up arbitrary
/// situations directly; the resource level should still go through
/// [`set_resource`](Self::set_resource) / [`adjust_resource`](Self::adjust_resource)
/// so it stays inside `[0, 100]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceState {
    /// Public id, e.g. `drone-7`.  Also the ingestion partition key.
    pub id: DeviceId,

    /// Which resource state machine drives this device.
    pub kind: DeviceKind,

    /// Current position, always rounded to 6 decimals.
    pub position: Position,

    /// Direction of travel in compass degrees (0 = north, clockwise).
    pub heading_deg: f64,

    /// Cruise speed in km/h, fixed for the device's lifetime.
    pub speed_kmh: f64,

    /// Cumulative horizontal distance travelled, in km.  Never decreases.
    pub distance_km: f64,

    /// Fuel or battery percentage in `[0, 100]`.
    pub resource: f64,

    /// Current behavioral mode.
    pub mode: Mode,

    /// `true` when payloads go to a local sink instead of the network.
    pub offline: bool,
}

impl DeviceState {
    /// Replace the resource level, clamped to `[0, 100]`.
    #[inline]
    pub fn set_resource(&mut self, level: f64) {
        self.resource = level.clamp(RESOURCE_EMPTY, RESOURCE_FULL);
    }

    /// Add `delta` (may be negative) to the resource level, clamped to `[0, 100]`.
    #[inline]
    pub fn adjust_resource(&mut self, delta: f64) {
        self.set_resource(self.resource + delta);
    }

    /// `true` while the altitude is at or below ground level.
    #[inline]
    pub fn on_ground(&self) -> bool {
        self.position.alt <= 0.0
    }
}
