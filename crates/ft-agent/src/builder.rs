//! Fluent builder for a fresh `DeviceState`.
//!
//! # Usage
//!
//! ```rust
//! use ft_agent::DeviceStateBuilder;
//! use ft_core::{DeviceKind, Mode, Position};
//!
//! let state = DeviceStateBuilder::new("drone-7", DeviceKind::Drone, Position::new(-1.29, 36.82, 0.0))
//!     .heading(90.0)
//!     .speed_kmh(40.0)
//!     .build();
//!
//! assert_eq!(state.mode, Mode::Flying);
//! assert_eq!(state.resource, 100.0);
//! assert_eq!(state.distance_km, 0.0);
//! ```

use ft_core::{DeviceId, DeviceKind, Position};

use crate::{DeviceState, RESOURCE_FULL};

/// Fluent builder for [`DeviceState`].
///
/// Lifecycle defaults are fixed: full resource, zero distance, the kind's
/// starting mode.  Only the launch parameters are configurable.
pub struct DeviceStateBuilder {
    id:          DeviceId,
    kind:        DeviceKind,
    position:    Position,
    heading_deg: f64,
    speed_kmh:   f64,
    offline:     bool,
}

impl DeviceStateBuilder {
    pub fn new(id: impl Into<DeviceId>, kind: DeviceKind, position: Position) -> Self {
        Self {
            id: id.into(),
            kind,
            position,
            heading_deg: 0.0,
            speed_kmh:   0.0,
            offline:     false,
        }
    }

    pub fn heading(mut self, heading_deg: f64) -> Self {
        self.heading_deg = heading_deg;
        self
    }

    pub fn speed_kmh(mut self, speed_kmh: f64) -> Self {
        self.speed_kmh = speed_kmh;
        self
    }

    /// Route payloads to a local sink instead of the network.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn build(self) -> DeviceState {
        DeviceState {
            id:          self.id,
            kind:        self.kind,
            position:    self.position.rounded(),
            heading_deg: self.heading_deg,
            speed_kmh:   self.speed_kmh,
            distance_km: 0.0,
            resource:    RESOURCE_FULL,
            mode:        self.kind.initial_mode(),
            offline:     self.offline,
        }
    }
}
