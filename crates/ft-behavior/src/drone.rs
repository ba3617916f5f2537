//! Drone: battery-limited flight with a forced descent and ground recharge.

use ft_agent::DeviceState;
use ft_core::{DeviceKind, DeviceRng, Mode, Tick, VelocityVector};
use tracing::debug;

use crate::{Motion, ResourceModel};

/// Battery-driven aerial vehicle.
///
/// | From         | Condition (start of tick)      | To           |
/// |--------------|--------------------------------|--------------|
/// | `Flying`     | battery ≤ `low_battery`        | `Descending` |
/// | `Descending` | altitude ≤ 0                   | `Landed`     |
/// | `Landed`     | battery ≥ `resume_battery`     | `Flying`     |
#[derive(Debug, Clone, PartialEq)]
pub struct DroneModel {
    /// Battery drained per tick in flight; doubled while descending.
    pub drain_per_tick: f64,
    /// Battery regained per tick on the ground.
    pub charge_per_tick: f64,
    /// Flight is abandoned at or below this level.
    pub low_battery: f64,
    /// A landed drone takes off again at or above this level.
    pub resume_battery: f64,
    /// Metres lost per tick during the forced descent.
    pub descent_rate_m: f64,
    /// Bound of the random altitude wobble per tick in normal flight, metres.
    pub altitude_jitter_m: f64,
    /// Chance per flying tick of turning to a random cardinal heading.
    pub turn_probability: f64,
    /// Inclusive bounds of the cruise speed drawn at creation, km/h.
    pub min_speed_kmh: u32,
    pub max_speed_kmh: u32,
}

impl Default for DroneModel {
    fn default() -> Self {
        Self {
            drain_per_tick:    0.5,
            charge_per_tick:   1.2,
            low_battery:       20.0,
            resume_battery:    95.0,
            descent_rate_m:    0.3,
            altitude_jitter_m: 0.1,
            turn_probability:  0.2,
            min_speed_kmh:     20,
            max_speed_kmh:     60,
        }
    }
}

impl DroneModel {
    fn transition(&self, state: &DeviceState) -> Mode {
        match state.mode {
            Mode::Flying if state.resource <= self.low_battery       => Mode::Descending,
            Mode::Descending if state.on_ground()                    => Mode::Landed,
            Mode::Landed if state.resource >= self.resume_battery    => Mode::Flying,
            Mode::Flying | Mode::Descending | Mode::Landed           => state.mode,
            // A state built for another kind starts over in the air.
            _                                                        => Mode::Flying,
        }
    }
}

impl ResourceModel for DroneModel {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Drone
    }

    fn initial_speed_kmh(&self, rng: &mut DeviceRng) -> f64 {
        rng.gen_range(self.min_speed_kmh..=self.max_speed_kmh) as f64
    }

    fn step(&self, state: &mut DeviceState, tick: Tick, rng: &mut DeviceRng) -> Motion {
        let next = self.transition(state);
        if next != state.mode {
            debug!(device = %state.id, %tick, from = %state.mode, to = %next, battery = state.resource, "drone mode change");
            state.mode = next;
        }

        match state.mode {
            Mode::Landed => {
                state.position.alt = 0.0;
                state.adjust_resource(self.charge_per_tick);
                Motion::Hold
            }
            Mode::Descending => {
                state.adjust_resource(-2.0 * self.drain_per_tick);
                // Never sink past the ground: the landing check fires next tick.
                let drop = self.descent_rate_m.min(state.position.alt.max(0.0));
                Motion::Override(VelocityVector::new(0.0, 0.0, -drop))
            }
            _ => {
                state.adjust_resource(-self.drain_per_tick);
                if rng.gen_bool(self.turn_probability) {
                    state.heading_deg = rng.cardinal_heading();
                }
                let jitter = self.altitude_jitter_m;
                let climb = rng
                    .gen_range(-jitter..=jitter)
                    .max(-state.position.alt.max(0.0));
                Motion::Cruise { speed_kmh: state.speed_kmh, climb_m: climb }
            }
        }
    }
}
