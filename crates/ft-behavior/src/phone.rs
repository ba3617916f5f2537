//! Phone: walking pace until the battery runs low, then parked on a charger.

use ft_agent::DeviceState;
use ft_core::{DeviceKind, DeviceRng, Mode, Tick};
use tracing::debug;

use crate::{Motion, ResourceModel};

/// Battery-driven handset carried at a fixed walking speed.
///
/// | From       | Condition (start of tick)  | To         |
/// |------------|----------------------------|------------|
/// | `Moving`   | battery ≤ `low_battery`    | `Charging` |
/// | `Charging` | battery ≥ `resume_battery` | `Moving`   |
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneModel {
    pub drain_per_tick: f64,
    /// Slower than a drone's ground charge.
    pub charge_per_tick: f64,
    pub low_battery: f64,
    pub resume_battery: f64,
    /// Chance per moving tick of turning to a random cardinal heading.
    pub turn_probability: f64,
    pub walking_speed_kmh: f64,
}

impl Default for PhoneModel {
    fn default() -> Self {
        Self {
            drain_per_tick:    0.3,
            charge_per_tick:   0.8,
            low_battery:       15.0,
            resume_battery:    95.0,
            turn_probability:  0.2,
            walking_speed_kmh: 5.0,
        }
    }
}

impl ResourceModel for PhoneModel {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Phone
    }

    fn initial_speed_kmh(&self, _rng: &mut DeviceRng) -> f64 {
        self.walking_speed_kmh
    }

    fn step(&self, state: &mut DeviceState, tick: Tick, rng: &mut DeviceRng) -> Motion {
        let next = match state.mode {
            Mode::Moving if state.resource <= self.low_battery      => Mode::Charging,
            Mode::Charging if state.resource >= self.resume_battery => Mode::Moving,
            Mode::Moving | Mode::Charging                           => state.mode,
            _                                                       => Mode::Moving,
        };
        if next != state.mode {
            debug!(device = %state.id, %tick, from = %state.mode, to = %next, battery = state.resource, "phone mode change");
            state.mode = next;
        }

        if state.mode == Mode::Charging {
            state.adjust_resource(self.charge_per_tick);
            return Motion::Hold;
        }

        state.adjust_resource(-self.drain_per_tick);
        if rng.gen_bool(self.turn_probability) {
            state.heading_deg = rng.cardinal_heading();
        }
        Motion::cruise(state.speed_kmh)
    }
}
