//! Car: a single `Driving` mode fed by a fuel tank.

use ft_agent::{DeviceState, RESOURCE_FULL};
use ft_core::{DeviceKind, DeviceRng, Mode, Tick, round_to};
use tracing::debug;

use crate::{Motion, ResourceModel};

/// Fuel-driven road vehicle.
///
/// Each tick the car may snap to a new cardinal heading, then either refills
/// (only when at or below the threshold, and only if the refill draw fires)
/// or burns a fixed amount of fuel.  Refill and burn never happen in the
/// same tick.
#[derive(Debug, Clone, PartialEq)]
pub struct CarModel {
    /// Fuel burned per tick, in percentage points.
    pub fuel_per_tick: f64,
    /// A refill can only happen at or below this level.
    pub refill_threshold: f64,
    /// Chance per eligible tick that the car stops to refill.
    pub refill_probability: f64,
    /// Chance per tick of turning to a random cardinal heading.
    pub turn_probability: f64,
    /// Inclusive bounds of the cruise speed drawn at creation, km/h.
    pub min_speed_kmh: u32,
    pub max_speed_kmh: u32,
}

impl Default for CarModel {
    fn default() -> Self {
        Self {
            fuel_per_tick:      0.2,
            refill_threshold:   30.0,
            refill_probability: 0.1,
            turn_probability:   0.2,
            min_speed_kmh:      30,
            max_speed_kmh:      90,
        }
    }
}

impl ResourceModel for CarModel {
    fn kind(&self) -> DeviceKind {
        DeviceKind::Car
    }

    fn initial_speed_kmh(&self, rng: &mut DeviceRng) -> f64 {
        rng.gen_range(self.min_speed_kmh..=self.max_speed_kmh) as f64
    }

    fn step(&self, state: &mut DeviceState, tick: Tick, rng: &mut DeviceRng) -> Motion {
        state.mode = Mode::Driving;

        if rng.gen_bool(self.turn_probability) {
            state.heading_deg = rng.cardinal_heading();
        }

        if state.resource <= self.refill_threshold && rng.gen_bool(self.refill_probability) {
            debug!(device = %state.id, %tick, fuel = state.resource, "refilling");
            state.set_resource(RESOURCE_FULL);
        } else {
            state.set_resource(round_to(state.resource - self.fuel_per_tick, 1));
        }

        Motion::cruise(state.speed_kmh)
    }
}
