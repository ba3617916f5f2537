//! Heading/speed conversion and per-tick position integration.

use ft_core::{Position, VelocityVector};

/// Degrees of latitude/longitude per kilometre near Nairobi (≈1.3° S).
pub const DEGREES_PER_KM_NAIROBI: f64 = 0.009;

/// Seconds per hour; converts km/h into a per-second rate.
const SECS_PER_HOUR: f64 = 3600.0;

/// Result of integrating one tick of motion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step {
    pub position:    Position,
    pub distance_km: f64,
}

/// Local flat-plane kinematics.
///
/// Pure and `Copy`; every device carries its own instance so a fleet can mix
/// reference latitudes without any shared state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KinematicModel {
    /// Conversion from kilometres to degrees of arc.
    pub degrees_per_km: f64,
}

impl Default for KinematicModel {
    fn default() -> Self {
        Self { degrees_per_km: DEGREES_PER_KM_NAIROBI }
    }
}

impl KinematicModel {
    pub fn new(degrees_per_km: f64) -> Self {
        Self { degrees_per_km }
    }

    /// Per-second velocity for travelling at `speed_kmh` along `heading_deg`.
    ///
    /// The vertical component is zero.  A negative speed is accepted and
    /// simply reverses the direction of travel.
    pub fn heading_to_vector(&self, heading_deg: f64, speed_kmh: f64) -> VelocityVector {
        let heading = heading_deg.to_radians();
        let north_km = speed_kmh * heading.cos();
        let east_km  = speed_kmh * heading.sin();

        VelocityVector::new(
            north_km * self.degrees_per_km / SECS_PER_HOUR,
            east_km * self.degrees_per_km / SECS_PER_HOUR,
            0.0,
        )
    }

    /// Advance `position` by one second of `velocity`.
    ///
    /// Each component is rounded to 6 decimals and `speed_kmh / 3600` km is
    /// added to the distance.  Nothing is clamped: a negative altitude or a
    /// negative speed passes straight through.
    pub fn update_position(
        &self,
        position:          Position,
        velocity:          VelocityVector,
        prior_distance_km: f64,
        speed_kmh:         f64,
    ) -> Step {
        let moved = Position::new(
            position.lat + velocity.d_lat,
            position.lon + velocity.d_lon,
            position.alt + velocity.d_alt,
        );
        Step {
            position:    moved.rounded(),
            distance_km: prior_distance_km + speed_kmh / SECS_PER_HOUR,
        }
    }
}
