//! Motion requests — what a state machine wants the kinematic stage to do.

use ft_core::VelocityVector;

/// The movement a device performs during the current tick.
///
/// Produced by [`ResourceModel::step`][crate::ResourceModel::step] and
/// consumed by the device loop in ft-sim, which turns it into a velocity and
/// feeds it to the kinematic model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Travel along the device's current heading at `speed_kmh`, changing
    /// altitude by `climb_m` metres.  Distance accrues at `speed_kmh`.
    Cruise { speed_kmh: f64, climb_m: f64 },

    /// Apply this exact per-second velocity.  No horizontal distance accrues.
    Override(VelocityVector),

    /// Stay put: zero velocity, distance unchanged.
    Hold,
}

impl Motion {
    /// Horizontal cruise at `speed_kmh` with no altitude change.
    #[inline]
    pub fn cruise(speed_kmh: f64) -> Self {
        Motion::Cruise { speed_kmh, climb_m: 0.0 }
    }

    /// Speed used for distance accounting.
    #[inline]
    pub fn effective_speed_kmh(&self) -> f64 {
        match *self {
            Motion::Cruise { speed_kmh, .. } => speed_kmh,
            Motion::Override(_) | Motion::Hold => 0.0,
        }
    }
}
