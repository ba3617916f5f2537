//! `Device<M>` — one device's state plus everything needed to advance it.

use ft_agent::{DeviceState, DeviceStateBuilder};
use ft_behavior::{DeviceModel, Motion, ResourceModel};
use ft_core::{DeviceId, DeviceRng, Position, Tick};
use ft_mobility::KinematicModel;
use ft_telemetry::Payload;

/// A simulated device, steppable without any I/O.
///
/// Owns its state and its RNG exclusively, so any number of devices can be
/// stepped concurrently.
pub struct Device<M: ResourceModel = DeviceModel> {
    pub state:      DeviceState,
    pub model:      M,
    pub rng:        DeviceRng,
    pub kinematics: KinematicModel,
    /// Ticks completed so far.
    pub tick:       Tick,
}

impl<M: ResourceModel> Device<M> {
    /// A fresh device: full resource, zero distance, the kind's starting
    /// mode, and a cruise speed drawn from `model`.
    pub fn create(
        id:          impl Into<DeviceId>,
        position:    Position,
        heading_deg: f64,
        model:       M,
        mut rng:     DeviceRng,
    ) -> Self {
        let speed = model.initial_speed_kmh(&mut rng);
        let state = DeviceStateBuilder::new(id, model.kind(), position)
            .heading(heading_deg)
            .speed_kmh(speed)
            .build();
        Self::from_state(state, model, rng)
    }

    /// Wrap an existing state (e.g. one set up by a test).
    pub fn from_state(state: DeviceState, model: M, rng: DeviceRng) -> Self {
        Self {
            state,
            model,
            rng,
            kinematics: KinematicModel::default(),
            tick:       Tick::ZERO,
        }
    }

    pub fn with_kinematics(mut self, kinematics: KinematicModel) -> Self {
        self.kinematics = kinematics;
        self
    }

    pub fn offline(mut self, offline: bool) -> Self {
        self.state.offline = offline;
        self
    }

    #[inline]
    pub fn id(&self) -> &DeviceId {
        &self.state.id
    }

    /// Run one tick and return the payload describing the result.
    ///
    /// Resource model first (mode and level), then kinematics on the motion
    /// it chose, then the snapshot stamped with `now_unix`.
    pub fn step(&mut self, now_unix: i64) -> Payload {
        let motion = self.model.step(&mut self.state, self.tick, &mut self.rng);
        self.apply(motion);
        self.tick = self.tick.next();
        Payload::snapshot(&self.state, now_unix)
    }

    fn apply(&mut self, motion: Motion) {
        let velocity = match motion {
            Motion::Cruise { speed_kmh, climb_m } => self
                .kinematics
                .heading_to_vector(self.state.heading_deg, speed_kmh)
                .with_climb(climb_m),
            Motion::Override(v) => v,
            Motion::Hold        => return,
        };
        let step = self.kinematics.update_position(
            self.state.position,
            velocity,
            self.state.distance_km,
            motion.effective_speed_kmh(),
        );
        self.state.position    = step.position;
        self.state.distance_km = step.distance_km;
    }
}
