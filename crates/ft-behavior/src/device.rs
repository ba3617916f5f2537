//! `DeviceModel` — runtime selection between the three state machines.

use ft_agent::DeviceState;
use ft_core::{DeviceKind, DeviceRng, Tick};

use crate::{CarModel, DroneModel, Motion, PhoneModel, ResourceModel};

/// A tagged union of the built-in models.
///
/// Lets one concrete agent type serve a mixed fleet without boxing.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceModel {
    Car(CarModel),
    Drone(DroneModel),
    Phone(PhoneModel),
}

impl DeviceModel {
    /// The default-tuned model for `kind`.
    pub fn for_kind(kind: DeviceKind) -> Self {
        match kind {
            DeviceKind::Car   => DeviceModel::Car(CarModel::default()),
            DeviceKind::Drone => DeviceModel::Drone(DroneModel::default()),
            DeviceKind::Phone => DeviceModel::Phone(PhoneModel::default()),
        }
    }

    fn inner(&self) -> &dyn ResourceModel {
        match self {
            DeviceModel::Car(m)   => m,
            DeviceModel::Drone(m) => m,
            DeviceModel::Phone(m) => m,
        }
    }
}

impl From<DeviceKind> for DeviceModel {
    fn from(kind: DeviceKind) -> Self {
        Self::for_kind(kind)
    }
}

impl ResourceModel for DeviceModel {
    fn kind(&self) -> DeviceKind {
        self.inner().kind()
    }

    fn initial_speed_kmh(&self, rng: &mut DeviceRng) -> f64 {
        self.inner().initial_speed_kmh(rng)
    }

    fn step(&self, state: &mut DeviceState, tick: Tick, rng: &mut DeviceRng) -> Motion {
        self.inner().step(state, tick, rng)
    }
}
