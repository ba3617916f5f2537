//! Device kind and behavioral mode enums shared across all crates.

use std::str::FromStr;

use crate::FtError;

/// The class of simulated device.  Selects the resource state machine and
/// the resource key used in the payload.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeviceKind {
    /// Fuel-driven road vehicle.
    Car,
    /// Battery-driven aerial vehicle with a forced-landing cycle.
    Drone,
    /// Battery-driven handset carried at walking pace.
    Phone,
}

impl DeviceKind {
    pub const ALL: [DeviceKind; 3] = [DeviceKind::Car, DeviceKind::Drone, DeviceKind::Phone];

    /// Lower-case label, also used as the device id prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceKind::Car   => "car",
            DeviceKind::Drone => "drone",
            DeviceKind::Phone => "phone",
        }
    }

    /// JSON key carrying the resource level in this kind's payload.
    pub fn resource_key(self) -> &'static str {
        match self {
            DeviceKind::Car                      => "gas",
            DeviceKind::Drone | DeviceKind::Phone => "battery",
        }
    }

    /// Mode a freshly created device of this kind starts in.
    pub fn initial_mode(self) -> Mode {
        match self {
            DeviceKind::Car   => Mode::Driving,
            DeviceKind::Drone => Mode::Flying,
            DeviceKind::Phone => Mode::Moving,
        }
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceKind {
    type Err = FtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car"   => Ok(DeviceKind::Car),
            "drone" => Ok(DeviceKind::Drone),
            "phone" => Ok(DeviceKind::Phone),
            _       => Err(FtError::UnknownKind(s.to_owned())),
        }
    }
}

// ── Mode ──────────────────────────────────────────────────────────────────────

/// Behavioral mode of a device.  Reported verbatim as the payload `status`.
///
/// Each kind only ever visits its own subset:
/// cars `Driving`; drones `Flying`/`Descending`/`Landed`;
/// phones `Moving`/`Charging`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    Driving,
    Flying,
    Descending,
    Landed,
    Moving,
    Charging,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Driving    => "driving",
            Mode::Flying     => "flying",
            Mode::Descending => "descending",
            Mode::Landed     => "landed",
            Mode::Moving     => "moving",
            Mode::Charging   => "charging",
        }
    }

    /// The device kind this mode belongs to.
    pub fn kind(self) -> DeviceKind {
        match self {
            Mode::Driving                                => DeviceKind::Car,
            Mode::Flying | Mode::Descending | Mode::Landed => DeviceKind::Drone,
            Mode::Moving | Mode::Charging                => DeviceKind::Phone,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = FtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driving"    => Ok(Mode::Driving),
            "flying"     => Ok(Mode::Flying),
            "descending" => Ok(Mode::Descending),
            "landed"     => Ok(Mode::Landed),
            "moving"     => Ok(Mode::Moving),
            "charging"   => Ok(Mode::Charging),
            _            => Err(FtError::Config(format!("unknown mode {s:?}"))),
        }
    }
}
