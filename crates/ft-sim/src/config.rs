//! Fleet configuration.

use std::path::Path;
use std::time::Duration;

use ft_core::geo::POSITION_DECIMALS;
use ft_core::{DeviceKind, Position, SimRng, round_to};
use ft_telemetry::RetryPolicy;
use serde::{Deserialize, Serialize};

use crate::{SimError, SimResult};

/// Everything needed to launch a fleet.  Every field has a default, so a
/// config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    /// Ingestion stream every agent writes to.
    pub stream_name: String,

    /// Base URL of the ingestion service.
    pub endpoint: String,

    /// Wall-clock seconds between ticks.  One tick is one simulated second
    /// of motion regardless of this value.
    pub interval_secs: u64,

    /// Master seed.  `None` draws one from OS entropy (and logs it).
    pub seed: Option<u64>,

    /// Stop each agent after this many ticks.  `None` runs until cancelled.
    pub max_ticks: Option<u64>,

    /// Route payloads to a local sink instead of the network.
    pub offline: bool,

    pub retry: RetryPolicy,

    /// Per-request HTTP timeout.
    pub request_timeout_secs: u64,

    pub composition: Composition,

    pub area: Area,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            stream_name:          "nairobi-stream".into(),
            endpoint:             "http://localhost:4566".into(),
            interval_secs:        60,
            seed:                 None,
            max_ticks:            None,
            offline:              false,
            retry:                RetryPolicy::default(),
            request_timeout_secs: 10,
            composition:          Composition::default(),
            area:                 Area::default(),
        }
    }
}

impl FleetConfig {
    /// Load from a JSON file; missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.stream_name.is_empty() {
            return Err(SimError::Config("stream_name must not be empty".into()));
        }
        self.composition.validate()?;
        self.area.validate()
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    #[inline]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// ── Composition ───────────────────────────────────────────────────────────────

/// Largest accepted fleet.  Each kind draws ids from 9,000,000 seven-digit
/// suffixes, so id generation always terminates.
pub const MAX_DEVICES: usize = 1_000_000;

/// Fleet size and kind mix.  Drones take whatever the phone and car shares
/// leave over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Composition {
    pub devices:     usize,
    pub phone_share: f64,
    pub car_share:   f64,
}

impl Default for Composition {
    fn default() -> Self {
        Self { devices: 30, phone_share: 0.55, car_share: 0.35 }
    }
}

impl Composition {
    pub fn with_devices(self, devices: usize) -> Self {
        Self { devices, ..self }
    }

    /// `(phones, cars, drones)`, each share floored, drones the remainder.
    pub fn counts(&self) -> (usize, usize, usize) {
        let n = self.devices as f64;
        let phones = ((n * self.phone_share).floor() as usize).min(self.devices);
        let cars = ((n * self.car_share).floor() as usize).min(self.devices - phones);
        (phones, cars, self.devices - phones - cars)
    }

    /// One kind per fleet slot: phones, then cars, then drones.
    pub fn kinds(&self) -> Vec<DeviceKind> {
        let (phones, cars, drones) = self.counts();
        std::iter::repeat_n(DeviceKind::Phone, phones)
            .chain(std::iter::repeat_n(DeviceKind::Car, cars))
            .chain(std::iter::repeat_n(DeviceKind::Drone, drones))
            .collect()
    }

    fn validate(&self) -> SimResult<()> {
        if self.devices > MAX_DEVICES {
            return Err(SimError::Config(format!(
                "fleet of {} devices exceeds the maximum of {MAX_DEVICES}",
                self.devices
            )));
        }
        let share_ok = |s: f64| (0.0..=1.0).contains(&s);
        if !share_ok(self.phone_share) || !share_ok(self.car_share) || self.phone_share + self.car_share > 1.0 {
            return Err(SimError::Config(format!(
                "composition shares must be in [0, 1] and sum to at most 1 (phones {}, cars {})",
                self.phone_share, self.car_share
            )));
        }
        Ok(())
    }
}

// ── Area ──────────────────────────────────────────────────────────────────────

/// Lat/lon bounding box for random start positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Area {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl Default for Area {
    /// Central Nairobi.
    fn default() -> Self {
        Self {
            lat_min: -1.307963,
            lat_max: -1.282735,
            lon_min: 36.808427,
            lon_max: 36.844133,
        }
    }
}

impl Area {
    pub fn contains(&self, p: Position) -> bool {
        (self.lat_min..=self.lat_max).contains(&p.lat) && (self.lon_min..=self.lon_max).contains(&p.lon)
    }

    /// Uniform ground-level point inside the box, rounded to 6 decimals.
    pub fn random_position(&self, rng: &mut SimRng) -> Position {
        let lat = rng.gen_range(self.lat_min..=self.lat_max);
        let lon = rng.gen_range(self.lon_min..=self.lon_max);
        // Rounding can step past an edge; pull back inside.
        Position::new(
            round_to(lat, POSITION_DECIMALS).clamp(self.lat_min, self.lat_max),
            round_to(lon, POSITION_DECIMALS).clamp(self.lon_min, self.lon_max),
            0.0,
        )
    }

    fn validate(&self) -> SimResult<()> {
        if self.lat_min > self.lat_max || self.lon_min > self.lon_max {
            return Err(SimError::Config(format!("empty area {self:?}")));
        }
        Ok(())
    }
}
