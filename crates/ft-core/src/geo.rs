//! Geographic position and per-second velocity types.
//!
//! Unlike a routing framework, telemetry payloads are compared to 6 decimal
//! places by downstream consumers, so everything here is `f64`.  `Position`
//! is always three components: callers holding a 2D fix pad the altitude with
//! `0.0` through [`Position::from_coords`].

use std::fmt;

/// Decimal places kept on every position component after an update.
pub const POSITION_DECIMALS: i32 = 6;

/// Round `value` to `decimals` places (half away from zero).
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

// ── Position ──────────────────────────────────────────────────────────────────

/// A `(latitude, longitude, altitude)` triple.
///
/// Latitude and longitude are degrees; altitude is metres above the launch
/// surface.  With the `serde` feature the type serializes as a bare
/// `[lat, lon, alt]` array, matching the telemetry payload.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 3]", into = "[f64; 3]"))]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
}

impl Position {
    #[inline]
    pub fn new(lat: f64, lon: f64, alt: f64) -> Self {
        Self { lat, lon, alt }
    }

    /// Build a position from 2 or 3 coordinates.
    ///
    /// A 2-element slice is padded with altitude `0.0`.  Any other length
    /// returns `None`.
    pub fn from_coords(coords: &[f64]) -> Option<Self> {
        match *coords {
            [lat, lon]      => Some(Self::new(lat, lon, 0.0)),
            [lat, lon, alt] => Some(Self::new(lat, lon, alt)),
            _               => None,
        }
    }

    /// Every component rounded to [`POSITION_DECIMALS`] places.
    #[inline]
    pub fn rounded(self) -> Self {
        Self {
            lat: round_to(self.lat, POSITION_DECIMALS),
            lon: round_to(self.lon, POSITION_DECIMALS),
            alt: round_to(self.alt, POSITION_DECIMALS),
        }
    }

    #[inline]
    pub fn as_array(self) -> [f64; 3] {
        [self.lat, self.lon, self.alt]
    }
}

impl From<[f64; 3]> for Position {
    fn from([lat, lon, alt]: [f64; 3]) -> Self {
        Self { lat, lon, alt }
    }
}

impl From<Position> for [f64; 3] {
    fn from(p: Position) -> Self {
        p.as_array()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6})", self.lat, self.lon, self.alt)
    }
}

// ── VelocityVector ────────────────────────────────────────────────────────────

/// A per-second rate of change `(Δlat°, Δlon°, Δalt m)`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VelocityVector {
    pub d_lat: f64,
    pub d_lon: f64,
    pub d_alt: f64,
}

impl VelocityVector {
    pub const ZERO: VelocityVector = VelocityVector { d_lat: 0.0, d_lon: 0.0, d_alt: 0.0 };

    #[inline]
    pub fn new(d_lat: f64, d_lon: f64, d_alt: f64) -> Self {
        Self { d_lat, d_lon, d_alt }
    }

    /// Same horizontal components with the vertical rate replaced.
    #[inline]
    pub fn with_climb(self, d_alt: f64) -> Self {
        Self { d_alt, ..self }
    }
}
