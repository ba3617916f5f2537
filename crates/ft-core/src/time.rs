//! Simulation time model.
//!
//! # Design
//!
//! Each device advances in discrete ticks.  One tick always integrates
//! **one simulated second** of motion (distance grows by `speed_kmh / 3600`
//! per tick).  How often a tick fires in real time is a separate knob owned
//! by the agent driver; replay runs fire ticks back to back.
//!
//! `SimClock` maps ticks onto payload timestamps for runs that are not tied
//! to the wall clock:
//!
//!   unix_secs = start_unix_secs + tick * tick_duration_secs

use std::fmt;

/// Seconds of simulated motion integrated per tick.
pub const SIMULATED_SECS_PER_TICK: u32 = 1;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute per-device tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts tick counts into Unix timestamps for replayed runs.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Unix timestamp (seconds since epoch) of tick 0.
    pub start_unix_secs: i64,
    /// Timestamp seconds between consecutive ticks.
    pub tick_duration_secs: u32,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(start_unix_secs: i64, tick_duration_secs: u32) -> Self {
        Self {
            start_unix_secs,
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// A clock whose timestamps advance by one simulated second per tick.
    pub fn simulated(start_unix_secs: i64) -> Self {
        Self::new(start_unix_secs, SIMULATED_SECS_PER_TICK)
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.next();
    }

    #[inline]
    pub fn elapsed_secs(&self) -> i64 {
        self.current_tick.0 as i64 * self.tick_duration_secs as i64
    }

    /// Unix timestamp corresponding to `current_tick`.
    #[inline]
    pub fn current_unix_secs(&self) -> i64 {
        self.start_unix_secs + self.elapsed_secs()
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{}s)", self.current_tick, self.elapsed_secs())
    }
}
