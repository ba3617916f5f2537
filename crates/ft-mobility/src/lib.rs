//! `ft-mobility` — the kinematic model behind every device.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`kinematics`] | `KinematicModel` — heading → velocity, position integration |
//!
//! # Movement model (local flat plane)
//!
//! Headings are compass degrees (0 = north, clockwise).  A speed in km/h is
//! split into north/east components with `cos`/`sin`, converted to degrees
//! with a single degrees-per-km factor, and divided by 3600 to give a
//! per-second rate.  The factor is only accurate near one reference latitude
//! (the default is tuned for Nairobi); it is a named, swappable field rather
//! than geodesic math.

pub mod kinematics;


pub use kinematics::{DEGREES_PER_KM_NAIROBI, KinematicModel, Step};
