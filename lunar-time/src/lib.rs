//! Calendar and Julian Date handling for the lunar phase almanac.
//!
//! This crate provides the time plumbing the phase model is built on: a
//! split-precision [`JulianDate`], Gregorian calendar conversion in both
//! directions, strict ISO 8601 parsing, and a [`UTC`] epoch type that the
//! almanac crates accept as input.
//!
//! The phase model treats every day as exactly 86 400 seconds. Leap seconds
//! and historical calendar irregularities are deliberately not modeled; the
//! sub-second error this introduces is far below the accuracy of the
//! fixed-period lunar approximation built on top.

pub mod constants;
pub mod errors;
pub mod julian;
pub mod parsing;
pub mod utc;

pub use errors::{TimeError, TimeResult};
pub use julian::JulianDate;
pub use parsing::{parse_iso8601, ParsedDateTime};
pub use utc::UTC;
