//! Fixed parameters of the phase model.
//!
//! The reference epochs and period lengths below fully determine the model's
//! output. They are deliberately simple mean values; see the crate docs for
//! the accuracy caveats.

/// Mean synodic month (new moon to new moon) in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.53058867;

/// Mean anomalistic month (perigee to perigee) in days.
pub const ANOMALISTIC_MONTH_DAYS: f64 = 27.55;

/// Mean sidereal month (return to the same zodiac position) in days.
pub const SIDEREAL_MONTH_DAYS: f64 = 27.321661;

/// Reference new moon: 2024-01-11 11:57:00 UTC as a Julian Date.
///
/// Synodic age is measured from this instant; the anomalistic and sidereal
/// cycles reuse the same elapsed-days value.
pub const NEW_MOON_EPOCH_JD: f64 = 2_460_320.997_916_666_7;

/// Zodiac reference epoch, coincident with the reference new moon.
pub const ZODIAC_EPOCH_JD: f64 = NEW_MOON_EPOCH_JD;

/// At the zodiac reference epoch the Moon stood in Capricorn, index 9 in
/// the Aries-first sign list.
pub const ZODIAC_EPOCH_SIGN_OFFSET: i64 = 9;

/// Perigee bound of the distance oscillation in kilometers.
pub const PERIGEE_KM: f64 = 356_500.0;

/// Apogee bound of the distance oscillation in kilometers.
pub const APOGEE_KM: f64 = 406_700.0;

/// A full moon closer than this is reported as a supermoon.
pub const SUPERMOON_MAX_DISTANCE_KM: f64 = 360_000.0;

/// A full moon farther than this is reported as a micromoon.
pub const MICROMOON_MIN_DISTANCE_KM: f64 = 400_000.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;
