//! Deterministic lunar phase, distance, and zodiac calculator.
//!
//! Maps a calendar instant to a [`MoonPhaseRecord`]: synodic age and phase
//! fraction, illumination percentage, one of eight phase names, an
//! Earth-Moon distance estimate, the Moon's zodiac sign, and the
//! traditional name of a full moon. Everything is a closed-form function of
//! elapsed days since a reference new moon; there is no state, no I/O, and
//! no failure mode.
//!
//! # Model
//!
//! Three fixed-period cycles are layered onto the same elapsed-days value:
//!
//! | Cycle | Period | Drives |
//! |-------|--------|--------|
//! | Synodic | 29.53058867 d | age, fraction, illumination, phase name |
//! | Anomalistic | 27.55 d | perigee/apogee distance oscillation |
//! | Sidereal | 27.321661 d | zodiac sign |
//!
//! Illumination and distance are cosine interpolations, not ephemeris
//! calculations. The model is accurate to the day near the reference era
//! and drifts over multi-year horizons; callers wanting arcsecond truth
//! need a real ephemeris, not this crate.
//!
//! # Usage
//!
//! ```
//! use lunar_phase::{compute_moon_phase, PhaseName, UTC};
//!
//! let epoch = UTC::from_calendar(2024, 1, 11, 11, 57, 0.0);
//! let record = compute_moon_phase(&epoch);
//! assert_eq!(record.phase_name, PhaseName::NewMoon);
//! assert!(record.illumination_percent < 0.001);
//! ```

pub mod constants;
pub mod distance;
pub mod names;
pub mod phase;
pub mod record;
pub mod zodiac;

pub use distance::{anomalistic_fraction, lunar_distance_km};
pub use names::full_moon_name;
pub use phase::{illumination_percent, synodic_age_days, PhaseName};
pub use record::{compute_moon_phase, MoonPhaseRecord};
pub use zodiac::{moon_zodiac_sign, ZodiacSign};

pub use lunar_time::{JulianDate, UTC};
