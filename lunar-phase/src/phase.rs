//! Synodic cycle: lunar age, phase fraction, illumination, and the eight
//! named phase buckets.

use crate::constants::{NEW_MOON_EPOCH_JD, SYNODIC_MONTH_DAYS, TWOPI};
use lunar_time::JulianDate;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The eight conventional phase names.
///
/// Each name covers an equal 1/8 span of the synodic cycle, centered on the
/// corresponding syzygy or quadrature; the New Moon bucket wraps across the
/// 0/1 boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PhaseName {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl PhaseName {
    /// Buckets a phase fraction into its named phase.
    ///
    /// The input is normalized into [0, 1) first, so any real value is
    /// accepted.
    pub fn from_fraction(fraction: f64) -> Self {
        let f = fraction.rem_euclid(1.0);
        if !(1.0 / 16.0..15.0 / 16.0).contains(&f) {
            PhaseName::NewMoon
        } else if f < 3.0 / 16.0 {
            PhaseName::WaxingCrescent
        } else if f < 5.0 / 16.0 {
            PhaseName::FirstQuarter
        } else if f < 7.0 / 16.0 {
            PhaseName::WaxingGibbous
        } else if f < 9.0 / 16.0 {
            PhaseName::FullMoon
        } else if f < 11.0 / 16.0 {
            PhaseName::WaningGibbous
        } else if f < 13.0 / 16.0 {
            PhaseName::LastQuarter
        } else {
            PhaseName::WaningCrescent
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseName::NewMoon => "New Moon",
            PhaseName::WaxingCrescent => "Waxing Crescent",
            PhaseName::FirstQuarter => "First Quarter",
            PhaseName::WaxingGibbous => "Waxing Gibbous",
            PhaseName::FullMoon => "Full Moon",
            PhaseName::WaningGibbous => "Waning Gibbous",
            PhaseName::LastQuarter => "Last Quarter",
            PhaseName::WaningCrescent => "Waning Crescent",
        }
    }

    /// Unicode glyph for the phase, as seen from the northern hemisphere.
    pub fn symbol(&self) -> char {
        match self {
            PhaseName::NewMoon => '\u{1F311}',
            PhaseName::WaxingCrescent => '\u{1F312}',
            PhaseName::FirstQuarter => '\u{1F313}',
            PhaseName::WaxingGibbous => '\u{1F314}',
            PhaseName::FullMoon => '\u{1F315}',
            PhaseName::WaningGibbous => '\u{1F316}',
            PhaseName::LastQuarter => '\u{1F317}',
            PhaseName::WaningCrescent => '\u{1F318}',
        }
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Days elapsed since the preceding new moon, in [0, synodic month).
///
/// Dates before the reference epoch wrap into the same range; the age is
/// never negative.
pub fn synodic_age_days(jd: &JulianDate) -> f64 {
    let d = jd.to_f64() - NEW_MOON_EPOCH_JD;
    let mut age = d.rem_euclid(SYNODIC_MONTH_DAYS);
    // rem_euclid can land exactly on the modulus for tiny negative inputs
    if age >= SYNODIC_MONTH_DAYS {
        age -= SYNODIC_MONTH_DAYS;
    }
    age
}

/// Fraction of the visible disc that is lit, as a percentage.
///
/// A cosine interpolation between 0 at new moon and 100 at full moon, not a
/// spherical-geometry illumination model.
pub fn illumination_percent(phase_fraction: f64) -> f64 {
    (1.0 - libm::cos(phase_fraction * TWOPI)) / 2.0 * 100.0
}
