//! Zodiac position on the sidereal cycle.
//!
//! The Moon crosses all twelve signs in one sidereal month (~27.32 days),
//! a little over two days per sign. The sign index is a linear function of
//! elapsed days since a reference epoch with a known sign, floored and
//! wrapped modulo 12.

use crate::constants::{SIDEREAL_MONTH_DAYS, ZODIAC_EPOCH_JD, ZODIAC_EPOCH_SIGN_OFFSET};
use lunar_time::JulianDate;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// All signs in ecliptic order, Aries first.
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The sign the Moon occupies at the given instant.
pub fn moon_zodiac_sign(jd: &JulianDate) -> ZodiacSign {
    let d = jd.to_f64() - ZODIAC_EPOCH_JD;
    let steps = libm::floor(d / SIDEREAL_MONTH_DAYS * 12.0) as i64 + ZODIAC_EPOCH_SIGN_OFFSET;
    ZodiacSign::ALL[steps.rem_euclid(12) as usize]
}
