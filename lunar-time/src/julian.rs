use crate::constants::{J2000_JD, MJD_ZERO_POINT, SECONDS_PER_DAY_F64, SECONDS_TO_DAYS, UNIX_EPOCH_JD};
use crate::{TimeError, TimeResult};
use std::fmt;

/// A Julian Date stored as a two-part sum.
///
/// Keeping the large epoch offset in `jd1` and the smaller date-dependent
/// value in `jd2` preserves sub-second precision across the full range of
/// dates the almanac handles.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn from_f64(jd: f64) -> Self {
        Self::new(jd, 0.0)
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn unix_epoch() -> Self {
        Self::new(UNIX_EPOCH_JD, 0.0)
    }

    pub fn jd1(&self) -> f64 {
        self.jd1
    }

    pub fn jd2(&self) -> f64 {
        self.jd2
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self::new(self.jd1, self.jd2 + days)
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        self.add_days(seconds * SECONDS_TO_DAYS)
    }

    /// Days elapsed from `other` to `self` (signed, fractional).
    pub fn days_since(&self, other: &JulianDate) -> f64 {
        (self.jd1 - other.jd1) + (self.jd2 - other.jd2)
    }

    pub fn from_calendar(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> Self {
        // Gregorian calendar to MJD, same integer formulation as ERFA's
        // eraCal2jd. jd1 carries the date at 0h, jd2 the day fraction.
        let my = (month as i32 - 14) / 12;
        let iypmy = year + my;

        let mjd = ((1461 * (iypmy + 4800)) / 4 + (367 * (month as i32 - 2 - 12 * my)) / 12
            - (3 * ((iypmy + 4900) / 100)) / 4
            + day as i32
            - 2432076) as f64;

        let jd1 = MJD_ZERO_POINT + mjd;
        let jd2 = (60.0 * (60 * hour as i32 + minute as i32) as f64 + second) / SECONDS_PER_DAY_F64;

        Self::new(jd1, jd2)
    }

    /// Converts back to a Gregorian calendar date.
    ///
    /// Returns `(year, month, day, day_fraction)` where `month` is 1-12 and
    /// `day_fraction` is the elapsed fraction of the civil day in [0, 1).
    ///
    /// # Errors
    ///
    /// Returns `TimeError::InvalidDate` for Julian Dates outside the range
    /// the Fliegel-Van Flandern integer algorithm supports.
    pub fn to_calendar(&self) -> TimeResult<(i32, u8, u8, f64)> {
        let dj = self.to_f64();

        const DJMIN: f64 = -68_569.5;
        const DJMAX: f64 = 1e9;
        if !(DJMIN..=DJMAX).contains(&dj) {
            return Err(TimeError::InvalidDate(format!(
                "Julian Date {} outside supported calendar range [{}, {}]",
                dj, DJMIN, DJMAX
            )));
        }

        // Shift so the civil day starts at 0h rather than 12h.
        let shifted = dj + 0.5;
        let day_number = shifted.floor() as i64;
        let fraction = shifted - shifted.floor();

        let mut l = day_number + 68_569;
        let n = (4 * l) / 146_097;
        l -= (146_097 * n + 3) / 4;
        let i = (4000 * (l + 1)) / 1_461_001;
        l -= (1461 * i) / 4 - 31;
        let k = (80 * l) / 2447;
        let day = (l - (2447 * k) / 80) as u8;
        let l_final = k / 11;
        let month = (k + 2 - 12 * l_final) as u8;
        let year = (100 * (n - 49) + i + l_final) as i32;

        Ok((year, month, day, fraction))
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::from_f64(jd)
    }
}
