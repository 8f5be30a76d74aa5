//! The UTC epoch type accepted by the phase calculator.
//!
//! A thin wrapper around [`JulianDate`] with calendar, Unix-time, and string
//! construction. Every day is treated as exactly 86 400 seconds; the phase
//! model is a fixed-period approximation and does not track leap seconds.

use crate::constants::{NANOSECONDS_PER_SECOND_F64, SECONDS_PER_DAY, SECONDS_PER_DAY_F64, UNIX_EPOCH_JD};
use crate::julian::JulianDate;
use crate::parsing::parse_iso8601;
use crate::{TimeError, TimeResult};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UTC(JulianDate);

impl UTC {
    /// Creates UTC from a Unix timestamp (seconds and nanoseconds since
    /// 1970-01-01 00:00:00).
    ///
    /// Whole days go into jd1 and the sub-day remainder into jd2 so the
    /// fractional part keeps its full precision.
    pub fn new(seconds: i64, nanos: u32) -> Self {
        let days = seconds.div_euclid(SECONDS_PER_DAY);
        let remainder_seconds = seconds.rem_euclid(SECONDS_PER_DAY);
        let jd1 = UNIX_EPOCH_JD + days as f64;
        let jd2 = (remainder_seconds as f64 + nanos as f64 / NANOSECONDS_PER_SECOND_F64)
            / SECONDS_PER_DAY_F64;
        Self(JulianDate::new(jd1, jd2))
    }

    pub fn from_julian_date(jd: JulianDate) -> Self {
        Self(jd)
    }

    /// Creates UTC from Gregorian calendar components, using a fixed
    /// 86 400-second day.
    pub fn from_calendar(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> Self {
        Self(JulianDate::from_calendar(year, month, day, hour, minute, second))
    }

    pub fn j2000() -> Self {
        Self(JulianDate::j2000())
    }

    /// Current UTC time from the system clock.
    pub fn now() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self::new(duration.as_secs() as i64, duration.subsec_nanos())
    }

    pub fn to_julian_date(&self) -> JulianDate {
        self.0
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self(self.0.add_days(days))
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        Self(self.0.add_seconds(seconds))
    }

    /// Formats as ISO 8601 (YYYY-MM-DDTHH:MM:SS.sss).
    ///
    /// Falls back to "JD{value}" if calendar conversion fails.
    pub fn to_iso8601(&self) -> String {
        if let Ok((year, month, day, frac)) = self.0.to_calendar() {
            let total_seconds = frac * SECONDS_PER_DAY_F64;
            let hour = (total_seconds / 3600.0) as u8;
            let minute = ((total_seconds % 3600.0) / 60.0) as u8;
            let second = total_seconds % 60.0;
            format!(
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}",
                year, month, day, hour, minute, second
            )
        } else {
            format!("JD{:.6}", self.0.to_f64())
        }
    }
}

impl fmt::Display for UTC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UTC {}", self.0)
    }
}

impl From<JulianDate> for UTC {
    fn from(jd: JulianDate) -> Self {
        Self::from_julian_date(jd)
    }
}

impl FromStr for UTC {
    type Err = TimeError;

    fn from_str(s: &str) -> TimeResult<Self> {
        let parsed = parse_iso8601(s)?;
        Ok(Self::from_julian_date(parsed.to_julian_date()))
    }
}
