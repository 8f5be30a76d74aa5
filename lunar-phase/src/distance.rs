//! Earth-Moon distance on the anomalistic cycle.
//!
//! The distance is a cosine oscillation between fixed perigee and apogee
//! bounds, driven by the ~27.55-day anomalistic month. It is a second
//! periodic signal layered onto the same elapsed-days value as the synodic
//! cycle, and deliberately independent of it: perigee does not track any
//! particular phase.

use crate::constants::{
    ANOMALISTIC_MONTH_DAYS, APOGEE_KM, NEW_MOON_EPOCH_JD, PERIGEE_KM, TWOPI,
};
use lunar_time::JulianDate;

/// Position within the anomalistic cycle, in [0, 1). 0 is perigee.
pub fn anomalistic_fraction(jd: &JulianDate) -> f64 {
    let d = jd.to_f64() - NEW_MOON_EPOCH_JD;
    let mut wrapped = d.rem_euclid(ANOMALISTIC_MONTH_DAYS);
    if wrapped >= ANOMALISTIC_MONTH_DAYS {
        wrapped -= ANOMALISTIC_MONTH_DAYS;
    }
    wrapped / ANOMALISTIC_MONTH_DAYS
}

/// Approximate Earth-Moon distance in kilometers.
///
/// Always within `[PERIGEE_KM, APOGEE_KM]`.
pub fn lunar_distance_km(jd: &JulianDate) -> f64 {
    let fraction = anomalistic_fraction(jd);
    PERIGEE_KM + (1.0 - libm::cos(fraction * TWOPI)) / 2.0 * (APOGEE_KM - PERIGEE_KM)
}
