//! The phase record and the calculator that produces it.

use crate::constants::{
    MICROMOON_MIN_DISTANCE_KM, SUPERMOON_MAX_DISTANCE_KM, SYNODIC_MONTH_DAYS,
};
use crate::distance::lunar_distance_km;
use crate::names::full_moon_name;
use crate::phase::{illumination_percent, synodic_age_days, PhaseName};
use crate::zodiac::{moon_zodiac_sign, ZodiacSign};
use lunar_time::UTC;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Everything the model knows about the Moon at one instant.
///
/// A plain value, recomputed on every query; the calculator holds no state
/// and callers may cache records externally keyed by date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MoonPhaseRecord {
    /// Position within the synodic cycle, in [0, 1). 0 is new moon, 0.5 is
    /// full moon.
    pub phase_fraction: f64,
    /// Days since the preceding new moon, in [0, synodic month).
    pub age_days: f64,
    /// Lit fraction of the visible disc, 0-100.
    pub illumination_percent: f64,
    pub phase_name: PhaseName,
    /// Approximate Earth-Moon distance in kilometers.
    pub distance_km: f64,
    pub zodiac_sign: ZodiacSign,
    /// Traditional name, present only on a full moon.
    pub special_name: Option<&'static str>,
}

impl MoonPhaseRecord {
    /// A full moon near perigee (closer than 360 000 km).
    pub fn is_supermoon(&self) -> bool {
        self.phase_name == PhaseName::FullMoon && self.distance_km < SUPERMOON_MAX_DISTANCE_KM
    }

    /// A full moon near apogee (farther than 400 000 km).
    pub fn is_micromoon(&self) -> bool {
        self.phase_name == PhaseName::FullMoon && self.distance_km > MICROMOON_MIN_DISTANCE_KM
    }

    pub fn is_waxing(&self) -> bool {
        self.phase_fraction < 0.5
    }

    pub fn is_waning(&self) -> bool {
        !self.is_waxing()
    }

    /// Days until the next full moon under the fixed-period model.
    pub fn days_until_full(&self) -> f64 {
        (SYNODIC_MONTH_DAYS / 2.0 - self.age_days).rem_euclid(SYNODIC_MONTH_DAYS)
    }

    /// Days until the next new moon under the fixed-period model.
    pub fn days_until_new(&self) -> f64 {
        (SYNODIC_MONTH_DAYS - self.age_days).rem_euclid(SYNODIC_MONTH_DAYS)
    }
}

/// Computes the phase record for the given instant.
///
/// Total over all representable epochs: any date, past or future, produces a
/// structurally valid record. Far outside the reference era the fixed-period
/// approximation drifts from the real sky; that is a documented modeling
/// limit, not an error condition.
pub fn compute_moon_phase(epoch: &UTC) -> MoonPhaseRecord {
    let jd = epoch.to_julian_date();

    let age_days = synodic_age_days(&jd);
    let phase_fraction = age_days / SYNODIC_MONTH_DAYS;
    let phase_name = PhaseName::from_fraction(phase_fraction);

    // The month lookup needs a calendar date; outside the supported calendar
    // range the record simply carries no special name.
    let special_name = match (phase_name, jd.to_calendar()) {
        (PhaseName::FullMoon, Ok((_, month, _, _))) => full_moon_name(month),
        _ => None,
    };

    MoonPhaseRecord {
        phase_fraction,
        age_days,
        illumination_percent: illumination_percent(phase_fraction),
        phase_name,
        distance_km: lunar_distance_km(&jd),
        zodiac_sign: moon_zodiac_sign(&jd),
        special_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{APOGEE_KM, NEW_MOON_EPOCH_JD, PERIGEE_KM};
    use lunar_time::JulianDate;

    fn record_at(jd: f64) -> MoonPhaseRecord {
        compute_moon_phase(&UTC::from_julian_date(JulianDate::from_f64(jd)))
    }

    #[test]
    fn test_epoch_is_new_moon() {
        let record = record_at(NEW_MOON_EPOCH_JD);
        assert_eq!(record.phase_name, PhaseName::NewMoon);
        assert_eq!(record.age_days, 0.0);
        assert!(record.illumination_percent < 1e-9);
        assert_eq!(record.special_name, None);
    }

    #[test]
    fn test_epoch_from_calendar_is_new_moon() {
        let epoch = UTC::from_calendar(2024, 1, 11, 11, 57, 0.0);
        let record = compute_moon_phase(&epoch);
        assert_eq!(record.phase_name, PhaseName::NewMoon);
        assert!(record.age_days < 1e-6 || record.age_days > SYNODIC_MONTH_DAYS - 1e-6);
    }

    #[test]
    fn test_half_synodic_is_full_moon() {
        let record = record_at(NEW_MOON_EPOCH_JD + SYNODIC_MONTH_DAYS / 2.0);
        assert_eq!(record.phase_name, PhaseName::FullMoon);
        assert!((record.illumination_percent - 100.0).abs() < 1e-9);
        // January full moon
        assert_eq!(record.special_name, Some("Wolf Moon"));
    }

    #[test]
    fn test_phase_fraction_invariant() {
        for offset in [0.0, 3.7, 14.765, 22.1, 29.0, -100.0, 1234.5] {
            let record = record_at(NEW_MOON_EPOCH_JD + offset);
            assert!(
                (record.phase_fraction - record.age_days / SYNODIC_MONTH_DAYS).abs() < 1e-12,
                "invariant broken at offset {}",
                offset
            );
            assert!((0.0..1.0).contains(&record.phase_fraction));
        }
    }

    #[test]
    fn test_distance_always_in_bounds() {
        for offset in -400..400 {
            let record = record_at(NEW_MOON_EPOCH_JD + offset as f64 * 1.37);
            assert!(
                (PERIGEE_KM..=APOGEE_KM).contains(&record.distance_km),
                "distance {} at offset {}",
                record.distance_km,
                offset
            );
        }
    }

    #[test]
    fn test_special_name_only_on_full_moon() {
        for offset in 0..60 {
            let record = record_at(NEW_MOON_EPOCH_JD + offset as f64 * 0.5);
            if record.special_name.is_some() {
                assert_eq!(
                    record.phase_name,
                    PhaseName::FullMoon,
                    "special name {:?} on non-full phase",
                    record.special_name
                );
            }
        }
    }

    #[test]
    fn test_supermoon_micromoon_predicates() {
        let supermoon = MoonPhaseRecord {
            phase_fraction: 0.5,
            age_days: SYNODIC_MONTH_DAYS / 2.0,
            illumination_percent: 100.0,
            phase_name: PhaseName::FullMoon,
            distance_km: 357_000.0,
            zodiac_sign: ZodiacSign::Cancer,
            special_name: Some("Wolf Moon"),
        };
        assert!(supermoon.is_supermoon());
        assert!(!supermoon.is_micromoon());

        let micromoon = MoonPhaseRecord {
            distance_km: 405_000.0,
            ..supermoon
        };
        assert!(micromoon.is_micromoon());
        assert!(!micromoon.is_supermoon());

        // Distance alone is not enough: a close non-full moon is not super
        let crescent = MoonPhaseRecord {
            phase_fraction: 0.1,
            phase_name: PhaseName::WaxingCrescent,
            ..supermoon
        };
        assert!(!crescent.is_supermoon());
        assert!(!crescent.is_micromoon());
    }

    #[test]
    fn test_waxing_waning() {
        let waxing = record_at(NEW_MOON_EPOCH_JD + 5.0);
        assert!(waxing.is_waxing());
        assert!(!waxing.is_waning());

        let waning = record_at(NEW_MOON_EPOCH_JD + 20.0);
        assert!(waning.is_waning());
        assert!(!waning.is_waxing());
    }

    #[test]
    fn test_days_until_events() {
        let record = record_at(NEW_MOON_EPOCH_JD + 10.0);
        assert!((record.days_until_full() - (SYNODIC_MONTH_DAYS / 2.0 - 10.0)).abs() < 1e-9);
        assert!((record.days_until_new() - (SYNODIC_MONTH_DAYS - 10.0)).abs() < 1e-9);

        // Just past full, the next full is almost a whole cycle away
        let past_full = record_at(NEW_MOON_EPOCH_JD + SYNODIC_MONTH_DAYS / 2.0 + 1.0);
        assert!(past_full.days_until_full() > SYNODIC_MONTH_DAYS - 2.0);
    }

    #[test]
    fn test_far_past_and_future_are_valid() {
        // Centuries out: astronomically uncertain but structurally valid
        for jd in [NEW_MOON_EPOCH_JD - 73_050.0, NEW_MOON_EPOCH_JD + 73_050.0] {
            let record = record_at(jd);
            assert!((0.0..SYNODIC_MONTH_DAYS).contains(&record.age_days));
            assert!((0.0..=100.0).contains(&record.illumination_percent));
            assert!((PERIGEE_KM..=APOGEE_KM).contains(&record.distance_km));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_record_serializes() {
        let record = record_at(NEW_MOON_EPOCH_JD + SYNODIC_MONTH_DAYS / 2.0);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"phase_name\":\"FullMoon\""));
        assert!(json.contains("Wolf Moon"));
    }
}
