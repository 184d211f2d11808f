//! Synodic-month moon phase model.
//!
//! The phase is the fractional position inside a mean synodic month counted
//! from a known new moon. The moon sign is a coarse approximation that moves
//! the moon one sign every ~2.46 days of the cycle; it is not an ephemeris
//! lookup and will disagree with real lunar ingresses.

use crate::lunar::types::{MoonPhase, MoonPhaseReading};
use crate::zodiac::Sign;
use chrono::{DateTime, Utc};

/// Mean synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.53058867;

/// Reference new moon, 2000-01-06T18:14:00Z, as Unix milliseconds.
pub const REFERENCE_NEW_MOON_MS: i64 = 947_182_440_000;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Exclusive upper bound (days into cycle) of each phase bucket. Anything at
/// or past the last bound is a waning crescent.
const PHASE_BOUNDS: &[(f64, MoonPhase)] = &[
    (1.85, MoonPhase::NewMoon),
    (7.38, MoonPhase::WaxingCrescent),
    (9.23, MoonPhase::FirstQuarter),
    (14.77, MoonPhase::WaxingGibbous),
    (16.61, MoonPhase::FullMoon),
    (22.15, MoonPhase::WaningGibbous),
    (24.00, MoonPhase::LastQuarter),
];

/// Days elapsed since the most recent modelled new moon, in [0, SYNODIC_MONTH).
pub fn days_into_cycle(instant: DateTime<Utc>) -> f64 {
    let elapsed_days = (instant.timestamp_millis() - REFERENCE_NEW_MOON_MS) as f64 / MS_PER_DAY;
    let cycles = elapsed_days / SYNODIC_MONTH;
    let day = (cycles - cycles.floor()) * SYNODIC_MONTH;
    // fract * month can round up to the month itself
    if day >= SYNODIC_MONTH || day < 0.0 {
        0.0
    } else {
        day
    }
}

pub fn phase_for_day(days_into_cycle: f64) -> MoonPhase {
    PHASE_BOUNDS
        .iter()
        .find(|(upper, _)| days_into_cycle < *upper)
        .map(|(_, phase)| *phase)
        .unwrap_or(MoonPhase::WaningCrescent)
}

pub fn moon_sign_for_day(days_into_cycle: f64) -> Sign {
    let index = ((days_into_cycle / SYNODIC_MONTH) * 12.0).floor() as usize % 12;
    Sign::from_index(index)
}

pub fn moon_phase(instant: DateTime<Utc>) -> MoonPhaseReading {
    let days = days_into_cycle(instant);
    MoonPhaseReading::new(phase_for_day(days), days, moon_sign_for_day(days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_reference_constant_matches_calendar() {
        let reference = Utc.with_ymd_and_hms(2000, 1, 6, 18, 14, 0).unwrap();
        assert_eq!(reference.timestamp_millis(), REFERENCE_NEW_MOON_MS);
    }

    #[test]
    fn test_phase_bounds_are_exclusive() {
        assert_eq!(phase_for_day(0.0), MoonPhase::NewMoon);
        assert_eq!(phase_for_day(1.8499), MoonPhase::NewMoon);
        assert_eq!(phase_for_day(1.85), MoonPhase::WaxingCrescent);
        assert_eq!(phase_for_day(7.38), MoonPhase::FirstQuarter);
        assert_eq!(phase_for_day(9.23), MoonPhase::WaxingGibbous);
        assert_eq!(phase_for_day(14.77), MoonPhase::FullMoon);
        assert_eq!(phase_for_day(16.61), MoonPhase::WaningGibbous);
        assert_eq!(phase_for_day(22.15), MoonPhase::LastQuarter);
        assert_eq!(phase_for_day(24.0), MoonPhase::WaningCrescent);
        assert_eq!(phase_for_day(29.53), MoonPhase::WaningCrescent);
    }

    #[test]
    fn test_moon_sign_steps() {
        assert_eq!(moon_sign_for_day(0.0), Sign::Aries);
        assert_eq!(moon_sign_for_day(SYNODIC_MONTH / 12.0 + 0.01), Sign::Taurus);
        assert_eq!(moon_sign_for_day(SYNODIC_MONTH - 0.01), Sign::Pisces);
    }

    #[test]
    fn test_dates_before_reference_stay_in_range() {
        let instant = Utc.with_ymd_and_hms(1969, 7, 20, 20, 17, 0).unwrap();
        let days = days_into_cycle(instant);
        assert!((0.0..SYNODIC_MONTH).contains(&days));
    }
}
