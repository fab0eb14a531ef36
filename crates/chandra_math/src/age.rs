//! Lunar age: days since a reference new moon, modulo the mean synodic month.
//!
//! A calendar date is evaluated at 12:00 UTC. The fixed evaluation hour
//! keeps every derived value a pure function of the date.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::lunar_day::{DAYS_PER_PHASE, LunarDate};
use crate::phase::Phase;

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.53059;

/// Reference new moon, 2000-01-06T18:14:00Z, as Unix milliseconds.
pub const REFERENCE_NEW_MOON_MS: i64 = 947_182_440_000;

/// Hour of day (UTC) at which a calendar date is evaluated.
pub const EVALUATION_HOUR_UTC: i64 = 12;

const MS_PER_DAY: f64 = 86_400_000.0;
const MS_PER_HOUR: i64 = 3_600_000;

/// Lunar age in days at a UTC instant, in [0, 29.53059).
pub fn lunar_age_at(instant: DateTime<Utc>) -> f64 {
    age_from_unix_ms(instant.timestamp_millis())
}

/// Lunar age in days for a calendar date, evaluated at 12:00 UTC.
pub fn lunar_age(date: NaiveDate) -> f64 {
    let midnight_ms = date.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
    age_from_unix_ms(midnight_ms + EVALUATION_HOUR_UTC * MS_PER_HOUR)
}

fn age_from_unix_ms(ms: i64) -> f64 {
    let diff_days = (ms - REFERENCE_NEW_MOON_MS) as f64 / MS_PER_DAY;
    ((diff_days % SYNODIC_MONTH_DAYS) + SYNODIC_MONTH_DAYS) % SYNODIC_MONTH_DAYS
}

/// Split a lunar age into phase and 1-based lunar day.
///
/// Ages below half a synodic month are waxing; the rest are waning. Each
/// half maps linearly onto days 1..=15, clamped at 15 for the boundary.
pub fn lunar_day_from_age(age: f64) -> LunarDate {
    let half = SYNODIC_MONTH_DAYS / 2.0;
    let (phase, into_half) = if age < half {
        (Phase::Waxing, age)
    } else {
        (Phase::Waning, age - half)
    };
    let steps = f64::from(DAYS_PER_PHASE);
    let raw = ((into_half / half) * steps).floor().max(0.0) as u8;
    LunarDate {
        phase,
        day: (raw + 1).min(DAYS_PER_PHASE),
    }
}

/// Phase and lunar day for a calendar date.
pub fn lunar_day_for_date(date: NaiveDate) -> LunarDate {
    lunar_day_from_age(lunar_age(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reference_instant_is_age_zero() {
        let reference = DateTime::from_timestamp_millis(REFERENCE_NEW_MOON_MS).unwrap();
        assert!(lunar_age_at(reference).abs() < 1e-12);
    }

    #[test]
    fn reference_constant_matches_calendar() {
        let reference = ymd(2000, 1, 6).and_hms_opt(18, 14, 0).unwrap().and_utc();
        assert_eq!(reference.timestamp_millis(), REFERENCE_NEW_MOON_MS);
    }

    #[test]
    fn age_before_reference_is_non_negative() {
        let age = lunar_age(ymd(1999, 12, 31));
        assert!((0.0..SYNODIC_MONTH_DAYS).contains(&age), "age {age}");
    }

    #[test]
    fn age_advances_one_day_per_day() {
        let a = lunar_age(ymd(2024, 1, 12));
        let b = lunar_age(ymd(2024, 1, 13));
        assert!((b - a - 1.0).abs() < 1e-9);
    }

    #[test]
    fn date_age_uses_noon() {
        let noon = ymd(2024, 1, 12).and_hms_opt(12, 0, 0).unwrap().and_utc();
        assert!((lunar_age(ymd(2024, 1, 12)) - lunar_age_at(noon)).abs() < 1e-12);
    }

    #[test]
    fn age_zero_is_waxing_day_1() {
        assert_eq!(
            lunar_day_from_age(0.0),
            LunarDate { phase: Phase::Waxing, day: 1 }
        );
    }

    #[test]
    fn midpoint_is_waning_day_1() {
        let ld = lunar_day_from_age(SYNODIC_MONTH_DAYS / 2.0);
        assert_eq!(ld, LunarDate { phase: Phase::Waning, day: 1 });
    }

    #[test]
    fn just_below_midpoint_is_waxing_15() {
        let ld = lunar_day_from_age(SYNODIC_MONTH_DAYS / 2.0 - 1e-9);
        assert_eq!(ld, LunarDate { phase: Phase::Waxing, day: 15 });
    }

    #[test]
    fn end_of_cycle_clamps_to_waning_15() {
        let ld = lunar_day_from_age(SYNODIC_MONTH_DAYS - 1e-12);
        assert_eq!(ld, LunarDate { phase: Phase::Waning, day: 15 });
    }
}
