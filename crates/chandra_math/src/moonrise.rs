//! Moonrise estimate and its projection onto the 12-hour dial.
//!
//! Waxing day 1 rises at 06:00 and waning day 1 at 18:00. Each later day
//! rises `(12 * 60) / 14` minutes later, so day 15 of one phase lands on
//! the opening time of the other.

use std::fmt::{Display, Formatter};

use crate::phase::Phase;
use crate::util::normalize_360;

const MINUTES_PER_DAY: f64 = 1440.0;
const WAXING_DAY1_MINUTES: f64 = 6.0 * 60.0;
const WANING_DAY1_MINUTES: f64 = 18.0 * 60.0;
const STEP_MINUTES: f64 = (12.0 * 60.0) / 14.0;

/// Dial degrees per hour on a 12-hour face.
const DEG_PER_HOUR: f64 = 30.0;
/// Rotation of the rendered dial relative to the phase reference hour.
const DIAL_OFFSET_DEG: f64 = 210.0;

/// Hour labels printed clockwise from 12 o'clock, waxing face.
const WAXING_DIAL_HOURS: [u8; 12] = [12, 13, 14, 15, 16, 17, 18, 7, 8, 9, 10, 11];
/// Hour labels printed clockwise from 12 o'clock, waning face.
const WANING_DIAL_HOURS: [u8; 12] = [24, 1, 2, 3, 4, 5, 6, 19, 20, 21, 22, 23];

/// Estimated moonrise, local clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoonriseTime {
    /// Hour, 0-23.
    pub hours: u8,
    /// Minute, 0-59.
    pub minutes: u8,
}

impl MoonriseTime {
    /// Minutes past midnight.
    pub fn total_minutes(self) -> u16 {
        u16::from(self.hours) * 60 + u16::from(self.minutes)
    }

    /// Angle of this time on the dial for the given phase.
    pub fn clock_angle(self, phase: Phase) -> f64 {
        clock_angle(self.hours, self.minutes, phase)
    }
}

impl Display for MoonriseTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Moonrise for a phase and lunar day by linear interpolation.
///
/// The interpolated instant is wrapped into one day and rounded to the
/// nearest whole minute before being split, so minutes stay in 0..=59.
pub fn moonrise_time(phase: Phase, day: u8) -> MoonriseTime {
    let base = match phase {
        Phase::Waxing => WAXING_DAY1_MINUTES,
        Phase::Waning => WANING_DAY1_MINUTES,
    };
    let raw = base + (f64::from(day) - 1.0) * STEP_MINUTES;
    let wrapped = ((raw % MINUTES_PER_DAY) + MINUTES_PER_DAY) % MINUTES_PER_DAY;
    let total = (wrapped.round() as u32) % 1440;
    MoonriseTime {
        hours: (total / 60) as u8,
        minutes: (total % 60) as u8,
    }
}

/// Dial angle in [0, 360) for a clock time.
///
/// The face's reference hour is 7 when waxing and 19 when waning; waning
/// times before 19:00 belong to the following night and are shifted by 24h.
pub fn clock_angle(hours: u8, minutes: u8, phase: Phase) -> f64 {
    let mut h = f64::from(hours) + f64::from(minutes) / 60.0;
    let start = match phase {
        Phase::Waxing => 7.0,
        Phase::Waning => {
            if h < 19.0 {
                h += 24.0;
            }
            19.0
        }
    };
    normalize_360((h - start) * DEG_PER_HOUR + DIAL_OFFSET_DEG)
}

/// Printed hour numbers around the dial for a phase, clockwise from the top.
pub fn dial_hour_labels(phase: Phase) -> [u8; 12] {
    match phase {
        Phase::Waxing => WAXING_DIAL_HOURS,
        Phase::Waning => WANING_DIAL_HOURS,
    }
}
