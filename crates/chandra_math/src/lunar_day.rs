//! Lunar day (1-15 within a phase), illumination, and observance days.

use std::fmt::{Display, Formatter};

use crate::error::MathError;
use crate::phase::Phase;

/// Number of lunar days in each half of the cycle.
pub const DAYS_PER_PHASE: u8 = 15;

/// Lunar days flagged as observance days, in either phase.
pub const OBSERVANCE_DAYS: [u8; 2] = [8, 15];

/// Position within the lunar cycle: a phase and a 1-based day in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    pub phase: Phase,
    /// 1-based day within the phase (1-15).
    pub day: u8,
}

impl LunarDate {
    /// Create a lunar date, rejecting days outside 1..=15.
    pub fn new(phase: Phase, day: u8) -> Result<Self, MathError> {
        if !(1..=DAYS_PER_PHASE).contains(&day) {
            return Err(MathError::LunarDayOutOfRange(day));
        }
        Ok(Self { phase, day })
    }

    /// Illuminated fraction of the disc for this lunar date.
    pub fn illumination(self) -> f64 {
        illumination(self.phase, self.day)
    }

    pub fn is_observance_day(self) -> bool {
        is_observance_day(self.day)
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} day {}", self.phase, self.day)
    }
}

/// Linear illumination ramp: `day/15` waxing, `1 - day/15` waning.
///
/// Not a cosine model. The result is clamped to [0, 1] so out-of-range
/// days can never produce a negative or super-full fraction.
pub fn illumination(phase: Phase, day: u8) -> f64 {
    let f = f64::from(day) / f64::from(DAYS_PER_PHASE);
    let lit = match phase {
        Phase::Waxing => f,
        Phase::Waning => 1.0 - f,
    };
    lit.clamp(0.0, 1.0)
}

/// Whether a lunar day is an observance day (8 or 15, either phase).
pub fn is_observance_day(day: u8) -> bool {
    OBSERVANCE_DAYS.contains(&day)
}

/// English label for an observance day, `None` for ordinary days.
pub fn observance_label(phase: Phase, day: u8) -> Option<&'static str> {
    match (phase, day) {
        (Phase::Waxing, 8) => Some("Waxing 8th observance"),
        (Phase::Waning, 8) => Some("Waning 8th observance"),
        (Phase::Waxing, 15) => Some("Full moon observance (waxing 15)"),
        (Phase::Waning, 15) => Some("New moon observance (waning 15)"),
        _ => None,
    }
}
