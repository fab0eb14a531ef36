//! Lunar approximations driving the chandra moon dial.
//!
//! This crate provides:
//! - Lunar age from a fixed reference new moon (mean synodic month)
//! - Waxing/waning half-cycle split into 15 lunar days
//! - Linear illumination and moonrise models
//! - Projection of moonrise onto the 12-hour dial
//! - Disc rotation and snap geometry for the ring of 15 moon icons
//!
//! None of these are ephemeris-grade. The models are deliberately linear so
//! that every derived value is a simple, reproducible function of the date.

pub mod age;
pub mod disc;
pub mod error;
pub mod lunar_day;
pub mod moon_shape;
pub mod moonrise;
pub mod phase;
pub mod phase_name;
pub mod util;

pub use age::{
    EVALUATION_HOUR_UTC, REFERENCE_NEW_MOON_MS, SYNODIC_MONTH_DAYS, lunar_age, lunar_age_at,
    lunar_day_for_date, lunar_day_from_age,
};
pub use disc::{
    DEG_PER_DAY, RING_RADIUS, RingSlot, day_from_rotation, disc_rotation_for_day, ring_layout,
    snap_index,
};
pub use error::MathError;
pub use lunar_day::{
    DAYS_PER_PHASE, LunarDate, OBSERVANCE_DAYS, illumination, is_observance_day,
    observance_label,
};
pub use moon_shape::{DARK_THRESHOLD, LIT_THRESHOLD, LitSide, MoonShape, moon_shape};
pub use moonrise::{MoonriseTime, clock_angle, dial_hour_labels, moonrise_time};
pub use phase::{ALL_PHASES, Phase};
pub use phase_name::{PhaseName, phase_name};
pub use util::{normalize_360, normalize_to_pm180};
