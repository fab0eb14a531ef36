//! Everything a renderer needs, derived from the selected date.
//!
//! A snapshot is built from scratch on every call. Nothing here is cached
//! between events.

use chandra_calendar::thai::{format_date_thai, lunar_day_label, month_label};
use chandra_calendar::{MonthGrid, MonthView, month_grid};
use chandra_math::{
    LunarDate, MoonShape, MoonriseTime, Phase, PhaseName, RING_RADIUS, RingSlot,
    dial_hour_labels, disc_rotation_for_day, illumination, is_observance_day, lunar_day_for_date,
    moon_shape, moonrise_time, observance_label, phase_name, ring_layout,
};
use chrono::NaiveDate;

/// Radius of one moon icon on the ring, scene units.
pub const ICON_RADIUS: f64 = 26.0;

/// One moon icon on the ring, drawn for the selected phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingIcon {
    pub slot: RingSlot,
    pub illumination: f64,
    pub shape: MoonShape,
    pub is_selected: bool,
    pub is_observance_day: bool,
}

/// Derived view state for one selected date.
#[derive(Debug, Clone, PartialEq)]
pub struct DialSnapshot {
    pub selected: NaiveDate,
    pub today: NaiveDate,
    pub is_today: bool,
    pub lunar: LunarDate,
    pub illumination: f64,
    pub moonrise: MoonriseTime,
    /// Moonrise hand angle on the 12-hour face, [0, 360).
    pub clock_angle: f64,
    /// Printed hour labels, clockwise from the top.
    pub dial_labels: [u8; 12],
    pub phase_name: PhaseName,
    pub is_observance_day: bool,
    pub observance_label: Option<&'static str>,
    /// Thai observance caption with Thai numerals, e.g. "ขึ้น ๘ ค่ำ".
    pub observance_label_thai: Option<&'static str>,
    /// Thai lunar-day caption, e.g. "แรม 3 ค่ำ".
    pub lunar_label_thai: String,
    /// Selected date in Buddhist Era form.
    pub date_label_thai: String,
    /// Disc rotation: live while dragging, canonical otherwise.
    pub disc_rotation: f64,
    pub is_dragging: bool,
    pub is_animating: bool,
    pub ring: Vec<RingIcon>,
    pub month: MonthGrid,
    pub month_label_thai: String,
}

impl DialSnapshot {
    /// Recompute every derived value.
    ///
    /// `live_rotation` is the drag rotation, if a drag is in progress.
    pub fn compute(
        selected: NaiveDate,
        today: NaiveDate,
        view: MonthView,
        live_rotation: Option<f64>,
        is_animating: bool,
    ) -> Self {
        let lunar = lunar_day_for_date(selected);
        let LunarDate { phase, day } = lunar;
        let moonrise = moonrise_time(phase, day);
        let disc_rotation = live_rotation.unwrap_or_else(|| disc_rotation_for_day(day));

        Self {
            selected,
            today,
            is_today: selected == today,
            lunar,
            illumination: lunar.illumination(),
            moonrise,
            clock_angle: moonrise.clock_angle(phase),
            dial_labels: dial_hour_labels(phase),
            phase_name: phase_name(phase, day),
            is_observance_day: is_observance_day(day),
            observance_label: observance_label(phase, day),
            observance_label_thai: chandra_calendar::thai::observance_label(phase, day),
            lunar_label_thai: lunar_day_label(phase, day),
            date_label_thai: format_date_thai(selected),
            disc_rotation,
            is_dragging: live_rotation.is_some(),
            is_animating,
            ring: ring_icons(phase, day, disc_rotation),
            month: month_grid(view, selected, today),
            month_label_thai: month_label(view),
        }
    }

    pub fn phase(&self) -> Phase {
        self.lunar.phase
    }

    pub fn day(&self) -> u8 {
        self.lunar.day
    }
}

fn ring_icons(phase: Phase, selected_day: u8, rotation: f64) -> Vec<RingIcon> {
    ring_layout(rotation, RING_RADIUS)
        .into_iter()
        .map(|slot| {
            let illum = illumination(phase, slot.day);
            RingIcon {
                slot,
                illumination: illum,
                shape: moon_shape(illum, phase, ICON_RADIUS),
                is_selected: slot.day == selected_day,
                is_observance_day: is_observance_day(slot.day),
            }
        })
        .collect()
}
