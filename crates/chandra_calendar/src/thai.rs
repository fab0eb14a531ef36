//! Thai labels for dates and lunar days.
//!
//! Years are shown in the Buddhist Era (CE + 543). Lunar days read
//! "ขึ้น N ค่ำ" while waxing and "แรม N ค่ำ" while waning.

use chandra_math::Phase;
use chrono::{Datelike, NaiveDate};

use crate::grid::CalendarDay;
use crate::month::MonthView;

/// Offset from the Common Era to the Buddhist Era.
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Weekday abbreviations, Sunday first.
pub const THAI_WEEKDAYS: [&str; 7] = ["อา.", "จ.", "อ.", "พ.", "พฤ.", "ศ.", "ส."];

/// Month names, January first.
pub const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

fn month_name(month: u32) -> &'static str {
    THAI_MONTHS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// Date as "D <month> <BE year>", e.g. "18 ตุลาคม 2569".
pub fn format_date_thai(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        month_name(date.month()),
        date.year() + BUDDHIST_ERA_OFFSET
    )
}

/// Calendar header, e.g. "มกราคม 2567".
pub fn month_label(view: MonthView) -> String {
    format!(
        "{} {}",
        month_name(view.month()),
        view.year() + BUDDHIST_ERA_OFFSET
    )
}

/// Lunar day caption, e.g. "ขึ้น 8 ค่ำ".
pub fn lunar_day_label(phase: Phase, day: u8) -> String {
    let prefix = match phase {
        Phase::Waxing => "ขึ้น",
        Phase::Waning => "แรม",
    };
    format!("{prefix} {day} ค่ำ")
}

/// Observance-day caption, `None` for ordinary days.
pub fn observance_label(phase: Phase, day: u8) -> Option<&'static str> {
    match (phase, day) {
        (Phase::Waxing, 8) => Some("ขึ้น ๘ ค่ำ"),
        (Phase::Waning, 8) => Some("แรม ๘ ค่ำ"),
        (Phase::Waxing, 15) => Some("วันเพ็ญ (ขึ้น ๑๕ ค่ำ)"),
        (Phase::Waning, 15) => Some("วันจันทร์ดับ (แรม ๑๕ ค่ำ)"),
        _ => None,
    }
}

/// Hover caption for a calendar cell.
pub fn cell_title(day: &CalendarDay) -> String {
    let label = lunar_day_label(day.phase, day.lunar_day);
    if day.is_observance_day {
        format!("{label} (วันพระ)")
    } else {
        label
    }
}
