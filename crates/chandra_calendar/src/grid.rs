//! Month grid: leading blanks for weekday alignment, then one lunar
//! summary per day of the month.

use chandra_math::{Phase, illumination, is_observance_day, lunar_day_for_date};
use chrono::{Datelike, NaiveDate};

use crate::month::MonthView;

/// Upper bound on grid cells: six Sunday-aligned weeks.
pub const MAX_GRID_CELLS: usize = 42;

/// Lunar summary for one day of the viewed month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDay {
    /// Absolute date of this cell.
    pub date: NaiveDate,
    /// Day of month (1-31).
    pub day_of_month: u32,
    pub phase: Phase,
    /// Lunar day within the phase (1-15).
    pub lunar_day: u8,
    /// Illuminated fraction, [0, 1].
    pub illumination: f64,
    pub is_selected: bool,
    pub is_today: bool,
    pub is_observance_day: bool,
}

/// Cells for one viewed month. `None` cells are leading blanks.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub view: MonthView,
    pub cells: Vec<Option<CalendarDay>>,
}

impl MonthGrid {
    /// Number of leading blank cells before day 1.
    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|c| c.is_none()).count()
    }

    /// The filled cells, in date order.
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.cells.iter().flatten()
    }

    /// Cells split into Sunday-first weeks; the last week may be short.
    pub fn weeks(&self) -> impl Iterator<Item = &[Option<CalendarDay>]> {
        self.cells.chunks(7)
    }

    /// Absolute date for a clicked day of month, `None` outside the month.
    ///
    /// Selection is by calendar date; lunar-day continuity is not preserved.
    pub fn select(&self, day_of_month: u32) -> Option<NaiveDate> {
        self.days()
            .find(|d| d.day_of_month == day_of_month)
            .map(|d| d.date)
    }

    /// The selected cell, if the selected date falls in this month.
    pub fn selected(&self) -> Option<&CalendarDay> {
        self.days().find(|d| d.is_selected)
    }
}

/// Build the grid for `view`, marking `selected` and `today`.
pub fn month_grid(view: MonthView, selected: NaiveDate, today: NaiveDate) -> MonthGrid {
    let blanks = view.first_weekday_offset() as usize;
    let days = view.days_in_month();
    let mut cells = Vec::with_capacity(blanks + days as usize);
    cells.resize(blanks, None);

    for day_of_month in 1..=days {
        let Ok(date) = view.date_of(day_of_month) else {
            continue;
        };
        let lunar = lunar_day_for_date(date);
        cells.push(Some(CalendarDay {
            date,
            day_of_month: date.day(),
            phase: lunar.phase,
            lunar_day: lunar.day,
            illumination: illumination(lunar.phase, lunar.day),
            is_selected: date == selected,
            is_today: date == today,
            is_observance_day: is_observance_day(lunar.day),
        }));
    }

    MonthGrid { view, cells }
}
