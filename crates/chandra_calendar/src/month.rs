//! Viewed month and month-to-month navigation.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// A calendar month being viewed (year and 1-based month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthView {
    year: i32,
    month: u32,
}

impl MonthView {
    /// Create a view, rejecting months outside 1..=12 and unsupported years.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        // The whole month must be representable, not just its first day.
        let view = Self { year, month };
        view.first_day()?;
        view.last_day()?;
        Ok(view)
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// 1-based month.
    pub fn month(self) -> u32 {
        self.month
    }

    /// The month before this one, rolling back over January.
    pub fn previous(self) -> Result<Self, CalendarError> {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// The month after this one, rolling over December.
    pub fn next(self) -> Result<Self, CalendarError> {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// Number of days in the month (28-31).
    pub fn days_in_month(self) -> u32 {
        self.last_day().map(|d| d.day()).unwrap_or(0)
    }

    /// Weekday of day 1, counted from Sunday (0) to Saturday (6).
    pub fn first_weekday_offset(self) -> u32 {
        self.first_day()
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// Absolute date of a day of this month.
    pub fn date_of(self, day: u32) -> Result<NaiveDate, CalendarError> {
        NaiveDate::from_ymd_opt(self.year, self.month, day).ok_or(CalendarError::InvalidDay {
            year: self.year,
            month: self.month,
            day,
        })
    }

    /// Whether `date` falls in this month.
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    fn first_day(self) -> Result<NaiveDate, CalendarError> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .ok_or(CalendarError::YearOutOfRange(self.year))
    }

    fn last_day(self) -> Result<NaiveDate, CalendarError> {
        let first = self.first_day()?;
        // 28 is valid in every month; walk forward to the last valid day.
        let mut last = first.with_day(28).unwrap_or(first);
        while let Some(next) = last.succ_opt() {
            if next.month() != self.month {
                break;
            }
            last = next;
        }
        Ok(last)
    }
}

impl Display for MonthView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(y: i32, m: u32) -> MonthView {
        MonthView::new(y, m).unwrap()
    }

    #[test]
    fn rejects_month_zero_and_thirteen() {
        assert_eq!(MonthView::new(2024, 0), Err(CalendarError::InvalidMonth(0)));
        assert_eq!(MonthView::new(2024, 13), Err(CalendarError::InvalidMonth(13)));
    }

    #[test]
    fn rejects_unrepresentable_year() {
        assert_eq!(
            MonthView::new(300_000, 1),
            Err(CalendarError::YearOutOfRange(300_000))
        );
    }

    #[test]
    fn days_in_month_table() {
        assert_eq!(view(2024, 1).days_in_month(), 31);
        assert_eq!(view(2024, 2).days_in_month(), 29);
        assert_eq!(view(2023, 2).days_in_month(), 28);
        assert_eq!(view(1900, 2).days_in_month(), 28);
        assert_eq!(view(2000, 2).days_in_month(), 29);
        assert_eq!(view(2024, 4).days_in_month(), 30);
        assert_eq!(view(2024, 12).days_in_month(), 31);
    }

    #[test]
    fn first_weekday_offsets() {
        // 2024-01-01 was a Monday; 2024-09-01 a Sunday; 2026-10-01 a Thursday.
        assert_eq!(view(2024, 1).first_weekday_offset(), 1);
        assert_eq!(view(2024, 9).first_weekday_offset(), 0);
        assert_eq!(view(2026, 10).first_weekday_offset(), 4);
    }

    #[test]
    fn previous_rolls_over_january() {
        assert_eq!(view(2024, 1).previous(), Ok(view(2023, 12)));
        assert_eq!(view(2024, 5).previous(), Ok(view(2024, 4)));
    }

    #[test]
    fn next_rolls_over_december() {
        assert_eq!(view(2023, 12).next(), Ok(view(2024, 1)));
        assert_eq!(view(2024, 5).next(), Ok(view(2024, 6)));
    }

    #[test]
    fn date_of_validates_day() {
        assert!(view(2024, 2).date_of(29).is_ok());
        assert_eq!(
            view(2023, 2).date_of(29),
            Err(CalendarError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            })
        );
    }

    #[test]
    fn containing_and_contains() {
        let d = NaiveDate::from_ymd_opt(2024, 7, 19).unwrap();
        let v = MonthView::containing(d);
        assert_eq!(v, view(2024, 7));
        assert!(v.contains(d));
        assert!(!v.next().unwrap().contains(d));
    }

    #[test]
    fn display_padded() {
        assert_eq!(view(812, 3).to_string(), "0812-03");
    }
}
