//! Month grids of lunar-day summaries.
//!
//! This crate provides:
//! - `MonthView`: a viewed year/month with previous/next navigation
//! - `month_grid`: Sunday-aligned cells, one `CalendarDay` per date
//! - Thai calendar labels (Buddhist Era dates, lunar-day captions)

pub mod error;
pub mod grid;
pub mod month;
pub mod thai;

pub use error::CalendarError;
pub use grid::{CalendarDay, MAX_GRID_CELLS, MonthGrid, month_grid};
pub use month::MonthView;
