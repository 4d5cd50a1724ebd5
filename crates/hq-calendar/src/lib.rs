//! Month grid computation and date-to-event indexing for the calendar view.
//!
//! The grid is Sunday-first and months are zero-based at the API boundary
//! (January = 0), matching the data the views were built around. chrono's
//! one-based months stay internal to this crate.

pub mod events;
pub mod grid;

pub use events::{events_in_month, events_on_date};
pub use grid::{
    MONTH_NAMES, Month, MonthGrid, WEEKDAY_HEADERS, days_in_month, first_weekday_offset,
};
