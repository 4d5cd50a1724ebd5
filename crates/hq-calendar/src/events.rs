//! Date-to-event indexing.

use chrono::Datelike;
use hq_core::event::CalendarEvent;

use crate::grid::Month;

/// All events on the exact calendar day, in input order.
///
/// `month` is zero-based. An invalid day (e.g. February 30) simply matches
/// nothing; lookups are total and never fail.
pub fn events_on_date(
    events: &[CalendarEvent],
    year: i32,
    month: i32,
    day: u32,
) -> Vec<&CalendarEvent> {
    match Month::new(year, month).date_of(day) {
        Some(date) => events.iter().filter(|e| e.date == date).collect(),
        None => Vec::new(),
    }
}

/// All events falling inside the month, in input order.
pub fn events_in_month(events: &[CalendarEvent], month: Month) -> Vec<&CalendarEvent> {
    events
        .iter()
        .filter(|e| e.date.year() == month.year && e.date.month0() == month.month)
        .collect()
}
