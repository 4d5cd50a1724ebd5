//! CalendarEvent struct -- a dated entry on the calendar.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::EventKind;

/// A scheduled entry: a one-off event, a task deadline, or a cron job run.
///
/// Events are immutable from the core's perspective -- the calendar only
/// reads and indexes them by date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    pub date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,

    #[serde(default, skip_serializing_if = "EventKind::is_default")]
    pub kind: EventKind,

    /// Arbitrary JSON data for extension points (cron spec, links, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl CalendarEvent {
    /// Creates an event of the default kind on the given date.
    pub fn new(id: impl Into<String>, title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            date,
            time: None,
            kind: EventKind::default(),
            metadata: None,
            created_at: Utc::now(),
        }
    }
}
