//! Filter types for querying snapshots.
//!
//! Filters are plain data plus a pure `matches` method; callers apply them
//! with `iter().filter(...)` over whatever snapshot they hold.

use chrono::NaiveDate;

use crate::content::ContentItem;
use crate::enums::{Assignee, ContentStage, EventKind, TaskStatus};
use crate::event::CalendarEvent;
use crate::task::Task;

/// Filter for task queries. The board's `all | me | agent` toggle is the
/// `assignee` field; `None` means all.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub assignee: Option<Assignee>,
    pub title_contains: Option<String>,

    // Date ranges (inclusive)
    pub due_after: Option<NaiveDate>,
    pub due_before: Option<NaiveDate>,
}

impl TaskFilter {
    /// Returns `true` if the task satisfies every set field.
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(ref status) = self.status {
            if task.status != *status {
                return false;
            }
        }
        if let Some(ref assignee) = self.assignee {
            if task.assignee != *assignee {
                return false;
            }
        }
        if let Some(ref needle) = self.title_contains {
            if !task.title.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }
        if let Some(after) = self.due_after {
            match task.due_date {
                Some(due) if due >= after => {}
                _ => return false,
            }
        }
        if let Some(before) = self.due_before {
            match task.due_date {
                Some(due) if due <= before => {}
                _ => return false,
            }
        }
        true
    }
}

/// Filter for content pipeline queries.
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    pub stage: Option<ContentStage>,
    /// Owning agent name, exact match.
    pub agent: Option<String>,
    pub title_contains: Option<String>,
}

impl ContentFilter {
    pub fn matches(&self, item: &ContentItem) -> bool {
        if let Some(ref stage) = self.stage {
            if item.stage != *stage {
                return false;
            }
        }
        if let Some(ref agent) = self.agent {
            if item.agent != *agent {
                return false;
            }
        }
        if let Some(ref needle) = self.title_contains {
            if !item.title.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

/// Filter for calendar event queries.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub kind: Option<EventKind>,
    /// Exact calendar date.
    pub on: Option<NaiveDate>,
}

impl EventFilter {
    pub fn matches(&self, event: &CalendarEvent) -> bool {
        if let Some(ref kind) = self.kind {
            if event.kind != *kind {
                return false;
            }
        }
        if let Some(on) = self.on {
            if event.date != on {
                return false;
            }
        }
        true
    }
}
