//! Task struct -- a card on the task board.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{Assignee, TaskStatus};

/// A trackable unit of work, owned by either the human or the agent team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "TaskStatus::is_default")]
    pub status: TaskStatus,

    #[serde(default, skip_serializing_if = "Assignee::is_default")]
    pub assignee: Assignee,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl Default for Task {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            status: TaskStatus::default(),
            assignee: Assignee::default(),
            created_at: now,
            updated_at: now,
            due_date: None,
        }
    }
}

impl Task {
    /// Creates a task in the default (todo) column.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Returns `true` once the task has reached the done column.
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Returns `true` if the task has a due date strictly before `today`
    /// and is not yet done.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => due < today && !self.is_done(),
            None => false,
        }
    }
}
