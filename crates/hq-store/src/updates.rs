//! Typed partial-update structs.
//!
//! Only `Some` fields are applied; `None` fields are left unchanged. The
//! double-`Option` fields distinguish "don't touch" from "clear".

use chrono::{NaiveDate, Utc};

use hq_core::content::ContentItem;
use hq_core::enums::{Assignee, ContentStage, TaskStatus};
use hq_core::task::Task;

/// Partial update for a [`Task`]. Applying any update bumps `updated_at`.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdates {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub assignee: Option<Assignee>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskUpdates {
    pub fn apply(&self, task: &mut Task) {
        if let Some(ref title) = self.title {
            task.title = title.clone();
        }
        if let Some(ref description) = self.description {
            task.description = description.clone();
        }
        if let Some(ref status) = self.status {
            task.status = status.clone();
        }
        if let Some(ref assignee) = self.assignee {
            task.assignee = assignee.clone();
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        task.updated_at = Utc::now();
    }
}

/// Partial update for a [`ContentItem`].
#[derive(Debug, Clone, Default)]
pub struct ContentUpdates {
    pub title: Option<String>,
    pub description: Option<String>,
    pub script: Option<String>,
    pub thumbnail_url: Option<Option<String>>,
    pub stage: Option<ContentStage>,
    pub agent: Option<String>,
}

impl ContentUpdates {
    pub fn apply(&self, item: &mut ContentItem) {
        if let Some(ref title) = self.title {
            item.title = title.clone();
        }
        if let Some(ref description) = self.description {
            item.description = description.clone();
        }
        if let Some(ref script) = self.script {
            item.script = script.clone();
        }
        if let Some(ref thumbnail_url) = self.thumbnail_url {
            item.thumbnail_url = thumbnail_url.clone();
        }
        if let Some(ref stage) = self.stage {
            item.stage = stage.clone();
        }
        if let Some(ref agent) = self.agent {
            item.agent = agent.clone();
        }
        item.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn none_fields_leave_task_unchanged() {
        let mut task = Task::new("1", "Title");
        task.due_date = NaiveDate::from_ymd_opt(2026, 2, 20);

        TaskUpdates::default().apply(&mut task);
        assert_eq!(task.title, "Title");
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2026, 2, 20));
    }

    #[test]
    fn some_fields_are_applied() {
        let mut task = Task::new("1", "Title");
        let updates = TaskUpdates {
            status: Some(TaskStatus::InProgress),
            assignee: Some(Assignee::Agent),
            ..Default::default()
        };
        updates.apply(&mut task);
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.assignee, Assignee::Agent);
    }

    #[test]
    fn double_option_clears_due_date() {
        let mut task = Task::new("1", "Title");
        task.due_date = NaiveDate::from_ymd_opt(2026, 2, 20);

        let updates = TaskUpdates {
            due_date: Some(None),
            ..Default::default()
        };
        updates.apply(&mut task);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn content_stage_update() {
        let mut item = ContentItem::new("c1", "Video");
        let updates = ContentUpdates {
            stage: Some(ContentStage::Filming),
            script: Some("Scene one...".into()),
            ..Default::default()
        };
        updates.apply(&mut item);
        assert_eq!(item.stage, ContentStage::Filming);
        assert_eq!(item.script, "Scene one...");
        assert!(item.thumbnail_url.is_none());
    }
}
