//! Entity validation rules.
//!
//! Validation keeps the "unknown stage" class of bugs at the boundary: a
//! record that reaches a board or the calendar has passed these checks, so
//! the pipeline's omit-unknown behavior only triggers for data that
//! deliberately bypassed them.

use crate::content::ContentItem;
use crate::event::CalendarEvent;
use crate::task::Task;

/// Error type for validation failures.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("title is required")]
    TitleRequired,

    #[error("title must be 200 characters or less (got {0})")]
    TitleTooLong(usize),

    #[error("id is required")]
    IdRequired,

    #[error("unknown status: {0}")]
    UnknownStatus(String),

    #[error("unknown stage: {0}")]
    UnknownStage(String),

    #[error("unknown assignee: {0}")]
    UnknownAssignee(String),

    #[error("unknown event kind: {0}")]
    UnknownEventKind(String),
}

/// Shared title/id checks.
fn validate_common(id: &str, title: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::IdRequired);
    }
    if title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if title.len() > 200 {
        return Err(ValidationError::TitleTooLong(title.len()));
    }
    Ok(())
}

/// Validates a task using built-in statuses only.
pub fn validate_task(task: &Task) -> Result<(), ValidationError> {
    validate_common(&task.id, &task.title)?;
    if !task.status.is_builtin() {
        return Err(ValidationError::UnknownStatus(
            task.status.as_str().to_owned(),
        ));
    }
    if !task.assignee.is_builtin() {
        return Err(ValidationError::UnknownAssignee(
            task.assignee.as_str().to_owned(),
        ));
    }
    Ok(())
}

/// Validates a content item using built-in stages only.
pub fn validate_content_item(item: &ContentItem) -> Result<(), ValidationError> {
    validate_common(&item.id, &item.title)?;
    if !item.stage.is_builtin() {
        return Err(ValidationError::UnknownStage(
            item.stage.as_str().to_owned(),
        ));
    }
    Ok(())
}

/// Validates a calendar event.
pub fn validate_event(event: &CalendarEvent) -> Result<(), ValidationError> {
    validate_common(&event.id, &event.title)?;
    if !event.kind.is_builtin() {
        return Err(ValidationError::UnknownEventKind(
            event.kind.as_str().to_owned(),
        ));
    }
    Ok(())
}
