//! JSON view models and output helpers.
//!
//! Text rendering lives with each command; this module covers the `--json`
//! side so scripts get a stable shape regardless of terminal styling.

use serde::Serialize;

use hq_calendar::MonthGrid;
use hq_core::event::CalendarEvent;
use hq_pipeline::StageGroup;

/// Pretty-prints any serializable value to stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

/// One board column as seen by `--json`: stage identity plus its items.
#[derive(Serialize)]
pub struct GroupView<'a, T: Serialize> {
    pub stage: &'a str,
    pub label: &'a str,
    pub count: usize,
    pub items: Vec<&'a T>,
}

impl<'a, T: Serialize> From<&'a StageGroup<'a, T>> for GroupView<'a, T> {
    fn from(group: &'a StageGroup<'a, T>) -> Self {
        Self {
            stage: &group.stage.id,
            label: &group.stage.label,
            count: group.len(),
            items: group.items.clone(),
        }
    }
}

/// Converts grouped items into their JSON views.
pub fn group_views<'a, T: Serialize>(groups: &'a [StageGroup<'a, T>]) -> Vec<GroupView<'a, T>> {
    groups.iter().map(GroupView::from).collect()
}

/// Result of a move command.
#[derive(Serialize)]
pub struct MoveView<'a> {
    pub id: &'a str,
    pub direction: &'a str,
    pub from: Option<&'a str>,
    pub to: Option<&'a str>,
    /// `false` for every no-op: unknown id, boundary clamp, stray stage.
    pub moved: bool,
}

/// One rendered month with its layout metadata and events.
#[derive(Serialize)]
pub struct MonthView<'a> {
    pub year: i32,
    /// 1-based month for human-facing output.
    pub month: u32,
    pub name: &'static str,
    pub day_count: u32,
    pub leading_blanks: u32,
    pub rows: u32,
    pub events: Vec<&'a CalendarEvent>,
}

impl<'a> MonthView<'a> {
    pub fn new(grid: &MonthGrid, events: Vec<&'a CalendarEvent>) -> Self {
        Self {
            year: grid.month.year,
            month: grid.month.month + 1,
            name: grid.month.name(),
            day_count: grid.day_count,
            leading_blanks: grid.leading_blanks,
            rows: grid.row_count(),
            events,
        }
    }
}
