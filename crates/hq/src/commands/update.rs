//! `hq update` -- edit fields of an existing task.

use anyhow::{Result, anyhow};

use hq_core::enums::TaskStatus;
use hq_core::validation::validate_task;
use hq_store::TaskUpdates;
use hq_ui::styles;

use crate::cli::{OwnerArg, UpdateArgs};
use crate::context::RuntimeContext;
use crate::output;

pub fn run(ctx: &RuntimeContext, args: &UpdateArgs) -> Result<()> {
    let mut ws = ctx.workspace();

    let updates = TaskUpdates {
        title: args.title.clone(),
        description: args.description.clone(),
        status: args.status.as_deref().map(TaskStatus::from),
        assignee: args.assignee.map(OwnerArg::to_assignee),
        due_date: if args.clear_due {
            Some(None)
        } else {
            args.due.map(Some)
        },
    };

    let mut task = ws
        .tasks
        .get(&args.id)
        .cloned()
        .ok_or_else(|| anyhow!("no task with id '{}'", args.id))?;
    updates.apply(&mut task);
    validate_task(&task)?;

    ws.tasks.insert(task.clone());
    tracing::debug!(id = %task.id, "task updated");

    if ctx.json {
        return output::print_json(&task);
    }

    println!(
        "{} updated {} {}",
        styles::render_done("ok"),
        styles::render_bold(&task.title),
        styles::render_muted(&format!("#{}", task.id)),
    );

    Ok(())
}
