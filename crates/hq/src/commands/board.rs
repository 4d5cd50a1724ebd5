//! `hq board` -- the task board, one column per status.

use anyhow::Result;

use hq_core::filter::TaskFilter;
use hq_core::task::Task;
use hq_pipeline::group_by_stage;
use hq_ui::styles;

use crate::cli::BoardArgs;
use crate::context::RuntimeContext;
use crate::output;

pub fn run(ctx: &RuntimeContext, args: &BoardArgs) -> Result<()> {
    let stages = ctx.config.task_stages()?;
    let ws = ctx.workspace();

    let filter = TaskFilter {
        assignee: args.assignee.to_assignee(),
        ..Default::default()
    };
    let tasks: Vec<Task> = ws
        .tasks
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect();

    let groups = group_by_stage(&tasks, &stages);

    if ctx.json {
        return output::print_json(&output::group_views(&groups));
    }

    println!("{}", styles::render_bold("Task Board"));
    println!("{}", styles::render_separator());

    for group in &groups {
        println!(
            "{}  {}",
            styles::render_header(&group.stage.label, group.stage.color.as_deref()),
            styles::render_muted(&format!("({})", group.len())),
        );
        if group.is_empty() {
            println!("  {}", styles::render_muted("(empty)"));
        }
        for task in &group.items {
            let mut line = format!(
                "  {} {} {}",
                styles::render_status_icon(&task.status),
                task.title,
                styles::render_muted(&format!("#{}", task.id)),
            );
            if let Some(due) = task.due_date {
                line.push(' ');
                line.push_str(&styles::render_muted(&format!("due {due}")));
            }
            println!("{line}");
        }
        println!();
    }

    Ok(())
}
