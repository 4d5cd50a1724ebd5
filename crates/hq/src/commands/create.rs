//! `hq create` -- add a task to the board.

use anyhow::Result;
use chrono::Utc;

use hq_core::idgen::{DEFAULT_ID_LENGTH, generate_hash_id};
use hq_core::task::Task;
use hq_core::validation::validate_task;
use hq_ui::styles;

use crate::cli::CreateArgs;
use crate::context::RuntimeContext;
use crate::output;

pub fn run(ctx: &RuntimeContext, args: &CreateArgs) -> Result<()> {
    let now = Utc::now();
    let creator = ctx.config.actor.as_deref().unwrap_or("me");
    let mut ws = ctx.workspace();

    // Retry with a fresh nonce on the unlikely id collision.
    let mut nonce = 0;
    let id = loop {
        let candidate = generate_hash_id(
            ctx.config.id_prefix(),
            &args.title,
            creator,
            now,
            DEFAULT_ID_LENGTH,
            nonce,
        );
        if !ws.tasks.contains(&candidate) {
            break candidate;
        }
        nonce += 1;
    };

    let mut task = Task::new(id, args.title.clone());
    task.description = args.description.clone().unwrap_or_default();
    task.assignee = args.assignee.to_assignee();
    task.due_date = args.due;
    validate_task(&task)?;

    ws.tasks.insert(task.clone());
    tracing::debug!(id = %task.id, "task created");

    if ctx.json {
        return output::print_json(&task);
    }

    println!(
        "{} created {} {}",
        styles::render_done("ok"),
        styles::render_bold(&task.title),
        styles::render_muted(&format!("#{}", task.id)),
    );
    if let Some(due) = task.due_date {
        println!("  {}", styles::render_muted(&format!("due {due}")));
    }

    Ok(())
}
