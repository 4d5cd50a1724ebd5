//! `hq delete` -- remove a task from the board.

use anyhow::Result;

use hq_ui::styles;

use crate::cli::DeleteArgs;
use crate::context::RuntimeContext;
use crate::output;

pub fn run(ctx: &RuntimeContext, args: &DeleteArgs) -> Result<()> {
    let mut ws = ctx.workspace();
    let removed = ws.tasks.remove(&args.id)?;
    tracing::debug!(id = %removed.id, "task deleted");

    if ctx.json {
        return output::print_json(&removed);
    }

    println!(
        "{} deleted {} {}",
        styles::render_done("ok"),
        styles::render_bold(&removed.title),
        styles::render_muted(&format!("#{}", removed.id)),
    );

    Ok(())
}
