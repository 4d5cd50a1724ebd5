//! `hq move` -- move a board item one stage forward or back.

use anyhow::Result;
use serde::Serialize;

use hq_pipeline::{StageSet, Staged, move_item, try_move_item};
use hq_ui::styles;

use crate::cli::{BoardKind, MoveArgs};
use crate::context::RuntimeContext;
use crate::output::{self, MoveView};

pub fn run(ctx: &RuntimeContext, args: &MoveArgs) -> Result<()> {
    let ws = ctx.workspace();

    match args.board {
        BoardKind::Tasks => {
            let stages = ctx.config.task_stages()?;
            move_on_board(ctx, ws.tasks.all(), args, &stages)
        }
        BoardKind::Content => {
            let stages = ctx.config.content_stages()?;
            move_on_board(ctx, ws.content.all(), args, &stages)
        }
    }
}

fn move_on_board<T: Staged + Clone + Serialize>(
    ctx: &RuntimeContext,
    items: &[T],
    args: &MoveArgs,
    stages: &StageSet,
) -> Result<()> {
    let direction = args.direction.to_direction();

    let moved = if args.strict {
        try_move_item(items, &args.id, direction, stages)?
    } else {
        move_item(items, &args.id, direction, stages)
    };

    let from = stage_of(items, &args.id);
    let to = stage_of(&moved, &args.id);
    let changed = from.is_some() && from != to;
    tracing::debug!(id = %args.id, ?from, ?to, "move applied");

    if ctx.json {
        return output::print_json(&MoveView {
            id: &args.id,
            direction: direction.as_str(),
            from: from.as_deref(),
            to: to.as_deref(),
            moved: changed,
        });
    }

    match (from, to) {
        (Some(_), Some(to)) if changed => {
            println!(
                "{} {} moved to {}",
                styles::render_done("ok"),
                args.id,
                styles::render_accent(stage_label(stages, &to)),
            );
        }
        (Some(from), Some(_)) => {
            println!(
                "{} stays in {}",
                args.id,
                styles::render_muted(stage_label(stages, &from)),
            );
        }
        _ => {
            println!("{}", styles::render_muted(&format!(
                "no item with id '{}', nothing to move",
                args.id
            )));
        }
    }

    Ok(())
}

fn stage_of<T: Staged>(items: &[T], id: &str) -> Option<String> {
    items
        .iter()
        .find(|i| i.item_id() == id)
        .map(|i| i.stage_id().to_owned())
}

/// Label for a known stage id; stray ids fall back to the raw id.
fn stage_label<'a>(stages: &'a StageSet, id: &'a str) -> &'a str {
    stages
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.label.as_str())
        .unwrap_or(id)
}
