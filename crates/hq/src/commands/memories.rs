//! `hq memories` -- browse the shared memory log.

use anyhow::Result;

use hq_core::memory::Memory;
use hq_ui::styles;

use crate::cli::MemoriesArgs;
use crate::context::RuntimeContext;
use crate::output;

pub fn run(ctx: &RuntimeContext, args: &MemoriesArgs) -> Result<()> {
    let ws = ctx.workspace();

    let hits: Vec<&Memory> = ws
        .memories
        .iter()
        .filter(|m| match args.category.as_deref() {
            Some(cat) => m
                .category
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(cat)),
            None => true,
        })
        .filter(|m| match args.search.as_deref() {
            Some(query) => m.matches_query(query),
            None => true,
        })
        .collect();

    if ctx.json {
        return output::print_json(&hits);
    }

    if hits.is_empty() {
        println!("{}", styles::render_muted("no memories match"));
        return Ok(());
    }

    for memory in &hits {
        let mut header = styles::render_bold(&memory.title);
        if let Some(ref cat) = memory.category {
            header.push(' ');
            header.push_str(&styles::render_accent(&format!("[{cat}]")));
        }
        if let Some(ref agent) = memory.agent_id {
            header.push(' ');
            header.push_str(&styles::render_muted(&format!("by {agent}")));
        }
        println!("{header}");
        println!("  {}", memory.content);
        println!(
            "  {}",
            styles::render_muted(&memory.created_at.format("%Y-%m-%d").to_string())
        );
        println!();
    }

    Ok(())
}
