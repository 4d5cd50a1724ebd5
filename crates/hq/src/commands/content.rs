//! `hq content` -- the content pipeline, one column per production stage.

use anyhow::Result;

use hq_core::content::ContentItem;
use hq_core::filter::ContentFilter;
use hq_pipeline::group_by_stage;
use hq_ui::styles;

use crate::cli::ContentArgs;
use crate::context::RuntimeContext;
use crate::output;

pub fn run(ctx: &RuntimeContext, args: &ContentArgs) -> Result<()> {
    let stages = ctx.config.content_stages()?;
    let ws = ctx.workspace();

    let filter = ContentFilter {
        agent: args.agent.clone(),
        ..Default::default()
    };
    let items: Vec<ContentItem> = ws
        .content
        .iter()
        .filter(|c| filter.matches(c))
        .cloned()
        .collect();

    let groups = group_by_stage(&items, &stages);

    if ctx.json {
        return output::print_json(&output::group_views(&groups));
    }

    println!("{}", styles::render_bold("Content Pipeline"));
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
        for item in &group.items {
            let mut line = format!(
                "  {} {}",
                item.title,
                styles::render_muted(&format!("#{}", item.id)),
            );
            if !item.agent.is_empty() {
                line.push(' ');
                line.push_str(&styles::render_accent(&format!("@{}", item.agent)));
            }
            println!("{line}");
            if !item.description.is_empty() {
                println!("    {}", styles::render_muted(&item.description));
            }
        }
        println!();
    }

    Ok(())
}
