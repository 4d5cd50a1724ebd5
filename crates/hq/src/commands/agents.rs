//! `hq agents` -- the team roster.

use anyhow::Result;

use hq_ui::styles;

use crate::context::RuntimeContext;
use crate::output;

pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let ws = ctx.workspace();

    if ctx.json {
        return output::print_json(&ws.agents.all());
    }

    for agent in ws.agents.iter() {
        let avatar = agent.avatar.as_deref().unwrap_or("?");
        let name = styles::render_header(&agent.name, agent.color.as_deref());
        println!(
            "{} {name} {} {}",
            styles::render_agent_status(&agent.status),
            styles::render_muted(&format!("[{avatar}]")),
            styles::render_muted(&agent.role),
        );
        if let Some(ref task) = agent.current_task {
            println!("    {} {task}", styles::render_accent("working on:"));
        }
        if !agent.description.is_empty() {
            println!("    {}", styles::render_muted(&agent.description));
        }
    }

    Ok(())
}
