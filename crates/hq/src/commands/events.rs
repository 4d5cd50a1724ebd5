//! `hq events` -- everything scheduled on one calendar day.

use anyhow::Result;
use chrono::{Datelike, Utc};

use hq_calendar::events_on_date;
use hq_ui::styles;

use crate::cli::EventsArgs;
use crate::context::RuntimeContext;
use crate::output;

pub fn run(ctx: &RuntimeContext, args: &EventsArgs) -> Result<()> {
    let date = args.date.unwrap_or_else(|| Utc::now().date_naive());
    let ws = ctx.workspace();

    let hits = events_on_date(
        ws.events.all(),
        date.year(),
        date.month0() as i32,
        date.day(),
    );

    if ctx.json {
        return output::print_json(&hits);
    }

    if hits.is_empty() {
        println!("{}", styles::render_muted(&format!("no events on {date}")));
        return Ok(());
    }

    let plural = if hits.len() == 1 { "event" } else { "events" };
    println!(
        "{}",
        styles::render_bold(&format!("{date}: {} {plural}", hits.len()))
    );
    for event in &hits {
        let time = event
            .time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string());
        println!(
            "  {} {} {}",
            styles::render_muted(&time),
            styles::render_kind_tag(&event.kind),
            event.title,
        );
        if !event.description.is_empty() {
            println!("        {}", styles::render_muted(&event.description));
        }
    }

    Ok(())
}
