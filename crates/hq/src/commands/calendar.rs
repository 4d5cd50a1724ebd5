//! `hq calendar` -- one month as a Sunday-first grid with event markers.

use anyhow::Result;
use chrono::{Datelike, Utc};

use hq_calendar::{Month, MonthGrid, WEEKDAY_HEADERS, events_in_month, events_on_date};
use hq_ui::styles::{self, ICON_EVENT_DOT};

use crate::cli::CalendarArgs;
use crate::context::RuntimeContext;
use crate::output::{self, MonthView};

pub fn run(ctx: &RuntimeContext, args: &CalendarArgs) -> Result<()> {
    let today = Utc::now().date_naive();
    let base = Month::containing(today);

    // CLI months are 1-based; the calendar crate counts from zero.
    let month = match (args.year, args.month) {
        (Some(y), Some(m)) => Month::new(y, m as i32 - 1),
        (Some(y), None) => Month::new(y, base.month as i32),
        (None, Some(m)) => Month::new(base.year, m as i32 - 1),
        (None, None) => base,
    }
    .shifted(args.shift);

    let grid = MonthGrid::compute(month);
    let ws = ctx.workspace();
    let month_events = events_in_month(ws.events.all(), month);

    if ctx.json {
        return output::print_json(&MonthView::new(&grid, month_events));
    }

    println!(
        "{} {}",
        styles::render_bold(month.name()),
        styles::render_muted(&month.year.to_string()),
    );
    let header: String = WEEKDAY_HEADERS.iter().map(|h| format!("{h:>4}")).collect();
    println!("{}", styles::render_muted(&header));

    let mut cells: Vec<String> = Vec::with_capacity(grid.cell_count() as usize);
    for _ in 0..grid.leading_blanks {
        cells.push("    ".to_string());
    }
    for day in 1..=grid.day_count {
        let busy = !events_on_date(ws.events.all(), month.year, month.month as i32, day).is_empty();
        let marker = if busy {
            styles::render_accent(ICON_EVENT_DOT)
        } else {
            " ".to_string()
        };
        cells.push(format!("{day:>3}{marker}"));
    }
    for row in cells.chunks(7) {
        println!("{}", row.concat());
    }

    if !month_events.is_empty() {
        println!();
        for event in &month_events {
            let time = event
                .time
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_else(|| "--:--".to_string());
            println!(
                "  {:>2} {} {} {}",
                event.date.day(),
                styles::render_muted(&time),
                styles::render_kind_tag(&event.kind),
                event.title,
            );
        }
    }

    Ok(())
}
