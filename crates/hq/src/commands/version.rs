//! `hq version` -- version information.

use anyhow::Result;
use serde::Serialize;

use crate::context::RuntimeContext;
use crate::output;

#[derive(Serialize)]
struct VersionView {
    name: &'static str,
    version: &'static str,
}

pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let view = VersionView {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    };

    if ctx.json {
        return output::print_json(&view);
    }

    println!("{} {}", view.name, view.version);
    Ok(())
}
