//! Command implementations, one module per subcommand.

mod agents;
mod board;
mod calendar;
mod content;
mod create;
mod delete;
mod events;
mod memories;
mod r#move;
mod update;
mod version;

use crate::cli::{Cli, Commands};
use crate::context::RuntimeContext;

pub fn dispatch(cli: Cli) -> anyhow::Result<()> {
    let ctx = RuntimeContext::from_global_args(&cli.global)?;

    match cli.command {
        Commands::Board(args) => board::run(&ctx, &args),
        Commands::Content(args) => content::run(&ctx, &args),
        Commands::Move(args) => r#move::run(&ctx, &args),
        Commands::Calendar(args) => calendar::run(&ctx, &args),
        Commands::Events(args) => events::run(&ctx, &args),
        Commands::Agents => agents::run(&ctx),
        Commands::Memories(args) => memories::run(&ctx, &args),
        Commands::Create(args) => create::run(&ctx, &args),
        Commands::Update(args) => update::run(&ctx, &args),
        Commands::Delete(args) => delete::run(&ctx, &args),
        Commands::Version => version::run(&ctx),
    }
}
