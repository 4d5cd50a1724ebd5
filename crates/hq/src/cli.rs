//! Clap CLI definitions for the `hq` command.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use hq_core::enums::Assignee;
use hq_pipeline::Direction;

/// hq -- mission control in a terminal.
///
/// A shared task board, content pipeline, calendar, memory log, and team
/// roster for a human and their agent team.
#[derive(Parser, Debug)]
#[command(
    name = "hq",
    about = "Mission control in a terminal",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Config file path (default: ./hq.yaml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose logging to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the task board grouped by column.
    Board(BoardArgs),

    /// Show the content pipeline grouped by stage.
    Content(ContentArgs),

    /// Move a task or content item one stage forward or back.
    Move(MoveArgs),

    /// Render a calendar month with its events.
    Calendar(CalendarArgs),

    /// List events on a specific date.
    Events(EventsArgs),

    /// Show the agent roster.
    Agents,

    /// Browse the memory log.
    Memories(MemoriesArgs),

    /// Create a new task.
    Create(CreateArgs),

    /// Edit fields of an existing task.
    Update(UpdateArgs),

    /// Delete a task.
    Delete(DeleteArgs),

    /// Print version information.
    Version,
}

/// The board's assignee toggle.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssigneeFilter {
    #[default]
    All,
    Me,
    Agent,
}

impl AssigneeFilter {
    /// `All` means no filtering.
    pub fn to_assignee(self) -> Option<Assignee> {
        match self {
            Self::All => None,
            Self::Me => Some(Assignee::Me),
            Self::Agent => Some(Assignee::Agent),
        }
    }
}

#[derive(Args, Debug)]
pub struct BoardArgs {
    /// Show only tasks for one owner.
    #[arg(long, value_enum, default_value_t = AssigneeFilter::All)]
    pub assignee: AssigneeFilter,
}

#[derive(Args, Debug)]
pub struct ContentArgs {
    /// Show only items owned by this agent.
    #[arg(long)]
    pub agent: Option<String>,
}

/// Which board an item id refers to.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardKind {
    #[default]
    Tasks,
    Content,
}

/// CLI-facing move direction.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Prev,
    Next,
}

impl MoveDirection {
    pub fn to_direction(self) -> Direction {
        match self {
            Self::Prev => Direction::Prev,
            Self::Next => Direction::Next,
        }
    }
}

#[derive(Args, Debug)]
pub struct MoveArgs {
    /// Item id.
    pub id: String,

    /// Direction to move.
    #[arg(value_enum)]
    pub direction: MoveDirection,

    /// Which board the id belongs to.
    #[arg(long, value_enum, default_value_t = BoardKind::Tasks)]
    pub board: BoardKind,

    /// Fail on unknown ids instead of silently doing nothing.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct CalendarArgs {
    /// Year to show (default: current year).
    #[arg(
        long,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i32).range(-262_143..=262_142)
    )]
    pub year: Option<i32>,

    /// Month to show, 1-12 (default: current month).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Shift the shown month by this many months (e.g. -1 for previous).
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub shift: i32,
}

#[derive(Args, Debug)]
pub struct EventsArgs {
    /// Date to list, as YYYY-MM-DD (default: today).
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct MemoriesArgs {
    /// Show only memories in this category.
    #[arg(long)]
    pub category: Option<String>,

    /// Search titles and contents.
    #[arg(long)]
    pub search: Option<String>,
}

/// A concrete task owner, for `create`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OwnerArg {
    #[default]
    Me,
    Agent,
}

impl OwnerArg {
    pub fn to_assignee(self) -> Assignee {
        match self {
            Self::Me => Assignee::Me,
            Self::Agent => Assignee::Agent,
        }
    }
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Task title.
    pub title: String,

    /// Task description.
    #[arg(short, long)]
    pub description: Option<String>,

    /// Owner of the task.
    #[arg(long, value_enum, default_value_t = OwnerArg::Me)]
    pub assignee: OwnerArg,

    /// Due date, as YYYY-MM-DD.
    #[arg(long)]
    pub due: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Task id.
    pub id: String,

    /// New title.
    #[arg(long)]
    pub title: Option<String>,

    /// New description.
    #[arg(short, long)]
    pub description: Option<String>,

    /// New status column (todo, in-progress, done).
    #[arg(long)]
    pub status: Option<String>,

    /// New owner.
    #[arg(long, value_enum)]
    pub assignee: Option<OwnerArg>,

    /// New due date, as YYYY-MM-DD.
    #[arg(long, conflicts_with = "clear_due")]
    pub due: Option<NaiveDate>,

    /// Remove the due date.
    #[arg(long)]
    pub clear_due: bool,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Task id.
    pub id: String,
}
