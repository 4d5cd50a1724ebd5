//! The workspace: one snapshot per entity collection.

use hq_core::agent::Agent;
use hq_core::content::ContentItem;
use hq_core::event::CalendarEvent;
use hq_core::memory::Memory;
use hq_core::task::Task;

use crate::seed;
use crate::snapshot::Snapshot;

/// All entity collections of one hq instance.
///
/// The workspace is the single owner of state. Pipeline and calendar
/// functions read slices out of it and hand back new collections, which
/// the caller applies via `replace_all` as the next snapshot.
#[derive(Debug, Clone, Default)]
pub struct HqWorkspace {
    pub tasks: Snapshot<Task>,
    pub content: Snapshot<ContentItem>,
    pub events: Snapshot<CalendarEvent>,
    pub memories: Snapshot<Memory>,
    pub agents: Snapshot<Agent>,
}

impl HqWorkspace {
    /// An empty workspace.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A workspace loaded with the seed dataset.
    pub fn seeded() -> Self {
        Self {
            tasks: Snapshot::new(seed::tasks()),
            content: Snapshot::new(seed::content()),
            events: Snapshot::new(seed::events()),
            memories: Snapshot::new(seed::memories()),
            agents: Snapshot::new(seed::agents()),
        }
    }
}
