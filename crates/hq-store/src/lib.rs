//! In-memory snapshot store for hq entities.
//!
//! The store owns the entity collections; the computation crates
//! (`hq-pipeline`, `hq-calendar`) are pure functions over snapshots handed
//! out by this crate. Edits live for the lifetime of the process -- there
//! is deliberately no persistence layer behind this.

pub mod seed;
pub mod snapshot;
pub mod updates;
pub mod workspace;

pub use snapshot::{Entity, Snapshot, StoreError};
pub use updates::{ContentUpdates, TaskUpdates};
pub use workspace::HqWorkspace;
