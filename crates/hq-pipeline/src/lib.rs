//! Ordered-stage pipeline shared by the task board and the content pipeline.
//!
//! The two board views are the same machine with different stage sequences:
//! a fixed, ordered set of named stages and a collection of items each
//! tagged with its current stage. This crate provides the grouping and
//! move operations as pure functions over snapshots; the caller owns the
//! collection and decides what to do with the returned one.

pub mod pipeline;
pub mod stage;

pub use pipeline::{
    Direction, PipelineError, StageGroup, Staged, group_by_stage, move_item, try_move_item,
};
pub use stage::{Stage, StageSet, StageSetError};
