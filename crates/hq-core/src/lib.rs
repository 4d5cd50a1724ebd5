//! Core domain types for the hq mission-control system.
//!
//! This crate holds the entity structs shared by every other crate: tasks,
//! content items, calendar events, memories, and agents, plus their
//! string-backed enums, validation rules, filters, and id generation.

pub mod agent;
pub mod content;
pub mod enums;
pub mod event;
pub mod filter;
pub mod idgen;
pub mod memory;
pub mod task;
pub mod validation;
