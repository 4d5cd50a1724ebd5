//! Terminal UI helpers for the hq mission-control system.
//!
//! Provides the warm-minimal palette as terminal colors, status and stage
//! styling, and terminal capability detection for CLI output.

pub mod styles;
pub mod terminal;
