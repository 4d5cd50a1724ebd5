//! Warm-minimal palette and styling functions for hq CLI output.
//!
//! The palette mirrors the dashboard theme: coral for primary actions and
//! active work, sage for finished work, warm grays for everything quiet.
//!
//! Design principles:
//! - Only active states get color (todo/idle use standard text)
//! - Small Unicode symbols for icons, NOT emoji blobs

use hq_core::enums::{AgentStatus, ContentStage, EventKind, TaskStatus};
use owo_colors::OwoColorize;

use crate::terminal::supports_color;

// ---------------------------------------------------------------------------
// Warm-minimal palette (RGB values)
// ---------------------------------------------------------------------------

/// Coral -- primary accent, in-progress work.
pub const CORAL: (u8, u8, u8) = (0xE0, 0x7A, 0x5F); // #E07A5F
/// Sage -- success, done, published.
pub const SAGE: (u8, u8, u8) = (0x81, 0xB2, 0x9A); // #81B29A
/// Stone -- muted gray for secondary text.
pub const STONE: (u8, u8, u8) = (0x78, 0x71, 0x6C); // #78716C
/// Blossom -- thumbnail stage, soft highlights.
pub const BLOSSOM: (u8, u8, u8) = (0xF4, 0xA5, 0xAE); // #F4A5AE
/// Sky -- published stage, links.
pub const SKY: (u8, u8, u8) = (0x6B, 0x8D, 0xD6); // #6B8DD6
/// Gold -- scheduled / upcoming markers.
pub const GOLD: (u8, u8, u8) = (0xE8, 0xB8, 0x6D); // #E8B86D

// ---------------------------------------------------------------------------
// Icons -- consistent semantic indicators
// ---------------------------------------------------------------------------

/// Todo icon (hollow circle -- available to work).
pub const ICON_TODO: &str = "\u{25CB}"; // ○
/// In-progress icon (half-filled circle -- active work).
pub const ICON_IN_PROGRESS: &str = "\u{25D0}"; // ◐
/// Done icon (checkmark -- completed).
pub const ICON_DONE: &str = "\u{2713}"; // ✓
/// Event dot shown on calendar cells.
pub const ICON_EVENT_DOT: &str = "\u{2022}"; // •
/// Working-agent icon.
pub const ICON_WORKING: &str = "\u{25CF}"; // ●

/// Widest the section separator gets, even on wide terminals.
pub const SEPARATOR_MAX_WIDTH: usize = 40;

// ---------------------------------------------------------------------------
// Helper: apply truecolor only when color is supported
// ---------------------------------------------------------------------------

/// Applies truecolor foreground to a string, falling back to plain text
/// when color is not supported.
fn color_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        s.to_string()
    }
}

fn color_bold_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).bold().to_string()
    } else {
        s.to_string()
    }
}

/// Parses a `#RRGGBB` hex string into an RGB tuple, for colors that come
/// from configuration. Returns `None` for anything malformed.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

// ---------------------------------------------------------------------------
// Semantic render helpers
// ---------------------------------------------------------------------------

/// Renders text with the coral accent.
pub fn render_accent(s: &str) -> String {
    color_str(s, CORAL)
}

/// Renders text with muted (warm gray) styling.
pub fn render_muted(s: &str) -> String {
    color_str(s, STONE)
}

/// Renders text with success (sage) styling.
pub fn render_done(s: &str) -> String {
    color_str(s, SAGE)
}

/// Renders text in bold.
pub fn render_bold(s: &str) -> String {
    if supports_color() {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}

/// Renders a column/section header: bold, in the stage color when one is
/// configured.
pub fn render_header(label: &str, color: Option<&str>) -> String {
    match color.and_then(hex_to_rgb) {
        Some(rgb) => color_bold_str(label, rgb),
        None => render_bold(label),
    }
}

/// Renders a light separator line in muted color, sized to the terminal.
pub fn render_separator() -> String {
    let width = crate::terminal::terminal_width().clamp(1, SEPARATOR_MAX_WIDTH);
    render_muted(&"\u{2500}".repeat(width))
}

// ---------------------------------------------------------------------------
// Domain styling
// ---------------------------------------------------------------------------

/// Icon for a task status.
pub fn status_icon(status: &TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => ICON_TODO,
        TaskStatus::InProgress => ICON_IN_PROGRESS,
        TaskStatus::Done => ICON_DONE,
        TaskStatus::Custom(_) => "?",
    }
}

/// Colored status icon: todo stays plain, active work gets coral, done
/// gets sage.
pub fn render_status_icon(status: &TaskStatus) -> String {
    let icon = status_icon(status);
    match status {
        TaskStatus::Todo => icon.to_string(),
        TaskStatus::InProgress => color_str(icon, CORAL),
        TaskStatus::Done => color_str(icon, SAGE),
        TaskStatus::Custom(_) => icon.to_string(),
    }
}

/// Palette color for a content stage.
pub fn stage_color(stage: &ContentStage) -> (u8, u8, u8) {
    match stage {
        ContentStage::Ideas => STONE,
        ContentStage::Script => CORAL,
        ContentStage::Thumbnail => BLOSSOM,
        ContentStage::Filming => SAGE,
        ContentStage::Published => SKY,
        ContentStage::Custom(_) => STONE,
    }
}

/// Palette color for an event kind, as on the calendar legend.
pub fn kind_color(kind: &EventKind) -> (u8, u8, u8) {
    match kind {
        EventKind::Event => CORAL,
        EventKind::Task => SAGE,
        EventKind::Cron => STONE,
        EventKind::Custom(_) => STONE,
    }
}

/// Renders an event-kind tag like `[cron]` in its color.
pub fn render_kind_tag(kind: &EventKind) -> String {
    color_str(&format!("[{}]", kind.as_str()), kind_color(kind))
}

/// Renders an agent's status marker.
pub fn render_agent_status(status: &AgentStatus) -> String {
    match status {
        AgentStatus::Working => color_str(ICON_WORKING, CORAL),
        AgentStatus::Idle => render_muted(ICON_TODO),
        AgentStatus::Custom(_) => "?".to_string(),
    }
}
