//! Configuration types and loading.
//!
//! The main entry point is [`HqConfig`], which represents the contents of
//! `hq.yaml`. Configuration is loaded with [`load_config`] and saved with
//! [`save_config`]. Stage sequences are validated here, at the
//! configuration boundary, so a board never sees a duplicate or blank
//! stage id at runtime.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use hq_pipeline::{Stage, StageSet, StageSetError};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration file contained invalid YAML.
    #[error("failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// A configured stage sequence was invalid.
    #[error("invalid stage sequence for board '{board}': {source}")]
    InvalidStages {
        /// The board whose stages failed validation.
        board: String,
        source: StageSetError,
    },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Board configuration
// ---------------------------------------------------------------------------

/// Stage sequences for the two boards, deserialized straight into the
/// pipeline's [`Stage`] type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardsConfig {
    /// Task board columns, in order.
    #[serde(default = "default_task_stages")]
    pub tasks: Vec<Stage>,

    /// Content pipeline stages, in order.
    #[serde(default = "default_content_stages")]
    pub content: Vec<Stage>,
}

impl Default for BoardsConfig {
    fn default() -> Self {
        Self {
            tasks: default_task_stages(),
            content: default_content_stages(),
        }
    }
}

fn default_task_stages() -> Vec<Stage> {
    vec![
        Stage::new("todo", "To Do").with_color("#78716C"),
        Stage::new("in-progress", "In Progress").with_color("#E07A5F"),
        Stage::new("done", "Done").with_color("#81B29A"),
    ]
}

fn default_content_stages() -> Vec<Stage> {
    vec![
        Stage::new("ideas", "Ideas").with_color("#78716C"),
        Stage::new("script", "Script").with_color("#E07A5F"),
        Stage::new("thumbnail", "Thumbnail").with_color("#F4A5AE"),
        Stage::new("filming", "Filming").with_color("#81B29A"),
        Stage::new("published", "Published").with_color("#6B8DD6"),
    ]
}

// ---------------------------------------------------------------------------
// Theme configuration
// ---------------------------------------------------------------------------

/// The warm-minimal palette the dashboard uses, as hex strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Primary action color.
    #[serde(default = "default_accent")]
    pub accent: String,

    /// Main text color.
    #[serde(default = "default_ink")]
    pub ink: String,

    /// Secondary text color.
    #[serde(default = "default_muted")]
    pub muted: String,

    /// Success / done color.
    #[serde(default = "default_sage")]
    pub sage: String,

    /// Per-agent accent overrides keyed by agent name.
    #[serde(default)]
    pub agent_colors: HashMap<String, String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: default_accent(),
            ink: default_ink(),
            muted: default_muted(),
            sage: default_sage(),
            agent_colors: HashMap::new(),
        }
    }
}

fn default_accent() -> String {
    "#E07A5F".to_string()
}

fn default_ink() -> String {
    "#292524".to_string()
}

fn default_muted() -> String {
    "#78716C".to_string()
}

fn default_sage() -> String {
    "#81B29A".to_string()
}

// ---------------------------------------------------------------------------
// Main config struct
// ---------------------------------------------------------------------------

/// The full hq configuration, corresponding to `hq.yaml`.
///
/// All fields use `serde` defaults so that a partially-specified YAML file
/// deserializes correctly with sensible default values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HqConfig {
    /// Entity id prefix for created records (e.g. `"hq"`).
    #[serde(default, rename = "id-prefix")]
    pub prefix: Option<String>,

    /// Actor identity for created records.
    #[serde(default)]
    pub actor: Option<String>,

    /// Board stage sequences.
    #[serde(default)]
    pub boards: BoardsConfig,

    /// Theme palette.
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl HqConfig {
    /// The id prefix, defaulting to `"hq"`.
    pub fn id_prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or("hq")
    }

    /// The validated task board stage sequence.
    pub fn task_stages(&self) -> Result<StageSet> {
        build_stage_set("tasks", &self.boards.tasks)
    }

    /// The validated content pipeline stage sequence.
    pub fn content_stages(&self) -> Result<StageSet> {
        build_stage_set("content", &self.boards.content)
    }
}

fn build_stage_set(board: &str, stages: &[Stage]) -> Result<StageSet> {
    StageSet::new(stages.to_vec()).map_err(|source| ConfigError::InvalidStages {
        board: board.to_owned(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load configuration from the given path.
///
/// If the file does not exist, a default [`HqConfig`] is returned.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file exists but cannot be
/// read, or [`ConfigError::ParseError`] if it contains invalid YAML.
pub fn load_config(path: &Path) -> Result<HqConfig> {
    if !path.exists() {
        return Ok(HqConfig::default());
    }

    let content = std::fs::read_to_string(path)?;

    // An empty file is valid and yields default config.
    if content.trim().is_empty() {
        return Ok(HqConfig::default());
    }

    let config: HqConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to the given path, creating parent directories.
pub fn save_config(path: &Path, config: &HqConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
