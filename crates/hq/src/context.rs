//! Runtime context shared by all commands.

use std::path::PathBuf;

use anyhow::Context as _;

use hq_config::{HqConfig, load_config};
use hq_store::HqWorkspace;

use crate::cli::GlobalArgs;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "hq.yaml";

/// Everything a command needs beyond its own arguments: the loaded
/// configuration and the output mode.
pub struct RuntimeContext {
    pub config: HqConfig,
    pub json: bool,
}

impl RuntimeContext {
    pub fn from_global_args(args: &GlobalArgs) -> anyhow::Result<Self> {
        let path: PathBuf = args
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        let config = load_config(&path)
            .with_context(|| format!("loading config from {}", path.display()))?;
        tracing::debug!(path = %path.display(), "configuration loaded");

        Ok(Self {
            config,
            json: args.json,
        })
    }

    /// The working dataset.
    ///
    /// There is no persistence layer; every invocation starts from the
    /// seed snapshot and edits live for the lifetime of the process.
    pub fn workspace(&self) -> HqWorkspace {
        HqWorkspace::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let args = GlobalArgs {
            config: Some(PathBuf::from("/nonexistent/hq.yaml")),
            json: false,
            verbose: false,
        };
        let ctx = RuntimeContext::from_global_args(&args).unwrap();
        assert_eq!(ctx.config.id_prefix(), "hq");
        assert!(!ctx.json);
    }
}
