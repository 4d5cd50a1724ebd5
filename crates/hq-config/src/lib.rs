//! Configuration management for the hq mission-control system.

pub mod config;

pub use config::{BoardsConfig, ConfigError, HqConfig, ThemeConfig, load_config, save_config};
