//! Configuration management for the board checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_LOG_LEVEL: &str = "warn";

/// How verdicts are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<path>: valid` per board
    #[default]
    Text,
    /// One JSON object per board
    Json,
}

/// Command-line arguments for the board checker
#[derive(Debug, Parser)]
#[command(name = "skyscraper-check")]
#[command(about = "Validate solved skyscraper puzzle boards")]
#[command(version)]
pub struct Args {
    /// Board files, one row per line
    #[arg(required = true)]
    pub boards: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, help = "Output format (text, json)")]
    pub format: Option<OutputFormat>,

    /// Config file to read instead of the default location
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Log level for the checker
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// Settings read from a config file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub log_level: Option<String>,
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Board files to check, in order
    pub boards: Vec<PathBuf>,
    pub format: OutputFormat,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(path) => FileConfig::load(&path)?,
                None => FileConfig::default(),
            },
        };

        Ok(Self::merge(args, file))
    }

    /// CLI flags win over file settings, which win over defaults
    pub fn merge(args: Args, file: FileConfig) -> Self {
        Config {
            boards: args.boards,
            format: args.format.or(file.format).unwrap_or_default(),
            log_level: args
                .log_level
                .or(file.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

/// `<config_dir>/skyscraper/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("skyscraper").join("config.toml"))
}
