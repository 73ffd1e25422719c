pub mod cli;
pub mod toml_config;

use crate::core::naming::DEFAULT_SUFFIX;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// Folder cleaned when neither the command line nor a config file names one.
pub const DEFAULT_FOLDER: &str = "./docs";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cite-strip")]
#[command(about = "Strip stray footnote digits (\"sentence.1 \") from text files in a folder")]
pub struct CliConfig {
    /// Folder whose top-level files are cleaned
    pub folder: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Suffix added before the extension of each output file
    #[arg(long)]
    pub suffix: Option<String>,

    /// Show what would be written without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Command line values win over the config file, which wins over defaults.
    pub fn resolve(&self) -> Result<ProcessorConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => TomlConfig::default(),
        };

        let mut resolved = ProcessorConfig::from_toml(&file);
        if let Some(folder) = &self.folder {
            resolved.folder = folder.clone();
        }
        if let Some(suffix) = &self.suffix {
            resolved.suffix = suffix.clone();
        }
        resolved.dry_run |= self.dry_run;

        resolved.validate()?;
        Ok(resolved)
    }
}

/// Final settings handed to the folder processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    pub folder: PathBuf,
    pub suffix: String,
    pub dry_run: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from(DEFAULT_FOLDER),
            suffix: DEFAULT_SUFFIX.to_string(),
            dry_run: false,
        }
    }
}

impl ProcessorConfig {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            ..Self::default()
        }
    }

    pub fn from_toml(config: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            folder: config.input.folder.clone().unwrap_or(defaults.folder),
            suffix: config.output.suffix.clone().unwrap_or(defaults.suffix),
            dry_run: config.output.dry_run.unwrap_or(defaults.dry_run),
        }
    }
}

impl Validate for ProcessorConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("folder", &self.folder.to_string_lossy())?;
        validation::validate_file_suffix("suffix", &self.suffix)?;
        Ok(())
    }
}

impl ConfigProvider for ProcessorConfig {
    fn folder(&self) -> &Path {
        &self.folder
    }

    fn suffix(&self) -> &str {
        &self.suffix
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}
