pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, ProcessorConfig};
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{citation::CitationStripper, processor::FolderProcessor};
pub use domain::model::RunSummary;
pub use utils::error::{CiteError, Result};
