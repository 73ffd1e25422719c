use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A file read whole from the input folder.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub content: String,
}

/// The cleaned counterpart of a [`SourceDocument`].
#[derive(Debug, Clone)]
pub struct CleanedDocument {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
    pub content: String,
    pub citations_removed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub citations_removed: usize,
    pub written: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Cleaned(FileReport),
    Skipped { path: PathBuf },
    Failed(FileFailure),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub folder: PathBuf,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub pattern: String,
    pub dry_run: bool,
    pub discovered: usize,
    pub skipped: Vec<PathBuf>,
    pub cleaned: Vec<FileReport>,
    pub failed: Vec<FileFailure>,
}

impl RunSummary {
    pub fn new(folder: PathBuf, pattern: String, dry_run: bool) -> Self {
        let now = Utc::now();
        Self {
            folder,
            started_at: now,
            finished_at: now,
            pattern,
            dry_run,
            discovered: 0,
            skipped: Vec::new(),
            cleaned: Vec::new(),
            failed: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Cleaned(report) => self.cleaned.push(report),
            FileOutcome::Skipped { path } => self.skipped.push(path),
            FileOutcome::Failed(failure) => self.failed.push(failure),
        }
    }

    pub fn total_citations_removed(&self) -> usize {
        self.cleaned.iter().map(|r| r.citations_removed).sum()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
