use crate::core::naming;
use crate::domain::model::{
    CleanedDocument, FileFailure, FileOutcome, FileReport, RunSummary, SourceDocument,
};
use crate::domain::ports::{ConfigProvider, Storage, TextCleaner};
use crate::utils::error::Result;
use chrono::Utc;
use std::path::Path;

/// Cleans every top-level file of one folder, writing `<stem><suffix>.<ext>`
/// next to each input.
pub struct FolderProcessor<S: Storage, C: ConfigProvider, T: TextCleaner> {
    storage: S,
    config: C,
    cleaner: T,
}

impl<S: Storage, C: ConfigProvider, T: TextCleaner> FolderProcessor<S, C, T> {
    pub fn new(storage: S, config: C, cleaner: T) -> Self {
        Self {
            storage,
            config,
            cleaner,
        }
    }

    /// Runs one pass over the folder. Only folder-level problems are returned
    /// as errors; per-file failures land in the summary.
    pub fn run(&self) -> Result<RunSummary> {
        let folder = self.config.folder();
        let mut summary = RunSummary::new(
            folder.to_path_buf(),
            self.cleaner.describe().to_string(),
            self.config.dry_run(),
        );

        self.storage.check_dir(folder)?;
        let files = self.storage.list_files(folder)?;
        summary.discovered = files.len();

        if files.is_empty() {
            tracing::warn!("No files found in {}", folder.display());
            summary.finished_at = Utc::now();
            return Ok(summary);
        }

        tracing::info!("Found {} files in {}", files.len(), folder.display());

        for path in &files {
            let outcome = self.process_file(path);
            summary.record(outcome);
        }

        summary.finished_at = Utc::now();

        tracing::info!(
            "Processed {} files in {} ({} skipped, {} failed, {} citations removed)",
            summary.cleaned.len(),
            folder.display(),
            summary.skipped.len(),
            summary.failed.len(),
            summary.total_citations_removed()
        );
        tracing::info!("Regex used: {}", summary.pattern);

        Ok(summary)
    }

    pub fn process_file(&self, path: &Path) -> FileOutcome {
        if naming::is_cleaned(path, self.config.suffix()) {
            tracing::debug!("Skipping already cleaned file {}", path.display());
            return FileOutcome::Skipped {
                path: path.to_path_buf(),
            };
        }

        match self.clean_file(path) {
            Ok(report) => FileOutcome::Cleaned(report),
            Err(e) => {
                tracing::error!("An error occurred processing {}: {}", path.display(), e);
                FileOutcome::Failed(FileFailure {
                    path: path.to_path_buf(),
                    error: e.to_string(),
                })
            }
        }
    }

    fn clean_file(&self, path: &Path) -> Result<FileReport> {
        let source = SourceDocument {
            path: path.to_path_buf(),
            content: self.storage.read_text(path)?,
        };

        let cleaned = self.transform(source);

        if self.config.dry_run() {
            tracing::info!(
                "[dry run] Would write {} ({} citations removed)",
                cleaned.output_path.display(),
                cleaned.citations_removed
            );
        } else {
            self.storage
                .write_text(&cleaned.output_path, &cleaned.content)?;
            tracing::info!(
                "Cleaned content written to {} ({} citations removed)",
                cleaned.output_path.display(),
                cleaned.citations_removed
            );
        }

        Ok(FileReport {
            source: cleaned.source_path,
            output: cleaned.output_path,
            citations_removed: cleaned.citations_removed,
            written: !self.config.dry_run(),
        })
    }

    fn transform(&self, source: SourceDocument) -> CleanedDocument {
        let (content, citations_removed) = self.cleaner.clean(&source.content);
        CleanedDocument {
            output_path: naming::cleaned_path(&source.path, self.config.suffix()),
            source_path: source.path,
            content,
            citations_removed,
        }
    }
}
