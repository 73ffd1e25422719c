use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub trait Storage {
    /// Fails with `FolderNotFound` or `NotADirectory` when `path` is unusable.
    fn check_dir(&self, path: &Path) -> Result<()>;
    /// Regular files directly under `dir`, sorted by path.
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;
    fn read_text(&self, path: &Path) -> Result<String>;
    fn write_text(&self, path: &Path, content: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn folder(&self) -> &Path;
    fn suffix(&self) -> &str;
    fn dry_run(&self) -> bool;
}

pub trait TextCleaner {
    /// Returns the cleaned text and how many markers were removed.
    fn clean(&self, text: &str) -> (String, usize);
    fn describe(&self) -> &str;
}
