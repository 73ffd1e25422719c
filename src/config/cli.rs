use crate::core::Storage;
use crate::utils::error::{CiteError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Plain filesystem storage; paths are used as given.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn check_dir(&self, path: &Path) -> Result<()> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(CiteError::NotADirectory {
                path: path.to_path_buf(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(CiteError::FolderNotFound {
                path: path.to_path_buf(),
            }),
            Err(e) => Err(CiteError::from_io(path, e)),
        }
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| CiteError::from_io(dir, e))? {
            let entry = entry.map_err(|e| CiteError::from_io(dir, e))?;
            let path = entry.path();
            // Follows symlinks, so a link to a regular file is processed too.
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| CiteError::from_io(path, e))
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(|e| CiteError::from_io(path, e))
    }
}
