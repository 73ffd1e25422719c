use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const DEFAULT_SUFFIX: &str = "_cleaned";

/// True when the file stem already carries `marker`, i.e. the file is output
/// from an earlier run.
pub fn is_cleaned(path: &Path, marker: &str) -> bool {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().contains(marker))
        .unwrap_or(false)
}

/// `dir/name.ext` -> `dir/name<suffix>.ext`. Only the last extension moves.
pub fn cleaned_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::new();
    if let Some(stem) = path.file_stem() {
        name.push(stem);
    }
    name.push(suffix);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleaned_path_inserts_before_extension() {
        assert_eq!(
            cleaned_path(Path::new("/docs/intro.md"), DEFAULT_SUFFIX),
            PathBuf::from("/docs/intro_cleaned.md")
        );
        assert_eq!(
            cleaned_path(Path::new("/docs/archive.tar.gz"), DEFAULT_SUFFIX),
            PathBuf::from("/docs/archive.tar_cleaned.gz")
        );
    }

    #[test]
    fn test_cleaned_path_without_extension() {
        assert_eq!(
            cleaned_path(Path::new("notes"), DEFAULT_SUFFIX),
            PathBuf::from("notes_cleaned")
        );
        assert_eq!(
            cleaned_path(Path::new("dir/.hidden"), "_x"),
            PathBuf::from("dir/.hidden_x")
        );
    }

    #[test]
    fn test_is_cleaned() {
        assert!(is_cleaned(Path::new("intro_cleaned.md"), DEFAULT_SUFFIX));
        assert!(is_cleaned(Path::new("intro_cleaned_cleaned.md"), DEFAULT_SUFFIX));
        assert!(is_cleaned(Path::new("my_cleaned_notes.txt"), DEFAULT_SUFFIX));
        assert!(!is_cleaned(Path::new("intro.md"), DEFAULT_SUFFIX));
        // Only the stem counts, not the extension.
        assert!(!is_cleaned(Path::new("intro.md_cleaned"), DEFAULT_SUFFIX));
    }
}
