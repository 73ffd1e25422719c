use crate::utils::error::{CiteError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CiteError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CiteError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CiteError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// The suffix becomes part of a file name in the same folder.
pub fn validate_file_suffix(field_name: &str, suffix: &str) -> Result<()> {
    validate_non_empty_string(field_name, suffix)?;

    if suffix.contains(['/', '\\', '\0']) {
        return Err(CiteError::InvalidConfigValue {
            field: field_name.to_string(),
            value: suffix.to_string(),
            reason: "Suffix cannot contain path separators or null bytes".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("folder", "./docs").is_ok());
        assert!(validate_path("folder", "").is_err());
        assert!(validate_path("folder", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_suffix() {
        assert!(validate_file_suffix("suffix", "_cleaned").is_ok());
        assert!(validate_file_suffix("suffix", "  ").is_err());
        assert!(validate_file_suffix("suffix", "../x").is_err());
        assert!(validate_file_suffix("suffix", "a\\b").is_err());
    }
}
