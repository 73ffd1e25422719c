use crate::utils::error::{CiteError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub folder: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub suffix: Option<String>,
    pub dry_run: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CiteError::from_io(path, e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| CiteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` from the environment. Unset variables are an error.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}")?;

        let mut missing = None;
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let name = &caps[1];
            match std::env::var(name) {
                Ok(value) => value,
                Err(_) => {
                    missing.get_or_insert_with(|| name.to_string());
                    String::new()
                }
            }
        });

        match missing {
            Some(name) => Err(CiteError::MissingEnvVar { name }),
            None => Ok(result.into_owned()),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(folder) = &self.input.folder {
            validation::validate_path("input.folder", &folder.to_string_lossy())?;
        }
        if let Some(suffix) = &self.output.suffix {
            validation::validate_file_suffix("output.suffix", suffix)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[input]
folder = "/tmp/chapter1"

[output]
suffix = "_clean"
dry_run = true
"#,
        )
        .unwrap();

        assert_eq!(config.input.folder, Some(PathBuf::from("/tmp/chapter1")));
        assert_eq!(config.output.suffix.as_deref(), Some("_clean"));
        assert_eq!(config.output.dry_run, Some(true));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.input.folder.is_none());
        assert!(config.output.suffix.is_none());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("CITE_STRIP_TEST_ROOT", "/srv/notes");
        let config =
            TomlConfig::from_toml_str("[input]\nfolder = \"${CITE_STRIP_TEST_ROOT}/ch1\"\n").unwrap();
        assert_eq!(config.input.folder, Some(PathBuf::from("/srv/notes/ch1")));
    }

    #[test]
    fn test_missing_env_var_is_error() {
        let err = TomlConfig::from_toml_str("[input]\nfolder = \"${CITE_STRIP_SURELY_UNSET_VAR}\"\n")
            .unwrap_err();
        assert!(matches!(err, CiteError::MissingEnvVar { name } if name == "CITE_STRIP_SURELY_UNSET_VAR"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = TomlConfig::from_toml_str("[output]\nformat = \"zip\"\n").unwrap_err();
        assert!(matches!(err, CiteError::ConfigError { .. }));
    }

    #[test]
    fn test_invalid_suffix_fails_validation() {
        let config = TomlConfig::from_toml_str("[output]\nsuffix = \"a/b\"\n").unwrap();
        assert!(config.validate().is_err());
    }
}
