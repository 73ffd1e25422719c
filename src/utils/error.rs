use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CiteError {
    #[error("Folder not found at {}", .path.display())]
    FolderNotFound { path: PathBuf },

    #[error("Not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("Input file not found at {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8 text: {}", .path.display())]
    InvalidEncoding { path: PathBuf },

    #[error("Citation pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Environment variable '{name}' referenced in config is not set")]
    MissingEnvVar { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    FileSystem,
    Configuration,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CiteError {
    /// Maps an `io::Error` raised while touching `path` to the matching variant.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => CiteError::FileNotFound { path },
            std::io::ErrorKind::InvalidData => CiteError::InvalidEncoding { path },
            _ => CiteError::Io { path, source },
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CiteError::FolderNotFound { .. }
            | CiteError::NotADirectory { .. }
            | CiteError::FileNotFound { .. }
            | CiteError::Io { .. } => ErrorCategory::FileSystem,
            CiteError::InvalidEncoding { .. } => ErrorCategory::Input,
            CiteError::ConfigError { .. }
            | CiteError::InvalidConfigValue { .. }
            | CiteError::MissingEnvVar { .. } => ErrorCategory::Configuration,
            CiteError::Pattern(_) | CiteError::Serialization(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::FileSystem => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CiteError::FolderNotFound { .. } => "Check the folder path passed on the command line or in the config file",
            CiteError::NotADirectory { .. } => "Point the tool at a directory, not a single file",
            CiteError::FileNotFound { .. } => "The file was removed during the run; re-run to pick up the current folder contents",
            CiteError::Io { .. } => "Check file permissions and free disk space",
            CiteError::InvalidEncoding { .. } => "Only UTF-8 text files can be cleaned; move binary files out of the folder",
            CiteError::Pattern(_) | CiteError::Serialization(_) => "This is a bug; please report it",
            CiteError::ConfigError { .. } | CiteError::InvalidConfigValue { .. } => {
                "Fix the configuration value and try again"
            }
            CiteError::MissingEnvVar { .. } => "Export the variable or remove the ${...} reference from the config",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CiteError::Io { path, source } => {
                format!("Error: could not access {}: {}", path.display(), source.kind())
            }
            other => format!("Error: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, CiteError>;
