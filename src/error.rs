//! Error types for tagfix

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tagfix
#[derive(Debug, Error)]
pub enum TagFixError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("File is not valid UTF-8 text: {0}")]
    Encoding(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TagFixError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagFixError::NotFound(_) => 2,
            TagFixError::Encoding(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagFixError::NotFound(path) => {
                format!(
                    "File not found: {}\n\n\
                    Suggestions:\n\
                    • Run tagfix from the directory that contains the file\n\
                    • Check that the file has not been renamed or moved",
                    path.display()
                )
            }
            TagFixError::Encoding(path) => {
                format!(
                    "File is not valid UTF-8 text: {}\n\n\
                    The file was left unchanged.",
                    path.display()
                )
            }
            TagFixError::Write { path, source } => {
                format!(
                    "Failed to write {}: {}\n\n\
                    The file may be partially written. Restore it from version control \
                    before running tagfix again.",
                    path.display(),
                    source
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagFixError
pub type Result<T> = std::result::Result<T, TagFixError>;
