//! The file being fixed

use crate::error::{Result, TagFixError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default target, resolved against the working directory.
pub const DEFAULT_TARGET: &str = "test_xmlvalidator.cpp";

/// A text file read whole and overwritten in place
#[derive(Debug, Clone)]
pub struct TargetFile {
    path: PathBuf,
}

impl TargetFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TargetFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name used in user-facing messages (falls back to the full path)
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Read the whole file as UTF-8 text.
    pub fn read(&self) -> Result<String> {
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => TagFixError::NotFound(self.path.clone()),
            ErrorKind::InvalidData => TagFixError::Encoding(self.path.clone()),
            _ => TagFixError::Read {
                path: self.path.clone(),
                source: e,
            },
        })?;

        debug!(path = %self.path.display(), bytes = content.len(), "read target file");
        Ok(content)
    }

    /// Overwrite the file in place.
    ///
    /// This is a plain truncate-and-write, not an atomic replace: a failure
    /// halfway through can leave the file partially written.
    pub fn write(&self, content: &str) -> Result<()> {
        fs::write(&self.path, content).map_err(|e| TagFixError::Write {
            path: self.path.clone(),
            source: e,
        })?;

        debug!(path = %self.path.display(), bytes = content.len(), "wrote target file");
        Ok(())
    }
}

impl Default for TargetFile {
    fn default() -> Self {
        TargetFile::new(DEFAULT_TARGET)
    }
}
