//! Fix closing tags use case

use crate::domain::fix_closing_tags;
use crate::error::Result;
use crate::infrastructure::TargetFile;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixReport {
    pub file_name: String,
    pub literal_replacements: usize,
    pub single_char_replacements: usize,
}

impl FixReport {
    pub fn replacements(&self) -> usize {
        self.literal_replacements + self.single_char_replacements
    }
}

/// Fix `test_xmlvalidator.cpp` in the working directory.
pub fn fix_tags() -> Result<FixReport> {
    fix_target(&TargetFile::default())
}

/// Read the target, run both passes and write the result back.
///
/// The file is rewritten even when nothing matched; the content is then
/// unchanged byte for byte.
pub fn fix_target(target: &TargetFile) -> Result<FixReport> {
    let content = target.read()?;

    let fix = fix_closing_tags(&content);
    debug!(
        literal = fix.literal_replacements,
        single_char = fix.single_char_replacements,
        "applied closing tag passes"
    );

    target.write(&fix.content)?;

    info!(
        path = %target.path().display(),
        replacements = fix.replacements(),
        "closing tags processed"
    );

    Ok(FixReport {
        file_name: target.display_name(),
        literal_replacements: fix.literal_replacements,
        single_char_replacements: fix.single_char_replacements,
    })
}
