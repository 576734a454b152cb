//! Closing tag normalization.
//!
//! Two passes run in order over the full text: the literal `</s>` tag first,
//! then any closing tag whose name is a single word character. Both rewrite to
//! the canonical `</System>` tag. Opening tags are never touched.

use regex::Regex;
use std::sync::OnceLock;

/// The tag every malformed closing tag is rewritten to.
pub const CANONICAL_CLOSING_TAG: &str = "</System>";

/// The short closing tag the first pass targets literally.
pub const SHORT_CLOSING_TAG: &str = "</s>";

fn single_char_tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"</[\p{L}\p{N}_]>").unwrap())
}

/// Result of running both passes over a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosingTagFix {
    pub content: String,
    pub literal_replacements: usize,
    pub single_char_replacements: usize,
}

impl ClosingTagFix {
    /// Total number of tags rewritten across both passes.
    pub fn replacements(&self) -> usize {
        self.literal_replacements + self.single_char_replacements
    }
}

/// Rewrite every `</s>` to the canonical closing tag.
pub fn replace_literal_short_tag(text: &str) -> (String, usize) {
    let count = text.matches(SHORT_CLOSING_TAG).count();
    if count == 0 {
        return (text.to_string(), 0);
    }

    (text.replace(SHORT_CLOSING_TAG, CANONICAL_CLOSING_TAG), count)
}

/// Rewrite every closing tag with a one-character word name (`</x>`, `</1>`,
/// `</_>`, `</é>`, `</½>`) to the canonical closing tag.
///
/// A word character is any Unicode letter or number, or `_`. Combining marks
/// and connector punctuation other than `_` do not count.
pub fn replace_single_char_tags(text: &str) -> (String, usize) {
    let regex = single_char_tag_regex();
    let count = regex.find_iter(text).count();
    if count == 0 {
        return (text.to_string(), 0);
    }

    let rewritten = regex.replace_all(text, CANONICAL_CLOSING_TAG).into_owned();
    (rewritten, count)
}

/// Run the literal pass, then the single-character pass on its output.
pub fn fix_closing_tags(text: &str) -> ClosingTagFix {
    let (after_literal, literal_replacements) = replace_literal_short_tag(text);
    let (content, single_char_replacements) = replace_single_char_tags(&after_literal);

    ClosingTagFix {
        content,
        literal_replacements,
        single_char_replacements,
    }
}
