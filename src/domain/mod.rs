//! Domain layer - Pure text transforms

pub mod closing_tags;

pub use closing_tags::{
    fix_closing_tags, replace_literal_short_tag, replace_single_char_tags, ClosingTagFix,
    CANONICAL_CLOSING_TAG,
};
