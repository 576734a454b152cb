//! Application layer - Use cases and orchestration

pub mod fix_tags;

pub use fix_tags::{fix_tags, fix_target, FixReport};
