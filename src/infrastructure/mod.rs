//! Infrastructure layer - File I/O

pub mod target_file;

pub use target_file::{TargetFile, DEFAULT_TARGET};
