//! tagfix - Closing tag repair for XML fixtures
//!
//! Rewrites malformed single-character XML closing tags (`</s>`, `</x>`, ...)
//! in a source file to the canonical `</System>` tag, in place.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::TagFixError;
