//! CLI command definitions

use clap::Parser;

/// Takes no arguments; the target file is always `test_xmlvalidator.cpp`.
#[derive(Parser, Debug)]
#[command(name = "tagfix")]
#[command(
    about = "Rewrite malformed single-character XML closing tags in test_xmlvalidator.cpp to </System>",
    long_about = None
)]
#[command(version)]
pub struct Cli {}
