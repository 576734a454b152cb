use clap::Parser;
use tagfix::application::fix_tags;
use tagfix::cli::{format_report, Cli};
use tagfix::error::TagFixError;
use tagfix::logging::init_logging;

fn main() {
    Cli::parse();
    init_logging();

    match run() {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run() -> Result<(), TagFixError> {
    let report = fix_tags()?;
    println!("{}", format_report(&report));
    Ok(())
}
