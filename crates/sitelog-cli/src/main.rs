//! sitelog CLI entry point.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.execute() {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn init_logging(debug: bool) {
    let result = if debug {
        sitelog_core::log::init_with_filter("sitelog_core=debug,sitelog=debug")
    } else {
        sitelog_core::log::init_default()
    };
    // A subscriber may already be installed when embedded in a test harness.
    result.ok();
}
