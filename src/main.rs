//! packctl - installer-driven deployment packaging
//!
//! A command line tool that reads the property table of a Windows Installer
//! package and creates the matching application, deployment type and folder
//! placement in a systems-management catalog, optionally distributing the
//! content to a distribution point group.

use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod error;
mod installer;
mod operations;
mod progress;

use cli::{Cli, Commands};
use commands::Globals;

fn main() {
    let cli = Cli::parse();
    let globals = Globals::from(&cli);

    let result = match cli.command {
        Commands::Deploy(args) => commands::deploy::run(globals, args),
        Commands::Inspect(args) => commands::inspect::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
