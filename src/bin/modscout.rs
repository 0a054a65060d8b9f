// src/bin/modscout.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use modscout_core::cli::{self, Cli, Commands, ReportArgs};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Report {
            tree,
            repository,
            format,
            output,
            scope,
            summary,
        } => {
            cli::handle_report(&ReportArgs {
                tree,
                repository,
                format,
                output,
                scope,
                summary,
            })?;
            Ok(())
        }
        Commands::Inspect { file } => {
            cli::handle_inspect(&file)?;
            Ok(())
        }
    }
}
