use crate::render::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "modscout", version, about = "Audits dependency jars for JPMS modularization progress")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the modularization report for a resolved dependency tree
    Report {
        /// Dependency tree JSON, as exported by the build tool
        #[arg(long, value_name = "FILE")]
        tree: PathBuf,
        /// Root of the local artifact repository
        #[arg(long, value_name = "DIR")]
        repository: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
        /// Write to a file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Keep only these dependency scopes (repeatable); empty keeps all
        #[arg(long, value_name = "SCOPE")]
        scope: Vec<String>,
        /// Print the summary counters to stderr
        #[arg(long, short)]
        summary: bool,
    },
    /// Classify a single jar archive
    Inspect {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}
