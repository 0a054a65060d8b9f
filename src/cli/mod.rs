// src/cli/mod.rs
pub mod args;

pub use args::{Cli, Commands};

use crate::error::{Result, ScoutError};
use crate::graph::DependencyGraph;
use crate::inspect::JarArchive;
use crate::render::{self, OutputFormat};
use crate::report::{build_report, Report};
use crate::resolver::RepositoryResolver;
use crate::tree::TreeNode;
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct ReportArgs {
    pub tree: PathBuf,
    pub repository: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub scope: Vec<String>,
    pub summary: bool,
}

/// Loads the tree, builds the graph and report, and renders it.
pub fn handle_report(args: &ReportArgs) -> Result<()> {
    let tree = TreeNode::load(&args.tree)?.retain_scopes(&args.scope);
    let graph = DependencyGraph::from_tree(&tree)?;
    let resolver = RepositoryResolver::new(&args.repository);
    let report = build_report(&resolver, &graph);

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| ScoutError::io(e, path))?;
            let mut writer = BufWriter::new(file);
            render::write_report(args.format, &report, &mut writer)?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            render::write_report(args.format, &report, &mut writer)?;
        }
    }

    if args.summary {
        write_summary(&report, &mut io::stderr().lock())?;
    }
    Ok(())
}

/// Classifies a single archive and prints the result.
pub fn handle_inspect(file: &Path) -> Result<()> {
    if !JarArchive::probe(file) {
        println!("{} is not a jar archive", file.display());
        return Ok(());
    }

    let mut jar = JarArchive::open(file)?;
    match jar.module_name()? {
        Some(module) if module.is_automatic() => {
            println!(
                "{} is named automatic module '{}'",
                file.display(),
                module.name()
            );
        }
        Some(module) => {
            println!(
                "{} is fully modularized as '{}'",
                file.display(),
                module.name()
            );
        }
        None => println!("{} is not modularized", file.display()),
    }
    Ok(())
}

fn write_summary<W: Write>(report: &Report, writer: &mut W) -> Result<()> {
    writeln!(
        writer,
        "{} {}",
        "dependencies:".bold(),
        report.dependencies_total()
    )?;
    writeln!(
        writer,
        "{} {}",
        "fully modularized:".green().bold(),
        report.dependencies_fully_modularized()
    )?;
    writeln!(
        writer,
        "{} {}",
        "automatic module names:".yellow().bold(),
        report.dependencies_named()
    )?;
    writeln!(
        writer,
        "{} {}",
        "not modularized:".red().bold(),
        report.dependencies_not_modularized()
    )?;
    Ok(())
}
