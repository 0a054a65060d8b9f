// src/render/html.rs
use crate::error::Result;
use crate::report::{Report, ReportEntry};
use crate::status::ModularizationStatus;
use std::io::Write;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em; }\n\
table { border-collapse: collapse; margin-bottom: 2em; }\n\
td, th { border: 1px solid #ccc; padding: 0.3em 0.8em; text-align: left; }\n\
.status-full { background: #d4edc9; }\n\
.status-auto { background: #fdf4c4; }\n\
.status-none { background: #f8d3d0; }\n\
.status-notjar { background: #e3e3e3; }\n\
.status-unavailable { background: #e3d0f0; }\n";

/// Writes the report as a self-contained HTML page: a summary table followed
/// by one row per dependency, leaf dependencies first.
///
/// # Errors
///
/// Returns I/O errors from the writer.
pub fn write_html<W: Write>(report: &Report, writer: &mut W) -> Result<()> {
    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, "<html><head>")?;
    writeln!(writer, "<meta charset=\"utf-8\"/>")?;
    writeln!(writer, "<title>Modularization report</title>")?;
    writeln!(writer, "<style>{STYLE}</style>")?;
    writeln!(writer, "</head><body>")?;
    // the unique in-degree-zero vertex is the audited project itself
    match report.graph().root() {
        Some(root) => writeln!(
            writer,
            "<h1>Modularization report for {}:{}</h1>",
            escape(root.group()),
            escape(root.artifact())
        )?,
        None => writeln!(writer, "<h1>Modularization report</h1>")?,
    }

    write_summary(report, writer)?;
    write_dependencies(report, writer)?;

    writeln!(writer, "</body></html>")?;
    writer.flush()?;
    Ok(())
}

fn write_summary<W: Write>(report: &Report, writer: &mut W) -> Result<()> {
    writeln!(writer, "<h2>Summary</h2>")?;
    writeln!(writer, "<table>")?;
    summary_row(writer, "Dependencies", report.dependencies_total())?;
    summary_row(
        writer,
        "Fully modularized",
        report.dependencies_fully_modularized(),
    )?;
    summary_row(writer, "Automatic module names", report.dependencies_named())?;
    summary_row(
        writer,
        "Not modularized",
        report.dependencies_not_modularized(),
    )?;
    writeln!(writer, "</table>")?;
    Ok(())
}

fn summary_row<W: Write>(writer: &mut W, label: &str, count: usize) -> Result<()> {
    writeln!(writer, "<tr><th>{label}</th><td>{count}</td></tr>")?;
    Ok(())
}

fn write_dependencies<W: Write>(report: &Report, writer: &mut W) -> Result<()> {
    writeln!(writer, "<h2>Dependencies</h2>")?;
    writeln!(writer, "<table>")?;
    writeln!(
        writer,
        "<tr><th>Dependency</th><th>Current</th><th>Latest</th></tr>"
    )?;

    for node in report.graph().dependency_order() {
        let Some(entry) = report.entry(node) else {
            continue;
        };
        writeln!(
            writer,
            "<tr><td id=\"{}\">{}</td>",
            escape(&node.to_terse_string()),
            escape(&format!("{}:{}", node.group(), node.artifact())),
        )?;
        match entry {
            ReportEntry::Ok {
                current, highest, ..
            } => {
                status_cell(writer, current)?;
                status_cell(writer, highest)?;
            }
            ReportEntry::Error { error, .. } => {
                writeln!(
                    writer,
                    "<td class=\"status-unavailable\" colspan=\"2\">could not be checked: {}</td>",
                    escape(error)
                )?;
            }
        }
        writeln!(writer, "</tr>")?;
    }

    writeln!(writer, "</table>")?;
    Ok(())
}

fn status_cell<W: Write>(writer: &mut W, status: &ModularizationStatus) -> Result<()> {
    writeln!(
        writer,
        "<td class=\"{}\">{}</td>",
        status_class(status),
        escape(&status.to_string())
    )?;
    Ok(())
}

fn status_class(status: &ModularizationStatus) -> &'static str {
    match status {
        ModularizationStatus::FullyModularized { .. } => "status-full",
        ModularizationStatus::AutomaticModuleName { .. } => "status-auto",
        ModularizationStatus::NotModularized { .. } => "status-none",
        ModularizationStatus::NotArchive { .. } => "status-notjar",
        ModularizationStatus::Unavailable { .. } => "status-unavailable",
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
