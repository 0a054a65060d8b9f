// src/render/plain.rs
use crate::error::Result;
use crate::report::{Report, ReportEntry};
use std::io::Write;

/// Writes one line per dependency, leaf dependencies first.
///
/// # Errors
///
/// Returns I/O errors from the writer.
pub fn write_plain<W: Write>(report: &Report, writer: &mut W) -> Result<()> {
    for node in report.graph().dependency_order() {
        // Coverage is total, so the lookup cannot miss.
        let Some(entry) = report.entry(node) else {
            continue;
        };

        write!(writer, "{}:{} ", node.group(), node.artifact())?;
        match entry {
            ReportEntry::Ok {
                current, highest, ..
            } => {
                writeln!(writer, "current {current}, latest {highest}")?;
            }
            ReportEntry::Error { error, .. } => {
                writeln!(writer, "could not be checked: {error}")?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
