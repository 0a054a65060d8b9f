// src/render/json.rs
use crate::coordinates::DependencyNode;
use crate::error::Result;
use crate::report::Report;
use crate::status::ModularizationStatus;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonReport<'a> {
    dependencies_total: usize,
    dependencies_fully_modularized: usize,
    dependencies_named: usize,
    dependencies_not_modularized: usize,
    dependencies: Vec<JsonRow<'a>>,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    #[serde(flatten)]
    node: &'a DependencyNode,
    #[serde(skip_serializing_if = "Option::is_none")]
    current: Option<&'a ModularizationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    highest: Option<&'a ModularizationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// Writes the report as a machine-readable JSON document, rows in leaves
/// first order.
///
/// # Errors
///
/// Returns serialization or writer I/O errors.
pub fn write_json<W: Write>(report: &Report, writer: &mut W) -> Result<()> {
    let rows = report
        .graph()
        .dependency_order()
        .into_iter()
        .filter_map(|node| report.entry(node))
        .map(|entry| JsonRow {
            node: entry.node(),
            current: entry.current_status(),
            highest: entry.highest_status(),
            error: entry.error(),
        })
        .collect();

    let doc = JsonReport {
        dependencies_total: report.dependencies_total(),
        dependencies_fully_modularized: report.dependencies_fully_modularized(),
        dependencies_named: report.dependencies_named(),
        dependencies_not_modularized: report.dependencies_not_modularized(),
        dependencies: rows,
    };

    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writeln!(writer)?;
    Ok(())
}
