// src/render/mod.rs
//! Renderers over a finished report. All of them walk the graph leaves
//! first, so the dependencies blocking nothing come at the top.

pub mod html;
pub mod json;
pub mod plain;

use crate::error::Result;
use crate::report::Report;
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Html,
    Json,
}

/// Renders the report in the requested format.
pub fn write_report<W: Write>(format: OutputFormat, report: &Report, writer: &mut W) -> Result<()> {
    match format {
        OutputFormat::Plain => plain::write_plain(report, writer),
        OutputFormat::Html => html::write_html(report, writer),
        OutputFormat::Json => json::write_json(report, writer),
    }
}
