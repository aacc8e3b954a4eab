//! Rendering of fetched registry records
//!
//! Every command funnels its display rows through [`print_rows`] or
//! [`print_one`]. Table output is for operators at a terminal, JSON
//! output is the scripting surface: rows wrapped in a `{data, meta}`
//! envelope carrying the render timestamp and CLI version, so piped
//! snapshots stay attributable.

pub mod formatters;

use chrono::Utc;
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::cli::OutputFormat;
use crate::error::Result;

/// Shown instead of a table when a list command matches nothing
const EMPTY_NOTICE: &str = "No results found.";

/// Print display rows in the requested format.
pub fn print_rows<D: Tabled + Serialize>(rows: &[D], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_table(rows)),
        OutputFormat::Json => println!("{}", render_json(rows)?),
    }
    Ok(())
}

/// Print a single record as a one-row table or a JSON object.
pub fn print_one<D: Tabled + Serialize>(row: &D, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_table(std::slice::from_ref(row))),
        OutputFormat::Json => println!("{}", render_json(row)?),
    }
    Ok(())
}

/// Rounded-border table with a centered header row.
fn render_table<D: Tabled>(rows: &[D]) -> String {
    if rows.is_empty() {
        return EMPTY_NOTICE.to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn render_json<D: Serialize + ?Sized>(rows: &D) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Envelope::wrap(rows))?)
}

/// The `{data, meta}` wire shape of all JSON output
#[derive(Debug, Serialize)]
struct Envelope<'a, D: ?Sized> {
    data: &'a D,
    meta: Meta,
}

#[derive(Debug, Serialize)]
struct Meta {
    timestamp: String,
    version: String,
}

impl<'a, D: Serialize + ?Sized> Envelope<'a, D> {
    fn wrap(data: &'a D) -> Self {
        Self {
            data,
            meta: Meta {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}
