//! Table layout.
//!
//! Cells are written as raw text unless cell formatting is enabled, in
//! which case each cell goes through the inline formatter. The header row
//! is always bold.

use crate::sink::{RunSpec, TableSpec};
use crate::text::styled_runs;
use guidedoc_config::ComputedStyle;
use guidedoc_parser::{format_inline, Table};

/// Runs of a single cell.
fn cell_runs(text: &str, header: bool, format_cells: bool, style: &ComputedStyle) -> Vec<RunSpec> {
    let runs = if format_cells {
        styled_runs(&format_inline(text), style)
    } else if text.is_empty() {
        Vec::new()
    } else {
        vec![RunSpec::plain(text)]
    };

    if !header {
        return runs;
    }
    runs.into_iter()
        .map(|run| RunSpec::new(run.text, run.style.bolded()))
        .collect()
}

/// Lay out a parsed table for the sink.
pub fn table_spec(table: &Table, style: &ComputedStyle, format_cells: bool) -> TableSpec {
    let rows = table
        .all_rows()
        .enumerate()
        .map(|(index, row)| {
            row.iter()
                .map(|cell| cell_runs(cell, index == 0, format_cells, style))
                .collect()
        })
        .collect();

    TableSpec {
        style: style.table_style.clone(),
        columns: table.columns(),
        rows,
    }
}
