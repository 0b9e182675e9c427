//! Table builder.
//!
//! Turns the raw lines of one pipe-delimited table block into a [`Table`].
//! Separator rows and blank lines are dropped, the first remaining row is
//! the header, and every body row is fitted to the header's width.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for table separator (only contains |, -, :, spaces)
static TABLE_SEP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\s|:-]+$").unwrap());

/// A parsed table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Header cells
    pub header: Vec<String>,
    /// Body rows, each exactly `header.len()` cells wide
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.header.len()
    }

    /// Iterate over all rows, header first.
    pub fn all_rows(&self) -> impl Iterator<Item = &Vec<String>> {
        std::iter::once(&self.header).chain(self.rows.iter())
    }
}

/// Check if a line is a separator row such as `|---|:---:|`.
pub fn is_separator_row(line: &str) -> bool {
    TABLE_SEP_RE.is_match(line)
}

/// Split a table row into trimmed cells.
///
/// Only the empty cells produced by a leading or trailing pipe are
/// dropped; empty cells in between keep their position.
///
/// # Example
///
/// ```
/// use guidedoc_parser::table::split_row;
///
/// assert_eq!(split_row("| A | B |"), vec!["A", "B"]);
/// assert_eq!(split_row("| A |  | C |"), vec!["A", "", "C"]);
/// ```
pub fn split_row(line: &str) -> Vec<String> {
    let mut cells: Vec<String> = line.split('|').map(|cell| cell.trim().to_string()).collect();

    if cells.first().is_some_and(|cell| cell.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|cell| cell.is_empty()) {
        cells.pop();
    }

    cells
}

/// Build a table from the raw lines of one table block.
///
/// Returns `None` when no content row remains.
pub fn build_table<S: AsRef<str>>(lines: &[S]) -> Option<Table> {
    let mut rows = lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty() && !is_separator_row(line))
        .map(split_row)
        .filter(|cells| !cells.is_empty());

    let header = rows.next()?;
    let columns = header.len();

    let rows = rows
        .map(|mut cells| {
            cells.resize(columns, String::new());
            cells
        })
        .collect();

    Some(Table { header, rows })
}
