//! Parse state for one conversion pass.
//!
//! The [`ParseState`] struct owns the line cursor and the current
//! [`ParserMode`]. Mode transitions go through its methods so that the
//! buffered lines of a block are always handed back exactly once.

use crate::enums::ParserMode;
use log::trace;

/// Cursor and block-accumulation state of the classifier.
///
/// # Example
///
/// ```
/// use guidedoc_core::ParseState;
///
/// let mut state = ParseState::new();
/// state.enter_code_block();
/// state.push_code_line("let x = 1;");
/// assert_eq!(state.exit_code_block(), vec!["let x = 1;".to_string()]);
/// assert!(state.mode().is_normal());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParseState {
    /// Index of the next line to classify
    cursor: usize,
    /// Current block-accumulation mode
    mode: ParserMode,
}

impl ParseState {
    /// Create a new ParseState positioned at the first line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the next line to classify.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Advance the cursor by one line.
    ///
    /// Returns the index of the line that was just consumed.
    pub fn advance(&mut self) -> usize {
        let index = self.cursor;
        self.cursor += 1;
        index
    }

    /// The current mode.
    pub fn mode(&self) -> &ParserMode {
        &self.mode
    }

    /// Check if currently inside a fenced code block.
    pub fn is_in_code(&self) -> bool {
        matches!(self.mode, ParserMode::InCodeBlock { .. })
    }

    /// Check if currently inside a table.
    pub fn is_in_table(&self) -> bool {
        matches!(self.mode, ParserMode::InTable { .. })
    }

    /// Enter a fenced code block.
    pub fn enter_code_block(&mut self) {
        trace!("line {}: {} -> code", self.cursor, self.mode);
        self.mode = ParserMode::InCodeBlock { lines: Vec::new() };
    }

    /// Buffer one line of code. Has no effect outside a code block.
    pub fn push_code_line(&mut self, line: &str) {
        if let ParserMode::InCodeBlock { lines } = &mut self.mode {
            lines.push(line.to_string());
        }
    }

    /// Leave the code block and return its buffered lines.
    ///
    /// Returns an empty vector when not inside a code block.
    pub fn exit_code_block(&mut self) -> Vec<String> {
        match std::mem::take(&mut self.mode) {
            ParserMode::InCodeBlock { lines } => {
                trace!("line {}: code -> normal ({} lines)", self.cursor, lines.len());
                lines
            }
            other => {
                self.mode = other;
                Vec::new()
            }
        }
    }

    /// Buffer one table row, entering table mode if needed.
    ///
    /// Has no effect inside a code block.
    pub fn push_table_line(&mut self, line: &str) {
        match &mut self.mode {
            ParserMode::InTable { lines } => lines.push(line.to_string()),
            ParserMode::Normal => {
                trace!("line {}: normal -> table", self.cursor);
                self.mode = ParserMode::InTable {
                    lines: vec![line.to_string()],
                };
            }
            ParserMode::InCodeBlock { .. } => {}
        }
    }

    /// Leave table mode and return the buffered rows.
    ///
    /// Returns an empty vector when not inside a table.
    pub fn exit_table(&mut self) -> Vec<String> {
        match std::mem::take(&mut self.mode) {
            ParserMode::InTable { lines } => {
                trace!("line {}: table -> normal ({} rows)", self.cursor, lines.len());
                lines
            }
            other => {
                self.mode = other;
                Vec::new()
            }
        }
    }

    /// Reset to [`ParserMode::Normal`], returning whatever mode was active.
    pub fn take_mode(&mut self) -> ParserMode {
        std::mem::take(&mut self.mode)
    }
}
