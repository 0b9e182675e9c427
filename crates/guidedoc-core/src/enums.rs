//! Core enums for guidedoc parsing state.
//!
//! These enums represent the block-accumulation states the classifier
//! moves through while walking a document line by line.

/// Block-accumulation mode of the classifier.
///
/// Exactly one mode is active at any cursor position. Lines that belong to
/// a multi-line block are buffered inside the variant until the block ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParserMode {
    /// Classifying single lines
    #[default]
    Normal,
    /// Inside a fenced code block
    InCodeBlock {
        /// Raw lines between the fences
        lines: Vec<String>,
    },
    /// Inside a run of pipe-delimited table rows
    InTable {
        /// Raw table lines, separator rows included
        lines: Vec<String>,
    },
}

impl ParserMode {
    /// Short name of the mode, used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            ParserMode::Normal => "normal",
            ParserMode::InCodeBlock { .. } => "code",
            ParserMode::InTable { .. } => "table",
        }
    }

    /// Check if the mode is [`ParserMode::Normal`].
    pub fn is_normal(&self) -> bool {
        matches!(self, ParserMode::Normal)
    }

    /// Number of lines buffered by the current mode.
    pub fn buffered(&self) -> usize {
        match self {
            ParserMode::Normal => 0,
            ParserMode::InCodeBlock { lines } | ParserMode::InTable { lines } => lines.len(),
        }
    }
}

impl std::fmt::Display for ParserMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Represents the type of list an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Unordered list item (`- ` or `* `)
    Bullet,
    /// Ordered list item (`1. `)
    Numbered,
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Bullet => write!(f, "bullet"),
            ListKind::Numbered => write!(f, "numbered"),
        }
    }
}
