//! Guidedoc Parser
//!
//! A line-oriented markdown block classifier for guide documents.
//!
//! # Overview
//!
//! The classifier walks a document once, top to bottom, and yields one
//! [`Block`] per recognized construct. Code fences and pipe tables are
//! accumulated across lines; every other construct is decided from a
//! single line. Leaf text of paragraphs and list items goes through the
//! [inline formatter](inline::format_inline).
//!
//! # Example
//!
//! ```
//! use guidedoc_parser::{classify, Block};
//!
//! for block in classify("# Hello World\n\n- [x] done") {
//!     match block {
//!         Block::Heading { level, text } => println!("H{}: {}", level, text),
//!         Block::Checkbox { checked, text } => println!("[{}] {}", checked, text),
//!         _ => {}
//!     }
//! }
//! ```

pub mod inline;
pub mod table;

pub use inline::{format_inline, plain_text, StyledRun};
pub use table::{build_table, Table};

use guidedoc_core::{ListKind, ParseState, ParserMode};
use log::{debug, warn};
use regex::Regex;
use std::sync::LazyLock;

// =============================================================================
// Regex patterns
// =============================================================================

/// Regex for numbered list markers: `1. `
static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s").unwrap());

/// Code fence marker
const FENCE: &str = "```";

/// Horizontal rule spellings
const RULES: [&str; 3] = ["---", "***", "___"];

// =============================================================================
// Types
// =============================================================================

/// A structural unit of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading; level 0 is the document title, 3 covers `####` and deeper
    Heading { level: u8, text: String },
    /// Paragraph of styled text
    Paragraph(Vec<StyledRun>),
    /// Bullet list item
    BulletItem(Vec<StyledRun>),
    /// Numbered list item
    NumberedItem(Vec<StyledRun>),
    /// Task list item
    Checkbox { checked: bool, text: String },
    /// Fenced code, lines joined with `\n`
    CodeBlock(String),
    /// Pipe table
    Table(Table),
    /// Thematic break
    HorizontalRule,
    /// Blank line
    BlankSpacer,
}

impl Block {
    /// Short name of the block kind, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph(_) => "paragraph",
            Block::BulletItem(_) => "bullet",
            Block::NumberedItem(_) => "numbered",
            Block::Checkbox { .. } => "checkbox",
            Block::CodeBlock(_) => "code",
            Block::Table(_) => "table",
            Block::HorizontalRule => "rule",
            Block::BlankSpacer => "blank",
        }
    }

    /// List kind of a list item block.
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            Block::BulletItem(_) => Some(ListKind::Bullet),
            Block::NumberedItem(_) => Some(ListKind::Numbered),
            _ => None,
        }
    }
}

fn write_runs(f: &mut std::fmt::Formatter<'_>, runs: &[StyledRun]) -> std::fmt::Result {
    let runs: Vec<String> = runs.iter().map(ToString::to_string).collect();
    write!(f, "[{}]", runs.join(", "))
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())?;
        match self {
            Block::Heading { level, text } => write!(f, "({}) {:?}", level, text),
            Block::Paragraph(runs) | Block::BulletItem(runs) | Block::NumberedItem(runs) => {
                write!(f, " ")?;
                write_runs(f, runs)
            }
            Block::Checkbox { checked, text } => {
                write!(f, " [{}] {:?}", if *checked { "x" } else { " " }, text)
            }
            Block::CodeBlock(code) => write!(f, " {:?}", code),
            Block::Table(table) => write!(f, " {:?} {:?}", table.header, table.rows),
            Block::HorizontalRule | Block::BlankSpacer => Ok(()),
        }
    }
}

// =============================================================================
// Line predicates
// =============================================================================

/// Check if a line opens or closes a code fence.
pub fn is_fence(line: &str) -> bool {
    line.starts_with(FENCE)
}

/// Check if a line is a table row.
///
/// Any line containing a pipe counts, unless it is a heading. A plain
/// pipe test would read `# a | b` as a row; here it stays a heading.
pub fn is_table_row(line: &str) -> bool {
    line.contains('|') && !line.trim().starts_with('#')
}

/// Check if a line keeps an open table going.
///
/// Fences win over tables, so a fence line always ends the table. Unlike a
/// bare pipe check, a heading or fence containing a pipe also ends it.
fn continues_table(line: &str) -> bool {
    !is_fence(line) && is_table_row(line)
}

/// Map a count of leading `#` to an output heading level.
pub fn heading_level(hashes: usize) -> u8 {
    match hashes {
        0 | 1 => 0,
        2 => 1,
        3 => 2,
        _ => 3,
    }
}

/// Split raw text into document lines.
///
/// Splits on `\n` only and strips one trailing `\r` per line.
pub fn document_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Classify one line outside of any code block or table.
///
/// Returns `None` when the line produces no block.
///
/// # Example
///
/// ```
/// use guidedoc_parser::{classify_line, Block};
///
/// assert_eq!(
///     classify_line("- [x] done"),
///     Some(Block::Checkbox { checked: true, text: "done".to_string() })
/// );
/// ```
pub fn classify_line(line: &str) -> Option<Block> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Some(Block::BlankSpacer);
    }

    if RULES.contains(&trimmed) {
        return Some(Block::HorizontalRule);
    }

    if line.starts_with('#') {
        let rest = line.trim_start_matches('#');
        let hashes = line.len() - rest.len();
        return Some(Block::Heading {
            level: heading_level(hashes),
            text: rest.trim().to_string(),
        });
    }

    if trimmed.starts_with("- [ ]") || trimmed.starts_with("- [x]") {
        let checked = trimmed.contains("[x]");
        let text = trimmed.replace("- [ ]", "").replace("- [x]", "");
        return Some(Block::Checkbox {
            checked,
            text: text.trim().to_string(),
        });
    }

    if let Some(rest) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return Some(Block::BulletItem(format_inline(rest)));
    }

    if let Some(marker) = NUMBERED_RE.find(trimmed) {
        return Some(Block::NumberedItem(format_inline(&trimmed[marker.end()..])));
    }

    let runs = format_inline(trimmed);
    if runs.is_empty() {
        None
    } else {
        Some(Block::Paragraph(runs))
    }
}

// =============================================================================
// Classifier
// =============================================================================

/// Lazy block classifier over one document.
///
/// Consumes its cursor once; after the last block it keeps returning
/// `None`.
#[derive(Debug)]
pub struct Classifier<'a> {
    lines: Vec<&'a str>,
    state: ParseState,
}

impl<'a> Classifier<'a> {
    /// Create a classifier over a document.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: document_lines(text),
            state: ParseState::new(),
        }
    }

    /// Current parse state.
    pub fn state(&self) -> &ParseState {
        &self.state
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Drain the remaining blocks into a vector.
    pub fn collect_blocks(self) -> Vec<Block> {
        self.collect()
    }

    /// Consume the line at `index`, returning a block if one is complete.
    fn step(&mut self, index: usize) -> Option<Block> {
        let line = self.lines[index];

        if self.state.is_in_code() {
            if is_fence(line) {
                let code = self.state.exit_code_block();
                return Some(Block::CodeBlock(code.join("\n")));
            }
            self.state.push_code_line(line);
            return None;
        }

        if is_fence(line) {
            self.state.enter_code_block();
            return None;
        }

        if is_table_row(line) {
            self.state.push_table_line(line);

            let next_continues = self
                .lines
                .get(index + 1)
                .is_some_and(|next| continues_table(next));
            if next_continues {
                return None;
            }

            let rows = self.state.exit_table();
            let table = build_table(&rows);
            if table.is_none() {
                debug!("line {}: table block without content rows dropped", index + 1);
            }
            return table.map(Block::Table);
        }

        classify_line(line)
    }

    /// Flush whatever block is still open at end of input.
    fn finish(&mut self) -> Option<Block> {
        match self.state.take_mode() {
            ParserMode::Normal => None,
            ParserMode::InCodeBlock { lines } => {
                warn!(
                    "unterminated code block at end of input ({} lines)",
                    lines.len()
                );
                Some(Block::CodeBlock(lines.join("\n")))
            }
            ParserMode::InTable { lines } => build_table(&lines).map(Block::Table),
        }
    }
}

impl Iterator for Classifier<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        while self.state.cursor() < self.lines.len() {
            let index = self.state.advance();
            if let Some(block) = self.step(index) {
                return Some(block);
            }
        }
        self.finish()
    }
}

impl std::iter::FusedIterator for Classifier<'_> {}

/// Classify a document into blocks.
///
/// Convenience for [`Classifier::new`].
pub fn classify(text: &str) -> Classifier<'_> {
    Classifier::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(text: &str) -> Vec<Block> {
        Classifier::new(text).collect_blocks()
    }

    #[test]
    fn test_parse_heading() {
        assert_eq!(
            blocks("# Title"),
            vec![Block::Heading {
                level: 0,
                text: "Title".to_string()
            }]
        );
    }

    #[test]
    fn test_heading_levels() {
        let levels: Vec<u8> = blocks("# a\n## b\n### c\n#### d\n##### e")
            .into_iter()
            .filter_map(|block| match block {
                Block::Heading { level, .. } => Some(level),
                _ => None,
            })
            .collect();
        assert_eq!(levels, vec![0, 1, 2, 3, 3]);
    }

    #[test]
    fn test_heading_clamp_text() {
        assert_eq!(
            classify_line("##### Deep"),
            Some(Block::Heading {
                level: 3,
                text: "Deep".to_string()
            })
        );
    }

    #[test]
    fn test_heading_without_space() {
        assert_eq!(
            classify_line("#tag"),
            Some(Block::Heading {
                level: 0,
                text: "tag".to_string()
            })
        );
    }

    #[test]
    fn test_heading_with_pipe_is_heading() {
        assert_eq!(
            blocks("## A | B"),
            vec![Block::Heading {
                level: 1,
                text: "A | B".to_string()
            }]
        );
    }

    #[test]
    fn test_parse_code_block() {
        let result = blocks("```rust\nfn main() {\n    # not a heading\n}\n```");
        assert_eq!(
            result,
            vec![Block::CodeBlock(
                "fn main() {\n    # not a heading\n}".to_string()
            )]
        );
    }

    #[test]
    fn test_code_block_interior_never_classified() {
        let result = blocks("```\n# h\n- b\n| a | b |\n---\n\n```");
        assert_eq!(
            result,
            vec![Block::CodeBlock("# h\n- b\n| a | b |\n---\n".to_string())]
        );
    }

    #[test]
    fn test_indented_fence_is_not_fence() {
        let result = blocks("  ```");
        assert_eq!(result, vec![Block::Paragraph(vec![StyledRun::plain("```")])]);
    }

    #[test]
    fn test_unterminated_code_block_flushed() {
        let result = blocks("```\nline one\nline two");
        assert_eq!(result, vec![Block::CodeBlock("line one\nline two".to_string())]);
    }

    #[test]
    fn test_parse_table() {
        let result = blocks("| A | B |\n|---|---|\n| 1 | 2 |\n\nAfter");
        assert_eq!(
            result,
            vec![
                Block::Table(Table {
                    header: vec!["A".to_string(), "B".to_string()],
                    rows: vec![vec!["1".to_string(), "2".to_string()]],
                }),
                Block::BlankSpacer,
                Block::Paragraph(vec![StyledRun::plain("After")]),
            ]
        );
    }

    #[test]
    fn test_unterminated_table_flushed() {
        let result = blocks("Intro\n| A | B |\n| 1 | 2 |");
        assert_eq!(result.len(), 2);
        assert!(matches!(&result[1], Block::Table(t) if t.rows.len() == 1));
    }

    #[test]
    fn test_table_ended_by_fence() {
        let result = blocks("| A |\n```\ncode\n```");
        assert_eq!(
            result,
            vec![
                Block::Table(Table {
                    header: vec!["A".to_string()],
                    rows: vec![],
                }),
                Block::CodeBlock("code".to_string()),
            ]
        );
    }

    #[test]
    fn test_table_ended_by_heading_with_pipe() {
        let result = blocks("| A |\n| 1 |\n# X | Y\n| B |");
        let kinds: Vec<&str> = result.iter().map(Block::kind).collect();
        assert_eq!(kinds, vec!["table", "heading", "table"]);
    }

    #[test]
    fn test_prose_with_pipe_is_table() {
        let result = blocks("Use a | b for alternation");
        assert_eq!(
            result,
            vec![Block::Table(Table {
                header: vec!["Use a".to_string(), "b for alternation".to_string()],
                rows: vec![],
            })]
        );
    }

    #[test]
    fn test_separator_only_table_emits_nothing() {
        assert!(blocks("|---|---|").is_empty());
    }

    #[test]
    fn test_blank_and_whitespace_lines() {
        assert_eq!(blocks("\n   \t"), vec![Block::BlankSpacer, Block::BlankSpacer]);
    }

    #[test]
    fn test_trailing_newline_yields_blank() {
        assert_eq!(
            blocks("Text\n"),
            vec![
                Block::Paragraph(vec![StyledRun::plain("Text")]),
                Block::BlankSpacer
            ]
        );
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(
            blocks("# Title\r\n- item\r\n"),
            vec![
                Block::Heading {
                    level: 0,
                    text: "Title".to_string()
                },
                Block::BulletItem(vec![StyledRun::plain("item")]),
                Block::BlankSpacer,
            ]
        );
    }

    #[test]
    fn test_parse_hr() {
        for rule in ["---", "***", "___", "  ---  "] {
            assert_eq!(classify_line(rule), Some(Block::HorizontalRule), "{rule:?}");
        }
        assert_ne!(classify_line("----"), Some(Block::HorizontalRule));
    }

    #[test]
    fn test_checkbox_precedence() {
        assert_eq!(
            classify_line("- [x] done"),
            Some(Block::Checkbox {
                checked: true,
                text: "done".to_string()
            })
        );
        assert_eq!(
            classify_line("  - [ ] todo"),
            Some(Block::Checkbox {
                checked: false,
                text: "todo".to_string()
            })
        );
    }

    #[test]
    fn test_checkbox_is_case_sensitive() {
        assert_eq!(
            classify_line("- [X] done"),
            Some(Block::BulletItem(vec![StyledRun::plain("[X] done")]))
        );
    }

    #[test]
    fn test_parse_bullets() {
        assert_eq!(
            classify_line("- **Note**: read"),
            Some(Block::BulletItem(vec![
                StyledRun::bold("Note"),
                StyledRun::plain(": read")
            ]))
        );
        assert_eq!(
            classify_line("   * item"),
            Some(Block::BulletItem(vec![StyledRun::plain("item")]))
        );
    }

    #[test]
    fn test_parse_numbered() {
        assert_eq!(
            classify_line("12. Install `pip`"),
            Some(Block::NumberedItem(vec![
                StyledRun::plain("Install "),
                StyledRun::code("pip")
            ]))
        );
        assert_eq!(
            classify_line("1.5 million"),
            Some(Block::Paragraph(vec![StyledRun::plain("1.5 million")]))
        );
    }

    #[test]
    fn test_paragraph_trimmed() {
        assert_eq!(
            classify_line("   *Note* well   "),
            Some(Block::Paragraph(vec![
                StyledRun::italic("Note"),
                StyledRun::plain(" well")
            ]))
        );
    }

    #[test]
    fn test_classifier_is_fused() {
        let mut classifier = classify("# A");
        assert!(classifier.next().is_some());
        assert!(classifier.next().is_none());
        assert!(classifier.next().is_none());
        assert_eq!(classifier.state().cursor(), classifier.line_count());
    }

    #[test]
    fn test_block_display() {
        assert_eq!(
            Block::Heading {
                level: 1,
                text: "A".to_string()
            }
            .to_string(),
            "heading(1) \"A\""
        );
        assert_eq!(
            Block::Paragraph(vec![StyledRun::plain("a"), StyledRun::bold("b")]).to_string(),
            "paragraph [plain(\"a\"), bold(\"b\")]"
        );
        assert_eq!(
            Block::Checkbox {
                checked: false,
                text: "t".to_string()
            }
            .to_string(),
            "checkbox [ ] \"t\""
        );
        assert_eq!(Block::HorizontalRule.to_string(), "rule");
    }

    #[test]
    fn test_list_kind() {
        assert_eq!(Block::BulletItem(vec![]).list_kind(), Some(ListKind::Bullet));
        assert_eq!(Block::NumberedItem(vec![]).list_kind(), Some(ListKind::Numbered));
        assert_eq!(Block::BlankSpacer.list_kind(), None);
    }
}
