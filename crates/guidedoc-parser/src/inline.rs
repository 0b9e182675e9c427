//! Inline markdown formatter.
//!
//! Splits one line of text into styled runs. Spans are matched in three
//! stages, each stage only looking at text the previous stages left plain:
//!
//! 1. inline code `` `code` ``
//! 2. bold `**bold**`
//! 3. italic `*italic*`
//!
//! Code spans are never re-scanned, so `` `**x**` `` stays literal code.
//! Every delimiter must be closed with non-empty content in between;
//! anything else passes through as plain text.

use guidedoc_core::Emphasis;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for inline code spans: `code`
static CODE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`]+`").unwrap());

/// Regex for bold spans: **bold**
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*[^*]+\*\*").unwrap());

/// Regex for italic spans: *italic*
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*[^*]+\*").unwrap());

/// A contiguous span of text sharing one combination of emphasis flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    /// Text with delimiters removed
    pub text: String,
    /// Emphasis flags
    pub emphasis: Emphasis,
}

impl StyledRun {
    /// Create a run with explicit emphasis.
    pub fn new(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            text: text.into(),
            emphasis,
        }
    }

    /// Create a plain run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Emphasis::PLAIN)
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, Emphasis::BOLD)
    }

    /// Create an italic run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text, Emphasis::ITALIC)
    }

    /// Create an inline code run.
    pub fn code(text: impl Into<String>) -> Self {
        Self::new(text, Emphasis::CODE)
    }
}

impl std::fmt::Display for StyledRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.emphasis, self.text)
    }
}

/// Piece of a staged split: either left over or matched by the stage's pattern.
enum Segment<'a> {
    Outside(&'a str),
    Inside(&'a str),
}

/// Split `text` around the matches of `re`, keeping both sides in order.
fn split_around<'a>(re: &Regex, text: &'a str) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in re.find_iter(text) {
        if m.start() > last {
            segments.push(Segment::Outside(&text[last..m.start()]));
        }
        segments.push(Segment::Inside(m.as_str()));
        last = m.end();
    }

    if last < text.len() {
        segments.push(Segment::Outside(&text[last..]));
    }

    segments
}

/// Strip `width` delimiter bytes from both ends of a matched span.
///
/// Delimiters are ASCII, so the slice always lands on char boundaries.
fn strip_delimiters(span: &str, width: usize) -> &str {
    &span[width..span.len() - width]
}

/// Format a line of inline markdown into styled runs.
///
/// Plain text without delimiters comes back as a single run; the empty
/// string yields no runs.
///
/// # Example
///
/// ```
/// use guidedoc_parser::{format_inline, StyledRun};
///
/// let runs = format_inline("**bold** and *italic*");
/// assert_eq!(
///     runs,
///     vec![
///         StyledRun::bold("bold"),
///         StyledRun::plain(" and "),
///         StyledRun::italic("italic"),
///     ]
/// );
/// ```
pub fn format_inline(text: &str) -> Vec<StyledRun> {
    let mut runs = Vec::new();

    for segment in split_around(&CODE_SPAN_RE, text) {
        match segment {
            Segment::Inside(span) => runs.push(StyledRun::code(strip_delimiters(span, 1))),
            Segment::Outside(rest) => push_bold(&mut runs, rest),
        }
    }

    runs
}

fn push_bold(runs: &mut Vec<StyledRun>, text: &str) {
    for segment in split_around(&BOLD_RE, text) {
        match segment {
            Segment::Inside(span) => runs.push(StyledRun::bold(strip_delimiters(span, 2))),
            Segment::Outside(rest) => push_italic(runs, rest),
        }
    }
}

fn push_italic(runs: &mut Vec<StyledRun>, text: &str) {
    for segment in split_around(&ITALIC_RE, text) {
        match segment {
            // A bold delimiter is never two adjacent italics
            Segment::Inside(span) if !span.starts_with("**") => {
                runs.push(StyledRun::italic(strip_delimiters(span, 1)));
            }
            Segment::Inside(rest) | Segment::Outside(rest) => {
                if !rest.is_empty() {
                    runs.push(StyledRun::plain(rest));
                }
            }
        }
    }
}

/// Concatenate the text of a run sequence.
pub fn plain_text(runs: &[StyledRun]) -> String {
    runs.iter().map(|run| run.text.as_str()).collect()
}
