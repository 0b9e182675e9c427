//! Document sink abstraction.
//!
//! The renderer never talks to a file format directly. It describes
//! headings, paragraphs and tables with the plain types in this module and
//! hands them to a [`DocumentSink`].

use guidedoc_config::TextStyle;

/// Formatting of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStyle {
    pub bold: bool,
    pub italic: bool,
    /// Font family for every script
    pub font: Option<String>,
    /// Size in half-points
    pub size: Option<usize>,
    /// Color as `RRGGBB`
    pub color: Option<String>,
}

impl RunStyle {
    /// Unformatted run.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Same style with bold set.
    pub fn bolded(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl From<&TextStyle> for RunStyle {
    fn from(style: &TextStyle) -> Self {
        Self {
            bold: false,
            italic: false,
            font: style.font.clone(),
            size: style.size,
            color: style.color.clone(),
        }
    }
}

/// A run of text with one style.
///
/// `\n` in the text marks a line break inside the paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSpec {
    pub text: String,
    pub style: RunStyle,
}

impl RunSpec {
    pub fn new(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Unformatted run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, RunStyle::plain())
    }
}

/// Paragraph style family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParagraphKind {
    #[default]
    Normal,
    ListBullet,
    ListNumber,
    Code,
}

impl ParagraphKind {
    /// Style id in the generated document.
    pub fn style_id(&self) -> &'static str {
        match self {
            ParagraphKind::Normal => "Normal",
            ParagraphKind::ListBullet => "ListBullet",
            ParagraphKind::ListNumber => "ListNumber",
            ParagraphKind::Code => "Code",
        }
    }

    /// Human-readable style name.
    pub fn style_name(&self) -> &'static str {
        match self {
            ParagraphKind::Normal => "Normal",
            ParagraphKind::ListBullet => "List Bullet",
            ParagraphKind::ListNumber => "List Number",
            ParagraphKind::Code => "Code",
        }
    }
}

/// Paragraph indentation in twips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indent {
    pub left: i32,
    pub right: i32,
}

/// A paragraph ready for the sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphSpec {
    pub kind: ParagraphKind,
    pub runs: Vec<RunSpec>,
    pub indent: Option<Indent>,
}

impl ParagraphSpec {
    /// Empty paragraph of the given kind.
    pub fn new(kind: ParagraphKind) -> Self {
        Self {
            kind,
            runs: Vec::new(),
            indent: None,
        }
    }

    /// Empty normal paragraph.
    pub fn empty() -> Self {
        Self::new(ParagraphKind::Normal)
    }

    pub fn with_runs(mut self, runs: Vec<RunSpec>) -> Self {
        self.runs = runs;
        self
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = Some(indent);
        self
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// A table ready for the sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSpec {
    /// Visual style name
    pub style: String,
    /// Column count; every row has exactly this many cells
    pub columns: usize,
    /// Rows of cells, header first; each cell is a run sequence
    pub rows: Vec<Vec<Vec<RunSpec>>>,
}

/// Page margins in twips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageMargins {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl PageMargins {
    /// Same margin on every side.
    pub fn uniform(twips: i32) -> Self {
        Self {
            top: twips,
            right: twips,
            bottom: twips,
            left: twips,
        }
    }
}

/// Receiver of rendered document content, in document order.
pub trait DocumentSink {
    /// Set the page margins of the document.
    fn set_page_margins(&mut self, margins: &PageMargins);

    /// Append a heading. Level 0 is the document title.
    fn add_heading(&mut self, text: &str, level: u8, style: &RunStyle);

    /// Append a paragraph.
    fn add_paragraph(&mut self, paragraph: ParagraphSpec);

    /// Append a table.
    fn add_table(&mut self, table: TableSpec);
}

impl<S: DocumentSink + ?Sized> DocumentSink for &mut S {
    fn set_page_margins(&mut self, margins: &PageMargins) {
        (**self).set_page_margins(margins);
    }

    fn add_heading(&mut self, text: &str, level: u8, style: &RunStyle) {
        (**self).add_heading(text, level, style);
    }

    fn add_paragraph(&mut self, paragraph: ParagraphSpec) {
        (**self).add_paragraph(paragraph);
    }

    fn add_table(&mut self, table: TableSpec) {
        (**self).add_table(table);
    }
}
