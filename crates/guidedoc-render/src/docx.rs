//! Word document sink built on docx-rs.
//!
//! Content is collected in document order and assembled into a package
//! when the sink is consumed by [`DocxSink::into_bytes`] or
//! [`DocxSink::save`].

use std::io::Cursor;
use std::path::Path;

use docx_rs::{
    AbstractNumbering, BreakType, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat,
    Numbering, NumberingId, PageMargin, Paragraph, Run, RunFonts, SpecialIndentType, Start,
    Style, StyleType, Table, TableCell, TableRow,
};
use guidedoc_config::ComputedStyle;
use guidedoc_core::{GuidedocError, Result};
use log::debug;

use crate::heading::{heading_style_id, HEADING_STYLE_IDS, HEADING_STYLE_NAMES};
use crate::sink::{DocumentSink, PageMargins, ParagraphKind, ParagraphSpec, RunSpec, RunStyle, TableSpec};

/// Numbering instance of bullet list paragraphs.
const BULLET_NUMBERING_ID: usize = 1;

/// Numbering instance of numbered list paragraphs, shared by the whole
/// document.
const DECIMAL_NUMBERING_ID: usize = 2;

/// Left indent of list items, in twips.
const LIST_INDENT: i32 = 720;

/// Hanging indent of the list marker, in twips.
const LIST_HANGING: i32 = 360;

enum BodyElement {
    Paragraph(Paragraph),
    Table(Table),
}

/// Sink producing a `.docx` package.
pub struct DocxSink {
    body: Vec<BodyElement>,
    margins: PageMargins,
    page_size: (u32, u32),
    code_style: RunStyle,
    table_styles: Vec<String>,
}

impl DocxSink {
    /// Create an empty document with the page size of `style`.
    pub fn new(style: &ComputedStyle) -> Self {
        Self {
            body: Vec::new(),
            margins: PageMargins::uniform(style.margin),
            page_size: (style.page_width, style.page_height),
            code_style: RunStyle::from(&style.code_block),
            table_styles: Vec::new(),
        }
    }

    /// Number of top-level paragraphs and tables added so far.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Assemble and pack the document.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        let mut docx = Docx::new()
            .page_size(self.page_size.0, self.page_size.1)
            .page_margin(
                PageMargin::new()
                    .top(self.margins.top)
                    .right(self.margins.right)
                    .bottom(self.margins.bottom)
                    .left(self.margins.left),
            );

        docx = add_styles(docx, &self.code_style, &self.table_styles);
        docx = add_numbering(docx);

        for element in self.body {
            docx = match element {
                BodyElement::Paragraph(paragraph) => docx.add_paragraph(paragraph),
                BodyElement::Table(table) => docx.add_table(table),
            };
        }

        let mut buffer = Vec::new();
        docx.build()
            .pack(&mut Cursor::new(&mut buffer))
            .map_err(|e| GuidedocError::Render(format!("Failed to pack DOCX: {e}")))?;

        Ok(buffer)
    }

    /// Pack the document and write it to `path`.
    pub fn save(self, path: &Path) -> Result<()> {
        let bytes = self.into_bytes()?;
        debug!("writing {} bytes to {}", bytes.len(), path.display());
        std::fs::write(path, bytes).map_err(|source| GuidedocError::Output {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl DocumentSink for DocxSink {
    fn set_page_margins(&mut self, margins: &PageMargins) {
        self.margins = *margins;
    }

    fn add_heading(&mut self, text: &str, level: u8, style: &RunStyle) {
        let paragraph = Paragraph::new()
            .style(heading_style_id(level))
            .add_run(build_run(text, style));
        self.body.push(BodyElement::Paragraph(paragraph));
    }

    fn add_paragraph(&mut self, spec: ParagraphSpec) {
        let mut paragraph = Paragraph::new().style(spec.kind.style_id());

        paragraph = match spec.kind {
            ParagraphKind::ListBullet => paragraph.numbering(
                NumberingId::new(BULLET_NUMBERING_ID),
                IndentLevel::new(0),
            ),
            ParagraphKind::ListNumber => paragraph.numbering(
                NumberingId::new(DECIMAL_NUMBERING_ID),
                IndentLevel::new(0),
            ),
            ParagraphKind::Normal | ParagraphKind::Code => paragraph,
        };

        if let Some(indent) = spec.indent {
            paragraph = paragraph.indent(Some(indent.left), None, Some(indent.right), None);
        }

        for run in &spec.runs {
            paragraph = paragraph.add_run(build_run(&run.text, &run.style));
        }

        self.body.push(BodyElement::Paragraph(paragraph));
    }

    fn add_table(&mut self, spec: TableSpec) {
        let style_id = table_style_id(&spec.style);
        if !self.table_styles.contains(&spec.style) {
            self.table_styles.push(spec.style.clone());
        }

        let rows = spec
            .rows
            .iter()
            .map(|row| TableRow::new(row.iter().map(|cell| build_cell(cell)).collect()))
            .collect();

        let content_width = i64::from(self.page_size.0)
            - i64::from(self.margins.left)
            - i64::from(self.margins.right);
        let column_width = usize::try_from(content_width.max(0)).unwrap_or_default()
            / spec.columns.max(1);

        let table = Table::new(rows)
            .style(&style_id)
            .set_grid(vec![column_width; spec.columns]);
        self.body.push(BodyElement::Table(table));
    }
}

/// Style id of a named table style: the name without whitespace.
pub fn table_style_id(name: &str) -> String {
    name.split_whitespace().collect()
}

fn build_cell(runs: &[RunSpec]) -> TableCell {
    let paragraph = runs.iter().fold(Paragraph::new(), |paragraph, run| {
        paragraph.add_run(build_run(&run.text, &run.style))
    });
    TableCell::new().add_paragraph(paragraph)
}

fn fonts(family: &str) -> RunFonts {
    RunFonts::new()
        .ascii(family)
        .hi_ansi(family)
        .east_asia(family)
        .cs(family)
}

/// Build a run; `\n` in the text becomes a line break.
fn build_run(text: &str, style: &RunStyle) -> Run {
    let mut run = Run::new();

    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }

    if style.bold {
        run = run.bold();
    }
    if style.italic {
        run = run.italic();
    }
    if let Some(size) = style.size {
        run = run.size(size);
    }
    if let Some(color) = &style.color {
        run = run.color(color);
    }
    if let Some(font) = &style.font {
        run = run.fonts(fonts(font));
    }
    run
}

fn add_styles(docx: Docx, code: &RunStyle, table_styles: &[String]) -> Docx {
    let mut docx = HEADING_STYLE_IDS
        .iter()
        .zip(HEADING_STYLE_NAMES)
        .fold(docx, |docx, (id, name)| {
            docx.add_style(Style::new(*id, StyleType::Paragraph).name(name).bold())
        });

    for kind in [ParagraphKind::ListBullet, ParagraphKind::ListNumber] {
        docx = docx.add_style(Style::new(kind.style_id(), StyleType::Paragraph).name(kind.style_name()));
    }

    let mut code_style = Style::new(ParagraphKind::Code.style_id(), StyleType::Paragraph)
        .name(ParagraphKind::Code.style_name());
    if let Some(font) = &code.font {
        code_style = code_style.fonts(fonts(font));
    }
    if let Some(size) = code.size {
        code_style = code_style.size(size);
    }
    docx = docx.add_style(code_style);

    for name in table_styles {
        docx = docx.add_style(Style::new(table_style_id(name), StyleType::Table).name(name));
    }

    docx
}

fn list_level(format: &str, text: &str) -> Level {
    Level::new(
        0,
        Start::new(1),
        NumberFormat::new(format),
        LevelText::new(text),
        LevelJc::new("left"),
    )
    .indent(
        Some(LIST_INDENT),
        Some(SpecialIndentType::Hanging(LIST_HANGING)),
        None,
        None,
    )
}

fn add_numbering(docx: Docx) -> Docx {
    docx.add_abstract_numbering(
        AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(list_level("bullet", "•")),
    )
    .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID))
    .add_abstract_numbering(
        AbstractNumbering::new(DECIMAL_NUMBERING_ID).add_level(list_level("decimal", "%1.")),
    )
    .add_numbering(Numbering::new(DECIMAL_NUMBERING_ID, DECIMAL_NUMBERING_ID))
}
