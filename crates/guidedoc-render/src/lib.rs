//! Guidedoc Render
//!
//! This crate maps classified markdown blocks onto a word-processor
//! document.
//!
//! # Features
//!
//! - **Title and headings** - 4 levels with configured sizes and colors
//! - **Lists** - bullet and numbered list paragraphs
//! - **Task items** - ballot box symbols
//! - **Code blocks** - monospace, indented, line breaks preserved
//! - **Tables** - named table style with a bold header row
//!
//! Rendering goes through the [`DocumentSink`] trait; [`DocxSink`] is the
//! `.docx` implementation.
//!
//! # Example
//!
//! ```
//! use guidedoc_config::Config;
//! use guidedoc_parser::classify;
//! use guidedoc_render::{DocxSink, Renderer};
//!
//! let style = Config::default().computed_style();
//! let mut renderer = Renderer::new(DocxSink::new(&style), style);
//! renderer.render_all(classify("# Hello World\n\n- item"));
//!
//! let bytes = renderer.into_sink().into_bytes().unwrap();
//! assert!(!bytes.is_empty());
//! ```

pub mod code;
pub mod docx;
pub mod features;
pub mod heading;
pub mod list;
pub mod sink;
pub mod table;
pub mod text;

pub use code::{code_paragraph, rule_paragraph};
pub use docx::{table_style_id, DocxSink};
pub use features::RenderFeatures;
pub use heading::{heading_run_style, heading_style_id, HEADING_STYLE_IDS};
pub use list::{checkbox_item, list_item};
pub use sink::{
    DocumentSink, Indent, PageMargins, ParagraphKind, ParagraphSpec, RunSpec, RunStyle, TableSpec,
};
pub use table::table_spec;
pub use text::{run_style, styled_runs};

use guidedoc_config::ComputedStyle;
use guidedoc_parser::Block;
use log::{debug, trace};

/// Block renderer over a document sink.
pub struct Renderer<S: DocumentSink> {
    /// Output sink
    sink: S,
    /// Computed document style
    style: ComputedStyle,
    /// Feature flags
    features: RenderFeatures,
    /// Blocks rendered so far
    rendered: usize,
}

impl<S: DocumentSink> Renderer<S> {
    /// Create a new renderer and apply the page margins of `style`.
    pub fn new(sink: S, style: ComputedStyle) -> Self {
        Self::with_features(sink, style, RenderFeatures::default())
    }

    /// Create a renderer with custom features.
    pub fn with_features(mut sink: S, style: ComputedStyle, features: RenderFeatures) -> Self {
        sink.set_page_margins(&PageMargins::uniform(style.margin));
        Self {
            sink,
            style,
            features,
            rendered: 0,
        }
    }

    /// Get the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Number of blocks rendered so far.
    pub fn rendered(&self) -> usize {
        self.rendered
    }

    /// Consume the renderer, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Render a single block.
    pub fn render_block(&mut self, block: &Block) {
        trace!("render {}", block);

        match block {
            Block::Heading { level, text } => {
                let style = heading_run_style(*level, &self.style);
                self.sink.add_heading(text, *level, &style);
            }

            Block::Paragraph(runs) => {
                let runs = styled_runs(runs, &self.style);
                self.sink.add_paragraph(ParagraphSpec::empty().with_runs(runs));
            }

            Block::BulletItem(runs) | Block::NumberedItem(runs) => {
                if let Some(kind) = block.list_kind() {
                    self.sink.add_paragraph(list_item(kind, runs, &self.style));
                }
            }

            Block::Checkbox { checked, text } => {
                self.sink
                    .add_paragraph(checkbox_item(*checked, text, &self.style));
            }

            Block::CodeBlock(code) => {
                self.sink.add_paragraph(code_paragraph(code, &self.style));
            }

            Block::Table(table) => {
                let spec = table_spec(table, &self.style, self.features.format_table_cells);
                self.sink.add_table(spec);
                // Spacer after every table
                self.sink.add_paragraph(ParagraphSpec::empty());
            }

            Block::HorizontalRule => {
                self.sink.add_paragraph(rule_paragraph(&self.style));
            }

            Block::BlankSpacer => {
                self.sink.add_paragraph(ParagraphSpec::empty());
            }
        }

        self.rendered += 1;
    }

    /// Render every block of a sequence, in order.
    ///
    /// Returns the number of blocks rendered by this call.
    pub fn render_all<I>(&mut self, blocks: I) -> usize
    where
        I: IntoIterator<Item = Block>,
    {
        let before = self.rendered;
        for block in blocks {
            self.render_block(&block);
        }
        let count = self.rendered - before;
        debug!("rendered {} blocks", count);
        count
    }
}
