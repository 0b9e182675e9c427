//! Code block and rule paragraphs.

use crate::sink::{Indent, ParagraphKind, ParagraphSpec, RunSpec, RunStyle};
use guidedoc_config::ComputedStyle;

/// Render a fenced code block.
///
/// The whole block is one run; its `\n` separators become line breaks
/// in the output document.
pub fn code_paragraph(code: &str, style: &ComputedStyle) -> ParagraphSpec {
    ParagraphSpec::new(ParagraphKind::Code)
        .with_runs(vec![RunSpec::new(code, RunStyle::from(&style.code_block))])
        .with_indent(Indent {
            left: style.code_indent,
            right: style.code_indent,
        })
}

/// Render a horizontal rule as a line of underscores.
pub fn rule_paragraph(style: &ComputedStyle) -> ParagraphSpec {
    ParagraphSpec::empty().with_runs(vec![RunSpec::plain(style.rule.clone())])
}
