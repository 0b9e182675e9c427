//! List and task item paragraphs.

use crate::sink::{ParagraphKind, ParagraphSpec, RunSpec};
use crate::text::styled_runs;
use guidedoc_config::ComputedStyle;
use guidedoc_core::ListKind;
use guidedoc_parser::StyledRun;

/// Paragraph kind of a list.
pub fn list_paragraph_kind(kind: ListKind) -> ParagraphKind {
    match kind {
        ListKind::Bullet => ParagraphKind::ListBullet,
        ListKind::Numbered => ParagraphKind::ListNumber,
    }
}

/// Render one list item.
pub fn list_item(kind: ListKind, runs: &[StyledRun], style: &ComputedStyle) -> ParagraphSpec {
    ParagraphSpec::new(list_paragraph_kind(kind)).with_runs(styled_runs(runs, style))
}

/// Render a task item as a normal paragraph with a box symbol prefix.
pub fn checkbox_item(checked: bool, text: &str, style: &ComputedStyle) -> ParagraphSpec {
    let symbol = if checked {
        &style.checked
    } else {
        &style.unchecked
    };
    ParagraphSpec::empty().with_runs(vec![RunSpec::plain(format!("{} {}", symbol, text))])
}
