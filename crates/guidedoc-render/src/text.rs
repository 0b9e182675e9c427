//! Styled text runs.
//!
//! Maps inline formatter output onto sink runs. Bold and italic only set
//! the run flags; code runs take the inline-code font, size and color.

use crate::sink::{RunSpec, RunStyle};
use guidedoc_config::ComputedStyle;
use guidedoc_core::Emphasis;
use guidedoc_parser::StyledRun;

/// Run style for a set of emphasis flags.
pub fn run_style(emphasis: Emphasis, style: &ComputedStyle) -> RunStyle {
    let mut run = if emphasis.code {
        RunStyle::from(&style.inline_code)
    } else {
        RunStyle::plain()
    };
    run.bold = emphasis.bold;
    run.italic = emphasis.italic;
    run
}

/// Convert styled runs into sink runs.
pub fn styled_runs(runs: &[StyledRun], style: &ComputedStyle) -> Vec<RunSpec> {
    runs.iter()
        .map(|run| RunSpec::new(run.text.clone(), run_style(run.emphasis, style)))
        .collect()
}
