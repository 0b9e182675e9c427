//! Heading styles.
//!
//! Output level 0 is the document title; levels 1 to 3 map to the
//! numbered heading styles. Deeper levels share the level 3 style.

use crate::sink::RunStyle;
use guidedoc_config::ComputedStyle;

/// Paragraph style ids of output heading levels 0 through 3.
pub const HEADING_STYLE_IDS: [&str; 4] = ["Title", "Heading1", "Heading2", "Heading3"];

/// Display names matching [`HEADING_STYLE_IDS`].
pub const HEADING_STYLE_NAMES: [&str; 4] = ["Title", "Heading 1", "Heading 2", "Heading 3"];

/// Clamp an output level to the supported range.
pub fn clamp_level(level: u8) -> usize {
    usize::from(level).min(HEADING_STYLE_IDS.len() - 1)
}

/// Paragraph style id of a heading level.
pub fn heading_style_id(level: u8) -> &'static str {
    HEADING_STYLE_IDS[clamp_level(level)]
}

/// Run style of a heading level: configured size and color.
pub fn heading_run_style(level: u8, style: &ComputedStyle) -> RunStyle {
    RunStyle::from(&style.heading(level))
}
