//! Style configuration.
//!
//! This module contains the `StyleConfig` struct which holds the visual
//! settings of the generated document. Lengths are in inches, font sizes
//! in points and colors in `RRGGBB` hex.

use serde::{Deserialize, Serialize};

/// Font size and color of one heading level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct HeadingStyle {
    /// Font size in points
    pub size: f64,
    /// Font color; `None` keeps the style's default color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl HeadingStyle {
    /// Create a new heading style.
    pub fn new(size: f64, color: Option<&str>) -> Self {
        Self {
            size,
            color: color.map(str::to_string),
        }
    }
}

/// Style configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct StyleConfig {
    /// Page margin on every side, in inches.
    /// Default: 1.0
    #[serde(default = "default_margin")]
    pub margin: f64,

    /// Page width in inches.
    /// Default: 8.5 (US Letter)
    #[serde(default = "default_page_width")]
    pub page_width: f64,

    /// Page height in inches.
    /// Default: 11.0 (US Letter)
    #[serde(default = "default_page_height")]
    pub page_height: f64,

    /// Monospace font for code blocks and inline code.
    /// Default: "Courier New"
    #[serde(default = "default_code_font")]
    pub code_font: String,

    /// Code block font size in points.
    /// Default: 9
    #[serde(default = "default_code_block_size")]
    pub code_block_size: f64,

    /// Code block font color.
    /// Default: "000000"
    #[serde(default = "default_code_block_color")]
    pub code_block_color: String,

    /// Left and right indent of code blocks, in inches.
    /// Default: 0.25
    #[serde(default = "default_code_indent")]
    pub code_indent: f64,

    /// Inline code font size in points.
    /// Default: 10
    #[serde(default = "default_inline_code_size")]
    pub inline_code_size: f64,

    /// Inline code font color.
    /// Default: "C7254E"
    #[serde(default = "default_inline_code_color")]
    pub inline_code_color: String,

    /// Named table style.
    /// Default: "Light Grid Accent 1"
    #[serde(default = "default_table_style")]
    pub table_style: String,

    /// Number of underscores in a horizontal rule.
    /// Default: 80
    #[serde(default = "default_rule_width")]
    pub rule_width: usize,

    /// Prefix of a checked task item.
    #[serde(default = "default_checked_symbol")]
    pub checked_symbol: String,

    /// Prefix of an open task item.
    #[serde(default = "default_unchecked_symbol")]
    pub unchecked_symbol: String,

    /// Heading styles for levels 0 (title) through 3.
    ///
    /// Levels past the end of the list reuse the last entry.
    #[serde(default = "default_headings")]
    pub headings: Vec<HeadingStyle>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            margin: default_margin(),
            page_width: default_page_width(),
            page_height: default_page_height(),
            code_font: default_code_font(),
            code_block_size: default_code_block_size(),
            code_block_color: default_code_block_color(),
            code_indent: default_code_indent(),
            inline_code_size: default_inline_code_size(),
            inline_code_color: default_inline_code_color(),
            table_style: default_table_style(),
            rule_width: default_rule_width(),
            checked_symbol: default_checked_symbol(),
            unchecked_symbol: default_unchecked_symbol(),
            headings: default_headings(),
        }
    }
}

fn default_margin() -> f64 {
    1.0
}

fn default_page_width() -> f64 {
    8.5
}

fn default_page_height() -> f64 {
    11.0
}

fn default_code_font() -> String {
    "Courier New".to_string()
}

fn default_code_block_size() -> f64 {
    9.0
}

fn default_code_block_color() -> String {
    "000000".to_string()
}

fn default_code_indent() -> f64 {
    0.25
}

fn default_inline_code_size() -> f64 {
    10.0
}

fn default_inline_code_color() -> String {
    "C7254E".to_string()
}

fn default_table_style() -> String {
    "Light Grid Accent 1".to_string()
}

fn default_rule_width() -> usize {
    80
}

fn default_checked_symbol() -> String {
    "☑".to_string()
}

fn default_unchecked_symbol() -> String {
    "☐".to_string()
}

fn default_headings() -> Vec<HeadingStyle> {
    vec![
        HeadingStyle::new(24.0, Some("003366")),
        HeadingStyle::new(18.0, Some("0066CC")),
        HeadingStyle::new(14.0, Some("336699")),
        HeadingStyle::new(12.0, None),
    ]
}
