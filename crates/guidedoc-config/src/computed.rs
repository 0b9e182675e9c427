//! Computed style values.
//!
//! This module contains `ComputedStyle` which holds the style
//! configuration converted to the units a word-processor document uses:
//! twips (1/1440 inch) for lengths and half-points for font sizes.

use crate::style::StyleConfig;

/// Twips per inch.
pub const TWIPS_PER_INCH: f64 = 1440.0;

/// Font settings of a run, in document units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextStyle {
    /// Font family for every script
    pub font: Option<String>,
    /// Size in half-points
    pub size: Option<usize>,
    /// Color as uppercase `RRGGBB`
    pub color: Option<String>,
}

/// Pre-computed style values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedStyle {
    /// Page margin on every side, in twips.
    pub margin: i32,

    /// Page width in twips.
    pub page_width: u32,

    /// Page height in twips.
    pub page_height: u32,

    /// Code block run style.
    pub code_block: TextStyle,

    /// Left and right indent of code blocks, in twips.
    pub code_indent: i32,

    /// Inline code run style.
    pub inline_code: TextStyle,

    /// Run styles for heading levels 0 through 3.
    pub headings: Vec<TextStyle>,

    /// Named table style.
    pub table_style: String,

    /// Horizontal rule text.
    pub rule: String,

    /// Prefix of a checked task item.
    pub checked: String,

    /// Prefix of an open task item.
    pub unchecked: String,
}

impl ComputedStyle {
    /// Compute style values from a StyleConfig.
    ///
    /// # Example
    ///
    /// ```
    /// use guidedoc_config::{ComputedStyle, StyleConfig};
    ///
    /// let computed = ComputedStyle::from_config(&StyleConfig::default());
    /// assert_eq!(computed.margin, 1440);
    /// assert_eq!(computed.code_block.size, Some(18));
    /// ```
    pub fn from_config(config: &StyleConfig) -> Self {
        let code_font = Some(config.code_font.clone());

        let headings = config
            .headings
            .iter()
            .map(|heading| TextStyle {
                font: None,
                size: Some(points_to_half_points(heading.size)),
                color: heading.color.as_deref().and_then(normalize_color),
            })
            .collect();

        Self {
            margin: inches_to_twips(config.margin),
            page_width: inches_to_twips(config.page_width).max(0).unsigned_abs(),
            page_height: inches_to_twips(config.page_height).max(0).unsigned_abs(),
            code_block: TextStyle {
                font: code_font.clone(),
                size: Some(points_to_half_points(config.code_block_size)),
                color: normalize_color(&config.code_block_color),
            },
            code_indent: inches_to_twips(config.code_indent),
            inline_code: TextStyle {
                font: code_font,
                size: Some(points_to_half_points(config.inline_code_size)),
                color: normalize_color(&config.inline_code_color),
            },
            headings,
            table_style: config.table_style.clone(),
            rule: "_".repeat(config.rule_width),
            checked: config.checked_symbol.clone(),
            unchecked: config.unchecked_symbol.clone(),
        }
    }

    /// Run style of a heading level, clamped to the last configured level.
    pub fn heading(&self, level: u8) -> TextStyle {
        self.headings
            .get(usize::from(level))
            .or_else(|| self.headings.last())
            .cloned()
            .unwrap_or_default()
    }
}

/// Convert inches to twips, rounding to the nearest twip.
pub fn inches_to_twips(inches: f64) -> i32 {
    (inches * TWIPS_PER_INCH).round() as i32
}

/// Convert points to half-points, rounding to the nearest half-point.
///
/// Negative sizes clamp to zero.
pub fn points_to_half_points(points: f64) -> usize {
    (points * 2.0).round().max(0.0) as usize
}

/// Normalize a hex color to uppercase `RRGGBB`.
///
/// Accepts an optional leading `#`. Returns `None` for anything that is
/// not six hex digits.
///
/// # Example
///
/// ```
/// use guidedoc_config::normalize_color;
///
/// assert_eq!(normalize_color("#c7254e").as_deref(), Some("C7254E"));
/// assert_eq!(normalize_color("blue"), None);
/// ```
pub fn normalize_color(color: &str) -> Option<String> {
    let hex = color.trim().trim_start_matches('#');
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(hex.to_ascii_uppercase())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::HeadingStyle;

    #[test]
    fn test_unit_conversions() {
        assert_eq!(inches_to_twips(1.0), 1440);
        assert_eq!(inches_to_twips(0.25), 360);
        assert_eq!(inches_to_twips(8.5), 12240);
        assert_eq!(points_to_half_points(9.0), 18);
        assert_eq!(points_to_half_points(10.5), 21);
        assert_eq!(points_to_half_points(-3.0), 0);
    }

    #[test]
    fn test_normalize_color() {
        assert_eq!(normalize_color("003366").as_deref(), Some("003366"));
        assert_eq!(normalize_color(" #0066cc ").as_deref(), Some("0066CC"));
        assert_eq!(normalize_color("12345"), None);
        assert_eq!(normalize_color("GGGGGG"), None);
    }

    #[test]
    fn test_default_computed() {
        let computed = ComputedStyle::from_config(&StyleConfig::default());
        assert_eq!(computed.margin, 1440);
        assert_eq!(computed.page_width, 12240);
        assert_eq!(computed.page_height, 15840);
        assert_eq!(computed.code_indent, 360);
        assert_eq!(computed.code_block.font.as_deref(), Some("Courier New"));
        assert_eq!(computed.code_block.color.as_deref(), Some("000000"));
        assert_eq!(computed.inline_code.size, Some(20));
        assert_eq!(computed.inline_code.color.as_deref(), Some("C7254E"));
        assert_eq!(computed.rule.len(), 80);
        assert!(computed.rule.chars().all(|c| c == '_'));
        assert_eq!(computed.table_style, "Light Grid Accent 1");
    }

    #[test]
    fn test_heading_styles() {
        let computed = ComputedStyle::from_config(&StyleConfig::default());
        assert_eq!(computed.heading(0).size, Some(48));
        assert_eq!(computed.heading(0).color.as_deref(), Some("003366"));
        assert_eq!(computed.heading(2).color.as_deref(), Some("336699"));
        assert_eq!(computed.heading(3).color, None);
        assert_eq!(computed.heading(7), computed.heading(3));
    }

    #[test]
    fn test_invalid_heading_color_dropped() {
        let config = StyleConfig {
            headings: vec![HeadingStyle::new(16.0, Some("navy"))],
            ..Default::default()
        };
        let computed = ComputedStyle::from_config(&config);
        assert_eq!(computed.heading(0).size, Some(32));
        assert_eq!(computed.heading(0).color, None);
    }

    #[test]
    fn test_no_headings_yields_default() {
        let config = StyleConfig {
            headings: Vec::new(),
            ..Default::default()
        };
        let computed = ComputedStyle::from_config(&config);
        assert_eq!(computed.heading(1), TextStyle::default());
    }
}
