//! Render feature switches.

use guidedoc_config::FeaturesConfig;

/// Feature flags that change how blocks are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderFeatures {
    /// Run table cells through the inline formatter
    pub format_table_cells: bool,
}

impl RenderFeatures {
    /// Take the render-relevant flags from the configuration.
    pub fn from_config(config: &FeaturesConfig) -> Self {
        Self {
            format_table_cells: config.format_table_cells,
        }
    }
}
