//! Feature flags configuration.
//!
//! This module contains the `FeaturesConfig` struct which holds
//! the boolean switches that change conversion behavior.

use serde::{Deserialize, Serialize};

/// Feature flags configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Run table cells through the inline formatter.
    /// Default: false (cells are written as raw text)
    #[serde(default)]
    pub format_table_cells: bool,

    /// Keep converting the remaining jobs after one fails.
    /// Default: false (the first failure aborts the batch)
    #[serde(default)]
    pub keep_going: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let features = FeaturesConfig::default();
        assert!(!features.format_table_cells);
        assert!(!features.keep_going);
    }

    #[test]
    fn test_serde_pascal_case() {
        let toml_str = r#"
            FormatTableCells = true
            KeepGoing = true
        "#;

        let features: FeaturesConfig = toml::from_str(toml_str).unwrap();
        assert!(features.format_table_cells);
        assert!(features.keep_going);
    }

    #[test]
    fn test_partial_table() {
        let features: FeaturesConfig = toml::from_str("KeepGoing = true").unwrap();
        assert!(!features.format_table_cells);
        assert!(features.keep_going);
    }
}
