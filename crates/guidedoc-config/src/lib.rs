//! Guidedoc Config
//!
//! This crate handles configuration loading and management
//! for guidedoc, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/guidedoc/config.toml`
//! - macOS: `~/Library/Application Support/guidedoc/config.toml`
//! - Windows: `%APPDATA%\guidedoc\config.toml`
//!
//! The configuration lists the conversion jobs to run when no files are
//! given on the command line, a few feature flags, and the document style.
//!
//! # Example
//!
//! ```no_run
//! use guidedoc_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod computed;
mod features;
mod job;
mod style;

pub use computed::{
    inches_to_twips, normalize_color, points_to_half_points, ComputedStyle, TextStyle,
    TWIPS_PER_INCH,
};
pub use features::FeaturesConfig;
pub use job::{Job, OUTPUT_EXTENSION};
pub use style::{HeadingStyle, StyleConfig};

use guidedoc_core::{GuidedocError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[features]
FormatTableCells = false
KeepGoing        = false

[style]
Margin          = 1.0
PageWidth       = 8.5
PageHeight      = 11.0
CodeFont        = "Courier New"
CodeBlockSize   = 9.0
CodeBlockColor  = "000000"
CodeIndent      = 0.25
InlineCodeSize  = 10.0
InlineCodeColor = "C7254E"
TableStyle      = "Light Grid Accent 1"
RuleWidth       = 80
CheckedSymbol   = "☑"
UncheckedSymbol = "☐"
Headings = [
    { Size = 24.0, Color = "003366" },
    { Size = 18.0, Color = "0066CC" },
    { Size = 14.0, Color = "336699" },
    { Size = 12.0 },
]

[[jobs]]
Input  = "HAND_FIXING_GUIDE.md"
Output = "HAND_FIXING_GUIDE.docx"

[[jobs]]
Input  = "FIXING_HAND_ANATOMY.md"
Output = "FIXING_HAND_ANATOMY.docx"

[[jobs]]
Input  = "INSTALLATION_TROUBLESHOOTING.md"
Output = "INSTALLATION_TROUBLESHOOTING.docx"
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Feature flags configuration
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Style configuration
    #[serde(default)]
    pub style: StyleConfig,

    /// Jobs converted when no files are named on the command line
    #[serde(default)]
    pub jobs: Vec<Job>,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use guidedoc_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[features]"));
    /// assert!(toml.contains("[[jobs]]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "guidedoc")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| GuidedocError::Config("Could not determine config directory".into()))?;

        Self::ensure_config_file_in(&config_dir)
    }

    /// Ensures `dir/config.toml` exists, writing the defaults if not.
    ///
    /// An existing file is left untouched.
    pub fn ensure_config_file_in(dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;

        let config_path = dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// The file is layered over the defaults, so any key it leaves out
    /// (including `[[jobs]]`) keeps its default value.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let overlay = Self::parse(&content)
            .map_err(|e| GuidedocError::Config(format!("Parse error in {}: {}", path.display(), e)))?;

        let mut config = Self::default();
        config.merge(overlay)?;
        Ok(config)
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` is provided:
    ///    - If it's a path to an existing file, load and merge it
    ///    - Otherwise, treat it as a TOML string and parse it
    ///
    /// # Example
    ///
    /// ```no_run
    /// use guidedoc_config::Config;
    ///
    /// // Load with inline TOML override
    /// let config = Config::load_with_override(Some("[features]\nKeepGoing = true")).unwrap();
    /// assert!(config.features.keep_going);
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let override_toml = if override_path.exists() {
                std::fs::read_to_string(override_path)?
            } else {
                override_str.to_string()
            };

            let overlay = Self::parse(&override_toml)
                .map_err(|e| GuidedocError::Config(format!("Override parse error: {}", e)))?;

            config.merge(overlay)?;
        }

        Ok(config)
    }

    fn parse(content: &str) -> std::result::Result<toml::Table, toml::de::Error> {
        toml::from_str(content)
    }

    /// Layer a parsed TOML table over this config.
    ///
    /// Only keys present in `overlay` change. Tables merge key by key;
    /// arrays such as `jobs` and `Headings` are replaced whole.
    ///
    /// # Example
    ///
    /// ```
    /// use guidedoc_config::Config;
    ///
    /// let mut base = Config::default();
    /// base.style.table_style = "Table Grid".to_string();
    ///
    /// let overlay: toml::Table = toml::from_str(r#"
    ///     [features]
    ///     FormatTableCells = true
    /// "#).unwrap();
    ///
    /// base.merge(overlay).unwrap();
    /// assert!(base.features.format_table_cells);
    /// assert_eq!(base.style.table_style, "Table Grid");
    /// assert_eq!(base.jobs.len(), 3);
    /// ```
    pub fn merge(&mut self, overlay: toml::Table) -> Result<()> {
        let mut merged = match toml::Value::try_from(&*self) {
            Ok(toml::Value::Table(table)) => table,
            Ok(_) => return Err(GuidedocError::Config("Config is not a TOML table".into())),
            Err(e) => return Err(GuidedocError::Config(format!("Serialization error: {}", e))),
        };

        merge_tables(&mut merged, overlay);

        *self = toml::Value::Table(merged)
            .try_into()
            .map_err(|e| GuidedocError::Config(format!("Invalid config value: {}", e)))?;
        Ok(())
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| GuidedocError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Compute the document style values from this config.
    ///
    /// # Example
    ///
    /// ```
    /// use guidedoc_config::Config;
    /// let computed = Config::default().computed_style();
    /// assert_eq!(computed.table_style, "Light Grid Accent 1");
    /// ```
    pub fn computed_style(&self) -> ComputedStyle {
        ComputedStyle::from_config(&self.style)
    }
}

/// Recursively copy the keys of `overlay` into `base`.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(table) => {
                if let Some(toml::Value::Table(base_table)) = base.get_mut(&key) {
                    merge_tables(base_table, table);
                } else {
                    base.insert(key, toml::Value::Table(table));
                }
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}
