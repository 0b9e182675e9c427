//! Command-line interface for Guidedoc.

use clap::Parser;
use guidedoc::{Config, Job};
use std::path::PathBuf;

/// Guidedoc - converts Markdown guide documents into Word documents.
///
/// With no files, converts the jobs listed in the configuration.
#[derive(Parser, Debug)]
#[command(
    name = "guidedoc",
    author = "Guidedoc Contributors",
    version,
    about = "Converts Markdown guide documents into Word (.docx) documents",
    after_help = "Examples:\n  \
                  guidedoc\n  \
                  guidedoc GUIDE.md NOTES.md -o build\n  \
                  guidedoc --keep-going -c custom.toml"
)]
pub struct Cli {
    /// Markdown files to convert (converts the configured jobs if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Directory for generated documents (default: next to each input)
    #[arg(short = 'o', long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Continue with the remaining files after a failure
    #[arg(long = "keep-going")]
    pub keep_going: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,

    /// Write the default config file if missing, print its path and exit
    #[arg(long = "init-config")]
    pub init_config: bool,
}

impl Cli {
    /// Jobs to run: one per named file, or the configured jobs.
    pub fn jobs(&self, config: &Config) -> Vec<Job> {
        if self.files.is_empty() {
            return config.jobs.clone();
        }

        self.files
            .iter()
            .map(|file| Job::for_input(file, self.out_dir.as_deref()))
            .collect()
    }
}

/// Show paths information.
pub fn show_paths() {
    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
