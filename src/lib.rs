//! Guidedoc - converts Markdown guide documents into Word documents.
//!
//! The conversion pipeline is:
//!
//! 1. read the Markdown source,
//! 2. classify it into blocks ([`guidedoc_parser::classify`]),
//! 3. render the blocks onto a [`DocxSink`] ([`guidedoc_render::Renderer`]),
//! 4. pack and save the document.
//!
//! # Example
//!
//! ```no_run
//! use guidedoc::{convert_file, Config};
//! use std::path::Path;
//!
//! let config = Config::default();
//! convert_file(Path::new("GUIDE.md"), Path::new("GUIDE.docx"), &config).unwrap();
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use log::{error, info, warn};

pub use guidedoc_config::{Config, Job};
pub use guidedoc_core::{GuidedocError, Result};
pub use guidedoc_render::DocxSink;

use guidedoc_parser::classify;
use guidedoc_render::{RenderFeatures, Renderer};

/// Render Markdown text into an unsaved document.
///
/// Returns the sink and the number of blocks rendered.
pub fn convert_str(markdown: &str, config: &Config) -> (DocxSink, usize) {
    let style = config.computed_style();
    let features = RenderFeatures::from_config(&config.features);

    let sink = DocxSink::new(&style);
    let mut renderer = Renderer::with_features(sink, style, features);
    let blocks = renderer.render_all(classify(markdown));

    (renderer.into_sink(), blocks)
}

/// Convert one Markdown file into a `.docx` file.
///
/// The input is read before any document is created, so an unreadable
/// input leaves no output behind. Returns the number of blocks rendered.
pub fn convert_file(input: &Path, output: &Path, config: &Config) -> Result<usize> {
    let markdown = std::fs::read_to_string(input).map_err(|source| GuidedocError::Input {
        path: input.to_path_buf(),
        source,
    })?;

    let (sink, blocks) = convert_str(&markdown, config);
    sink.save(output)?;

    info!("{}: {} blocks -> {}", input.display(), blocks, output.display());
    Ok(blocks)
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Outputs written, in job order
    pub created: Vec<PathBuf>,
    /// Jobs that failed, with their errors
    pub failed: Vec<(Job, GuidedocError)>,
}

impl BatchReport {
    /// Check if every job succeeded.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Convert every job in order, printing `Created: <output>` to `out` after
/// each file.
///
/// Without `features.keep_going` the first failure is returned as the
/// error. With it, failures are logged and collected in the report.
pub fn run_batch<W: Write>(jobs: &[Job], config: &Config, out: &mut W) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    if jobs.is_empty() {
        warn!("no conversion jobs configured");
    }

    for job in jobs {
        info!("converting {}", job);

        match convert_file(&job.input, &job.output, config) {
            Ok(_) => {
                writeln!(out, "Created: {}", job.output.display())?;
                report.created.push(job.output.clone());
            }
            Err(e) if config.features.keep_going => {
                error!("{}: {}", job.input.display(), e);
                report.failed.push((job.clone(), e));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}
