//! Conversion jobs.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Extension of generated documents.
pub const OUTPUT_EXTENSION: &str = "docx";

/// One input file and the document it converts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Job {
    /// Markdown source
    pub input: PathBuf,
    /// Generated document
    pub output: PathBuf,
}

impl Job {
    /// Create a job with explicit paths.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Create a job whose output is the input with a `.docx` extension.
    ///
    /// With `out_dir`, the output keeps only its file name and is placed
    /// in that directory.
    ///
    /// # Example
    ///
    /// ```
    /// use guidedoc_config::Job;
    /// use std::path::Path;
    ///
    /// let job = Job::for_input("docs/GUIDE.md", None);
    /// assert_eq!(job.output, Path::new("docs/GUIDE.docx"));
    ///
    /// let job = Job::for_input("docs/GUIDE.md", Some(Path::new("out")));
    /// assert_eq!(job.output, Path::new("out/GUIDE.docx"));
    /// ```
    pub fn for_input(input: impl Into<PathBuf>, out_dir: Option<&Path>) -> Self {
        let input = input.into();
        let mut output = match (out_dir, input.file_name()) {
            (Some(dir), Some(name)) => dir.join(name),
            _ => input.clone(),
        };
        output.set_extension(OUTPUT_EXTENSION);
        Self { input, output }
    }
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.input.display(), self.output.display())
    }
}
