//! Integration tests for guidedoc.
//!
//! These tests convert real guide documents end to end and inspect the
//! generated `.docx` packages.

use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::process::Command;

use guidedoc::{convert_file, run_batch, Config, GuidedocError, Job};

/// Path of a fixture document.
fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Read one XML part out of a `.docx` file.
fn read_part(docx: &Path, name: &str) -> String {
    let bytes = fs::read(docx).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut content = String::new();
    part.read_to_string(&mut content).unwrap();
    content
}

/// The `guidedoc` binary, isolated from the user's config directory.
fn guidedoc(home: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_guidedoc"));
    command
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"));
    command
}

fn write_markdown(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// Single-file conversion
// =============================================================================

#[test]
fn test_convert_fixture_guide() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("guide.docx");

    let blocks = convert_file(
        &fixture("INSTALLATION_TROUBLESHOOTING.md"),
        &output,
        &Config::default(),
    )
    .unwrap();
    assert!(blocks > 20);

    let document = read_part(&output, "word/document.xml");
    for text in [
        "Installation Troubleshooting",
        "most common",
        "python -m venv .venv",
        "ModuleNotFoundError",
        "Virtual environment created",
        "Still stuck?",
    ] {
        assert!(document.contains(text), "missing {text:?}");
    }

    // Checkbox symbols and the rule line
    assert!(document.contains("☑"));
    assert!(document.contains("☐"));
    assert!(document.contains(&"_".repeat(80)));

    // Styles, table and list numbering
    assert!(document.contains("Title"));
    assert!(document.contains("Heading1"));
    assert!(document.contains("w:tbl"));
    assert!(document.contains("w:numPr"));
}

#[test]
fn test_code_block_text_is_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_markdown(
        dir.path(),
        "code.md",
        "```\n# not a heading\n- not a bullet\n```\n",
    );
    let output = dir.path().join("code.docx");

    convert_file(&input, &output, &Config::default()).unwrap();

    let document = read_part(&output, "word/document.xml");
    assert!(document.contains("# not a heading"));
    assert!(document.contains("- not a bullet"));
    assert!(!document.contains("Heading"));
}

#[test]
fn test_table_cells_raw_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_markdown(dir.path(), "table.md", "| A |\n|---|\n| **x** |\n");
    let output = dir.path().join("table.docx");

    convert_file(&input, &output, &Config::default()).unwrap();
    assert!(read_part(&output, "word/document.xml").contains("**x**"));

    let mut config = Config::default();
    config.features.format_table_cells = true;
    convert_file(&input, &output, &config).unwrap();
    assert!(!read_part(&output, "word/document.xml").contains("**x**"));
}

#[test]
fn test_custom_table_style() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_markdown(dir.path(), "t.md", "| A | B |\n| 1 | 2 |\n");
    let output = dir.path().join("t.docx");

    let mut config = Config::default();
    config.style.table_style = "Table Grid".to_string();
    convert_file(&input, &output, &config).unwrap();

    assert!(read_part(&output, "word/styles.xml").contains("Table Grid"));
    assert!(read_part(&output, "word/document.xml").contains("TableGrid"));
}

#[test]
fn test_missing_input_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing.docx");

    let err = convert_file(&dir.path().join("missing.md"), &output, &Config::default())
        .unwrap_err();

    assert!(matches!(err, GuidedocError::Input { .. }));
    assert!(err.to_string().contains("missing.md"));
    assert!(!output.exists());
}

// =============================================================================
// Batch driver
// =============================================================================

#[test]
fn test_batch_reports_created_files() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_markdown(dir.path(), "a.md", "# A\n");
    let b = write_markdown(dir.path(), "b.md", "# B\n");
    let jobs = vec![Job::for_input(&a, None), Job::for_input(&b, None)];

    let mut out = Vec::new();
    let report = run_batch(&jobs, &Config::default(), &mut out).unwrap();

    assert!(report.is_success());
    assert_eq!(report.created.len(), 2);
    let printed = String::from_utf8(out).unwrap();
    assert_eq!(
        printed,
        format!(
            "Created: {}\nCreated: {}\n",
            jobs[0].output.display(),
            jobs[1].output.display()
        )
    );
    assert!(dir.path().join("a.docx").exists());
    assert!(dir.path().join("b.docx").exists());
}

#[test]
fn test_batch_aborts_on_first_error() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_markdown(dir.path(), "good.md", "text\n");
    let jobs = vec![
        Job::for_input(dir.path().join("missing.md"), None),
        Job::for_input(&good, None),
    ];

    let mut out = Vec::new();
    let err = run_batch(&jobs, &Config::default(), &mut out).unwrap_err();

    assert!(matches!(err, GuidedocError::Input { .. }));
    assert!(out.is_empty());
    assert!(!dir.path().join("good.docx").exists());
}

#[test]
fn test_batch_keep_going() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_markdown(dir.path(), "good.md", "text\n");
    let jobs = vec![
        Job::for_input(dir.path().join("missing.md"), None),
        Job::for_input(&good, None),
    ];

    let mut config = Config::default();
    config.features.keep_going = true;

    let mut out = Vec::new();
    let report = run_batch(&jobs, &config, &mut out).unwrap();

    assert!(!report.is_success());
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, jobs[0]);
    assert_eq!(report.created, vec![dir.path().join("good.docx")]);
}

// =============================================================================
// Binary
// =============================================================================

#[test]
fn test_binary_converts_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_markdown(dir.path(), "guide.md", "# Guide\n\n- step\n");
    let out_dir = dir.path().join("build");

    let output = guidedoc(dir.path())
        .arg(&input)
        .arg("-o")
        .arg(&out_dir)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created: "));
    assert!(stdout.trim_end().ends_with("Conversion complete!"));
    assert!(out_dir.join("guide.docx").exists());
}

#[test]
fn test_binary_exits_nonzero_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let output = guidedoc(dir.path())
        .arg(dir.path().join("missing.md"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Conversion complete!"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_binary_reads_user_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join(".config").join("guidedoc");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[style]\nTableStyle = \"Table Grid\"\n",
    )
    .unwrap();
    let input = write_markdown(dir.path(), "t.md", "| A |\n| 1 |\n");

    let output = guidedoc(dir.path())
        .arg(&input)
        .arg("-c")
        .arg("[features]\nKeepGoing = true")
        .output()
        .unwrap();

    assert!(output.status.success());
    let docx = dir.path().join("t.docx");
    assert!(read_part(&docx, "word/document.xml").contains("TableGrid"));
}

#[cfg(unix)]
#[test]
fn test_binary_init_config() {
    let dir = tempfile::tempdir().unwrap();

    let output = guidedoc(dir.path()).arg("--init-config").output().unwrap();

    assert!(output.status.success());
    let path = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());
    assert!(path.ends_with("config.toml"));
    assert_eq!(fs::read_to_string(&path).unwrap(), Config::default_toml());
}

#[test]
fn test_binary_keep_going_still_fails() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_markdown(dir.path(), "good.md", "text\n");

    let output = guidedoc(dir.path())
        .arg(dir.path().join("missing.md"))
        .arg(&good)
        .arg("--keep-going")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(dir.path().join("good.docx").exists());
}
