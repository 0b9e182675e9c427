//! Guidedoc - converts Markdown guide documents into Word documents.
//!
//! This binary provides the CLI interface to the guidedoc library. It
//! converts the files named on the command line, or the jobs listed in
//! the configuration when none are given.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::io::{self, Write};

use guidedoc::{run_batch, Config, Result};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Guidedoc v{}", env!("CARGO_PKG_VERSION"));

    // Handle --init-config flag
    if cli.init_config {
        match Config::ensure_config_file() {
            Ok(path) => println!("{}", path.display()),
            Err(e) => {
                error!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
///
/// Returns `Ok(false)` when some files failed under keep-going.
fn run(cli: &Cli) -> Result<bool> {
    let config = load_config(cli)?;
    debug!("Loaded config with features: {:?}", config.features);

    let jobs = cli.jobs(&config);
    debug!("{} conversion jobs", jobs.len());

    if let Some(dir) = &cli.out_dir {
        std::fs::create_dir_all(dir)?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = run_batch(&jobs, &config, &mut out)?;

    if report.is_success() {
        writeln!(out, "\nConversion complete!")?;
        Ok(true)
    } else {
        error!(
            "{} of {} conversions failed",
            report.failed.len(),
            jobs.len()
        );
        Ok(false)
    }
}

/// Load configuration with optional overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_with_override(cli.config.as_deref())?;

    if cli.keep_going {
        config.features.keep_going = true;
    }

    Ok(config)
}
