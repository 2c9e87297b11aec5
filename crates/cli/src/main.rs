//! noteport CLI: convert Obsidian notes into Hexo posts.
//!
//! - `noteport NOTE.md`: convert one note
//! - `noteport NOTE.md --siblings`: convert every note in its folder
//! - `noteport FOLDER`: convert every note in a folder

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use noteport_cli::{
    BatchOptions, ConsoleReporter, Converter, FsVault, Reporter, VaultError,
    convert_folder, convert_siblings,
};
use noteport_hexo::ConvertOptions;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Vault(#[from] VaultError),

    #[error("{0}")]
    Validation(String),
}

/// Convert Obsidian notes (wiki links, embeds, callouts) into Hexo posts.
#[derive(Parser)]
#[command(name = "noteport", version, about)]
struct Cli {
    /// Note to convert, or a folder whose notes should all be converted.
    path: PathBuf,

    /// Convert every note in the same folder as PATH.
    #[arg(long)]
    siblings: bool,

    /// Write artifacts into DIR instead of next to each note.
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Omit the callout <style> block.
    #[arg(long)]
    no_style: bool,

    /// Omit the Hexo front matter.
    #[arg(long)]
    no_front_matter: bool,

    /// Number of worker threads for folder conversion.
    #[arg(short, long, env = "NOTEPORT_JOBS")]
    jobs: Option<usize>,

    /// Enable info-level logging (otherwise RUST_LOG, default warn).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(LevelFilter::Info)
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let reporter = ConsoleReporter::new();
    match run(&cli, &reporter) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            reporter.report_failure(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every requested conversion succeeded.
fn run(cli: &Cli, reporter: &dyn Reporter) -> Result<bool, CliError> {
    if !cli.path.exists() {
        return Err(CliError::Validation(format!(
            "{} does not exist",
            cli.path.display()
        )));
    }

    let options = ConvertOptions {
        front_matter: !cli.no_front_matter,
        style: !cli.no_style,
    };
    let mut converter = Converter::new(FsVault::new()).with_options(options);
    if let Some(dir) = &cli.output {
        std::fs::create_dir_all(dir)?;
        converter = converter.with_output_dir(dir);
    }

    let batch_options = BatchOptions {
        max_threads: cli.jobs,
    };
    let timestamp = chrono::Local::now().naive_local();

    if cli.path.is_dir() {
        let report = convert_folder(&converter, &cli.path, timestamp, &batch_options, reporter)?;
        return Ok(report.all_succeeded());
    }

    if cli.siblings {
        let report =
            convert_siblings(&converter, &cli.path, timestamp, &batch_options, reporter)?;
        return Ok(report.all_succeeded());
    }

    reporter.report("Converting note...");
    Ok(converter
        .convert_and_report(&cli.path, timestamp, reporter)
        .is_some())
}
