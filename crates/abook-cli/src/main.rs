mod commands;
mod error;
mod shell;
mod util;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::error::{exit_code_for, report_error};
use crate::shell::Shell;
use abook_config as config;
use abook_config::AppConfig;
use abook_store::{paths, persist};

#[derive(Debug, Parser)]
#[command(name = "abook", version, about = "interactive address book")]
struct Cli {
    /// Contact book snapshot file (defaults to the XDG data dir).
    #[arg(long)]
    data_path: Option<PathBuf>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let app_config = config::load(cli.config).with_context(|| "load config")?;
    let data_path = resolve_data_path(cli.data_path, &app_config)?;
    debug!(path = %data_path.display(), "contact book path resolved");

    // A load failure at startup is fatal: there is no book to operate on.
    let mut book = persist::load_or_default(&data_path)
        .with_context(|| format!("load contact book {}", data_path.display()))?;
    debug!(contacts = book.len(), "contact book loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());
    shell.run(&mut book, &app_config, &data_path)
}

fn resolve_data_path(flag: Option<PathBuf>, config: &AppConfig) -> Result<PathBuf> {
    match flag.or_else(|| config.data_path.clone()) {
        Some(path) => Ok(path),
        None => Ok(paths::book_path()?),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
