//! Step Wizard - a three-step progress panel for the terminal
//!
//! Runs the interactive Ratatui wizard, or replays scripted actions and
//! prints the resulting view when `--actions` is given. `--print-config`
//! and `--save-config` handle configuration files and exit.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::path::{Path, PathBuf};
use step_wizard::{Action, Cli, Config, StepWizard, TuiApp, display_view, init_locale};
use tracing::{Level, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", Config::sample_config());
        return Ok(());
    }

    let config = cli.load_config()?;

    if let Some(ref path) = cli.save_config {
        config
            .save_to_file(path)
            .with_context(|| format!("Failed to save config to {}", path.display()))?;
        println!("Configuration written to {}", path.display());
        return Ok(());
    }

    let log_dir = match config.log_dir {
        Some(ref dir) => dir.clone(),
        None => get_executable_dir()?.join("Log"),
    };

    if cli.is_interactive() {
        return run_interactive_mode(&config, &log_dir);
    }

    let actions = cli.actions.as_deref().unwrap_or_default();
    run_cli_mode(&cli, &config, actions, &log_dir)
}

/// Run in interactive mode with Ratatui TUI
fn run_interactive_mode(config: &Config, log_dir: &Path) -> Result<()> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = log_dir.join(format!("Interactive_{}.log", timestamp));

    // Setup file-only logging before TUI starts
    let _guard = setup_file_only_logging(&log_path, config.verbose)?;

    // Initialize locale based on system settings
    let language = init_locale();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        variant = ?config.variant,
        mouse = config.mouse,
        locale = language.code(),
        "Step Wizard starting in interactive mode"
    );

    let mut app = TuiApp::new(config).context("Failed to start the terminal UI")?;
    let wizard = app.run()?;

    info!(
        step = %wizard.step(),
        is_open = wizard.is_open(),
        log_file = %log_path.display(),
        "Interactive session complete"
    );

    Ok(())
}

/// Replay actions headlessly and print the resulting view
fn run_cli_mode(cli: &Cli, config: &Config, actions: &[Action], log_dir: &Path) -> Result<()> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = log_dir.join(format!("CLIRun_{}.log", timestamp));

    let _guard = setup_logging(cli, config.verbose, &log_path)?;

    // Headless output is pinned to English; only logged for reference
    let language = init_locale();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        actions = actions.len(),
        locale = language.code(),
        "Replaying actions"
    );

    let mut wizard = StepWizard::new();
    for &action in actions {
        wizard.apply(action);
    }

    display_view(&wizard.render(), config.variant);

    info!(
        step = %wizard.step(),
        is_open = wizard.is_open(),
        "Replay complete"
    );

    Ok(())
}

/// Get the directory where the executable is located
fn get_executable_dir() -> Result<PathBuf> {
    let exe_path = std::env::current_exe()?;
    Ok(exe_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Open (truncate) the log file, creating its directory
fn open_log_file(log_path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    Ok(file)
}

fn env_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}

/// Setup logging for CLI mode (file + console)
fn setup_logging(cli: &Cli, verbose: bool, log_path: &Path) -> Result<WorkerGuard> {
    let file = open_log_file(log_path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let subscriber = tracing_subscriber::registry().with(env_filter(verbose));

    if cli.json_log {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(guard)
}

/// Setup logging for interactive mode (file only, no console)
fn setup_file_only_logging(log_path: &Path, verbose: bool) -> Result<WorkerGuard> {
    let file = open_log_file(log_path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .init();

    Ok(guard)
}
