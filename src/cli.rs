//! CLI argument parsing with clap

use crate::config::{Config, Variant};
use crate::error::Result;
use crate::wizard::Action;
use clap::Parser;
use std::path::PathBuf;

/// Step Wizard - a three-step progress panel for the terminal
///
/// Without arguments the wizard runs interactively. With `--actions` it
/// replays the given actions on a fresh wizard and prints the result.
#[derive(Parser, Debug, Default)]
#[command(name = "step-wizard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file (TOML format)
    ///
    /// CLI arguments override config file settings.
    #[arg(short = 'C', long, env = "STEP_WIZARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Navigation control variant
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Button foreground color (#rgb or #rrggbb)
    #[arg(long)]
    pub color: Option<String>,

    /// Button background color (#rgb or #rrggbb)
    #[arg(long)]
    pub bgcolor: Option<String>,

    /// Replay actions headlessly and print the resulting view
    /// (comma separated: toggle, previous, next)
    #[arg(short, long, value_enum, value_delimiter = ',', num_args = 1..)]
    pub actions: Option<Vec<Action>>,

    /// Print a sample configuration file and exit
    #[arg(long)]
    pub print_config: bool,

    /// Write the effective configuration (file plus CLI overrides) to FILE and exit
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Do not capture mouse events
    #[arg(long)]
    pub no_mouse: bool,

    /// Directory for log files
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output log format as JSON
    #[arg(long)]
    pub json_log: bool,
}

impl Cli {
    /// Whether the interactive terminal UI should run
    pub fn is_interactive(&self) -> bool {
        self.actions.is_none() && !self.print_config && self.save_config.is_none()
    }

    /// Merge CLI arguments with config from file
    /// CLI arguments take precedence over config file settings
    pub fn merge_with_config(&self, mut config: Config) -> Config {
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if let Some(ref color) = self.color {
            config.button.color = color.clone();
        }
        if let Some(ref bgcolor) = self.bgcolor {
            config.button.bgcolor = bgcolor.clone();
        }
        if self.no_mouse {
            config.mouse = false;
        }
        if let Some(ref log_dir) = self.log_dir {
            config.log_dir = Some(log_dir.clone());
        }
        if self.verbose {
            config.verbose = true;
        }

        config
    }

    /// Load the config file (if any), apply CLI overrides and validate
    pub fn load_config(&self) -> Result<Config> {
        let base = match self.config {
            Some(ref path) => Config::load_from_file(path)?,
            None => Config::default(),
        };

        let config = self.merge_with_config(base);
        config.validate()?;
        Ok(config)
    }
}
