//! Step Wizard - a three-step progress panel for the terminal
//!
//! This library provides:
//! - A bounded three-step wizard with a collapsible panel
//! - A pure view model of the wizard state
//! - A Ratatui terminal UI with keyboard and mouse control
//! - A headless text renderer for scripted action replay

// Initialize i18n with locale files
rust_i18n::i18n!("locales", fallback = "en");

pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod tui;
pub mod wizard;

pub use cli::Cli;
pub use config::{ButtonColors, Config, ConfigError, Variant};
pub use error::{Error, Result};
pub use i18n::init_locale;
pub use tui::{TuiApp, display_view, render_text};
pub use wizard::{Action, Step, StepWizard, WizardView};
