//! User intents understood by the wizard

use std::fmt;

/// Wizard action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Action {
    /// Open or close the panel
    #[value(aliases = ["close", "open"])]
    Toggle,
    /// Go back one step
    #[value(alias = "prev")]
    Previous,
    /// Go forward one step
    Next,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Toggle => "toggle",
            Action::Previous => "previous",
            Action::Next => "next",
        };
        f.write_str(name)
    }
}
