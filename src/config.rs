//! Configuration types for the step wizard

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Presentation variant of the navigation controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Plain labels styled inline: "Previous" / "Next"
    Plain,
    /// Labels composed through the button component: "👈 Previous" / "Next 👉"
    #[default]
    Composed,
}

/// Button colors, as CSS-style hex strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonColors {
    /// Foreground color
    pub color: String,
    /// Background color
    pub bgcolor: String,
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self {
            color: "#fff".into(),
            bgcolor: "#7950f2".into(),
        }
    }
}

impl ButtonColors {
    /// Foreground as a terminal color
    pub fn fg(&self) -> Result<Color, ConfigError> {
        parse_hex_color(&self.color)
    }

    /// Background as a terminal color
    pub fn bg(&self) -> Result<Color, ConfigError> {
        parse_hex_color(&self.bgcolor)
    }
}

/// Configuration for the step wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Navigation control variant
    pub variant: Variant,

    /// Button colors
    pub button: ButtonColors,

    /// Capture mouse clicks in the terminal
    pub mouse: bool,

    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,

    /// Directory for log files (defaults to `Log/` next to the executable)
    pub log_dir: Option<PathBuf>,

    /// Verbose logging
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            button: ButtonColors::default(),
            mouse: true,
            tick_rate_ms: 50,
            log_dir: None,
            verbose: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError { source: e })?;

        fs::write(path, content).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.button.fg()?;
        self.button.bg()?;
        Ok(())
    }

    /// Generate a commented sample configuration
    pub fn sample_config() -> String {
        r##"# Step Wizard Configuration

# Navigation control variant:
# - "plain": Previous / Next
# - "composed": 👈 Previous / Next 👉
variant = "composed"

# Capture mouse clicks on the wizard controls
mouse = true

# Event poll interval in milliseconds
tick_rate_ms = 50

# Verbose (debug level) logging
verbose = false

# Directory for log files; defaults to Log/ next to the executable
# log_dir = "Log"

[button]
# Hex colors, #rgb or #rrggbb
color = "#fff"
bgcolor = "#7950f2"
"##
        .to_string()
    }
}

/// Parse `#rgb` or `#rrggbb` into an RGB terminal color
pub fn parse_hex_color(value: &str) -> Result<Color, ConfigError> {
    let invalid = || ConfigError::InvalidColor {
        value: value.to_string(),
    };

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

    match hex.len() {
        3 => {
            // #abc expands to #aabbcc
            let expand = |i: usize| channel(&hex[i..=i].repeat(2));
            Ok(Color::Rgb(expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Ok(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => Err(invalid()),
    }
}

/// Errors that can occur when loading or saving configuration
#[derive(Debug)]
pub enum ConfigError {
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    SerializeError {
        source: toml::ser::Error,
    },
    InvalidColor {
        value: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError { path, source } => {
                write!(f, "Failed to read config file {}: {}", path.display(), source)
            }
            ConfigError::ParseError { path, source } => {
                write!(f, "Failed to parse config file {}: {}", path.display(), source)
            }
            ConfigError::WriteError { path, source } => {
                write!(f, "Failed to write config file {}: {}", path.display(), source)
            }
            ConfigError::SerializeError { source } => {
                write!(f, "Failed to serialize config: {}", source)
            }
            ConfigError::InvalidColor { value } => {
                write!(f, "Invalid color {:?}, expected #rgb or #rrggbb", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::WriteError { source, .. } => Some(source),
            ConfigError::SerializeError { source } => Some(source),
            ConfigError::InvalidColor { .. } => None,
        }
    }
}
