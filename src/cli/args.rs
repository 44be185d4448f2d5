//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::application::ExportMode;
use crate::domain::clip::FormatFilter;
use crate::domain::config::ClipboardBackend;

/// cclip - print the clipboard, one format or all of them
#[derive(Parser, Debug)]
#[command(name = "cclip")]
#[command(version)]
#[command(about = "Print clipboard contents as text, or every clipboard format as JSON")]
#[command(long_about = None)]
pub struct Cli {
    /// List the formats currently on the clipboard
    ///
    /// Names are portable (Text, Bitmap, ...). Add -v to log the native
    /// format each one was read from.
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Include every format in JSON output, not only the common ones
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Print all formats as a JSON array
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Write output to a file instead of stdout (binary data is written raw)
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Format to print when not in JSON mode (default: Text)
    #[arg(short = 'f', long, value_name = "NAME")]
    pub format: Option<String>,

    /// Clipboard backend
    #[arg(long, value_name = "BACKEND")]
    pub backend: Option<BackendArg>,

    /// Log more to stderr (-v debug, -vv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Native,
    Arboard,
}

impl From<BackendArg> for ClipboardBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Native => ClipboardBackend::Native,
            BackendArg::Arboard => ClipboardBackend::Arboard,
        }
    }
}

/// Parsed export options
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub list: bool,
    pub json: bool,
    pub all: bool,
    pub format: String,
    pub output: Option<PathBuf>,
    pub backend: ClipboardBackend,
}

impl ExportOptions {
    /// Pick the export mode. Listing wins over JSON, JSON over single format.
    pub fn mode(&self) -> ExportMode {
        if self.list {
            ExportMode::ListFormats
        } else if self.json {
            ExportMode::Json {
                filter: FormatFilter::from_all_flag(self.all),
            }
        } else {
            ExportMode::Single {
                format: self.format.clone(),
            }
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["format", "all", "json", "backend"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
