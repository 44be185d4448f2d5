//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output routing, logging setup
//! and the main application runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod logging;
pub mod output;
pub mod presenter;

// Re-export commonly used types
pub use app::{run_export, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, ExportOptions};
pub use logging::init_logging;
pub use output::{OutputError, OutputSink};
pub use presenter::Presenter;
