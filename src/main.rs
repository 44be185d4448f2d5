//! cclip CLI entry point

use std::process::ExitCode;

use clap::Parser;

use cclip::cli::{
    app::{load_default_config, run_export, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    init_logging, ExportOptions, Presenter,
};
use cclip::domain::config::{AppConfig, ClipboardBackend};
use cclip::domain::error::ConfigError;
use cclip::infrastructure::XdgConfigStore;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        return match handle_config_command(action, &store, &presenter) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e @ ConfigError::ValidationError { .. }) => {
                presenter.error(&e.to_string());
                ExitCode::from(EXIT_USAGE_ERROR)
            }
            Err(e) => {
                presenter.error(&e.to_string());
                ExitCode::from(EXIT_ERROR)
            }
        };
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        format: cli.format.clone(),
        all: if cli.all { Some(true) } else { None },
        json: if cli.json { Some(true) } else { None },
        backend: cli.backend.map(|b| ClipboardBackend::from(b).to_string()),
        aliases: None,
    };

    // Merge config
    let config = load_default_config(cli_config);

    let backend = match config.backend() {
        Ok(b) => b,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let options = ExportOptions {
        list: cli.list,
        json: config.json_or_default(),
        all: config.all_or_default(),
        format: config.format_or_default().to_string(),
        output: cli.output,
        backend,
    };

    run_export(options, &config)
}
