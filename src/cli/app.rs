//! Main app runner for export mode

use std::env;
use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::ExportUseCase;
use crate::domain::config::AppConfig;
use crate::infrastructure::{create_clipboard, XdgConfigStore};

use super::args::ExportOptions;
use super::output::OutputSink;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable overriding the single-format target
pub const ENV_FORMAT: &str = "CCLIP_FORMAT";
/// Environment variable overriding the clipboard backend
pub const ENV_BACKEND: &str = "CCLIP_BACKEND";

/// Capture the clipboard once and write the requested output.
///
/// Nothing is written unless the whole snapshot was captured. A requested
/// format that is not on the clipboard exits successfully with no output.
pub fn run_export(options: ExportOptions, config: &AppConfig) -> ExitCode {
    let presenter = Presenter::new();
    let mode = options.mode();
    tracing::debug!(?mode, backend = %options.backend, "starting export");

    let clipboard = match create_clipboard(options.backend, config.aliases_or_default()) {
        Ok(clipboard) => clipboard,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let use_case = ExportUseCase::new(clipboard);
    let output = match use_case.execute(&mode) {
        Ok(output) => output,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let sink = OutputSink::from_path(options.output);
    match sink.write(&output) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Read the environment layer of the configuration
pub fn env_config() -> AppConfig {
    AppConfig {
        format: env::var(ENV_FORMAT).ok().filter(|s| !s.is_empty()),
        backend: env::var(ENV_BACKEND).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    }
}

/// Load and merge configuration from file, env, and CLI
pub fn load_merged_config<S: ConfigStore>(store: &S, cli_config: AppConfig) -> AppConfig {
    let file_config = store.load().unwrap_or_else(|e| {
        Presenter::new().warn(&format!("{} (using defaults)", e));
        AppConfig::empty()
    });

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config())
        .merge(cli_config)
}

/// Load merged configuration from the default XDG location
pub fn load_default_config(cli_config: AppConfig) -> AppConfig {
    load_merged_config(&XdgConfigStore::new(), cli_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn cli_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "format = \"Csv\"\njson = true\n").unwrap();
        let store = XdgConfigStore::with_path(&path);

        let cli = AppConfig {
            json: Some(false),
            ..Default::default()
        };
        let config = load_merged_config(&store, cli);

        assert!(!config.json_or_default());
        assert!(!config.all_or_default());
        // CCLIP_FORMAT may be set by the caller's environment
        if env::var(ENV_FORMAT).map(|v| v.is_empty()).unwrap_or(true) {
            assert_eq!(config.format_or_default(), "Csv");
        }
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "this is not toml =").unwrap();
        let store = XdgConfigStore::with_path(&path);

        let config = load_merged_config(&store, AppConfig::empty());
        assert!(!config.json_or_default());
        assert!(config.aliases.is_none());
    }
}
