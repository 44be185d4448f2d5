//! Application configuration value object

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::clip::DEFAULT_FORMAT;
use crate::domain::error::InvalidBackendError;

use super::backend::ClipboardBackend;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Target format for single-format mode
    pub format: Option<String>,
    /// Emit every format instead of the common ones
    pub all: Option<bool>,
    /// Emit JSON instead of a single format
    pub json: Option<bool>,
    /// Clipboard backend name
    pub backend: Option<String>,
    /// Extra platform-name to portable-name mappings
    pub aliases: Option<BTreeMap<String, String>>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            format: Some(DEFAULT_FORMAT.to_string()),
            all: Some(false),
            json: Some(false),
            backend: Some(ClipboardBackend::default().to_string()),
            aliases: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            format: other.format.or(self.format),
            all: other.all.or(self.all),
            json: other.json.or(self.json),
            backend: other.backend.or(self.backend),
            aliases: Self::merge_aliases(self.aliases, other.aliases),
        }
    }

    /// Merge alias tables, entries from `other` win
    fn merge_aliases(
        base: Option<BTreeMap<String, String>>,
        other: Option<BTreeMap<String, String>>,
    ) -> Option<BTreeMap<String, String>> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(mut b), Some(o)) => {
                b.extend(o);
                Some(b)
            }
        }
    }

    /// Get target format, or "Text" if not set
    pub fn format_or_default(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_FORMAT)
    }

    /// Get all-formats setting, or false if not set
    pub fn all_or_default(&self) -> bool {
        self.all.unwrap_or(false)
    }

    /// Get JSON setting, or false if not set
    pub fn json_or_default(&self) -> bool {
        self.json.unwrap_or(false)
    }

    /// Get backend as parsed ClipboardBackend, default if not set
    pub fn backend(&self) -> Result<ClipboardBackend, InvalidBackendError> {
        self.backend
            .as_deref()
            .map_or(Ok(ClipboardBackend::default()), |s| s.parse())
    }

    /// Get alias table, empty if not set
    pub fn aliases_or_default(&self) -> BTreeMap<String, String> {
        self.aliases.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.format, Some("Text".to_string()));
        assert_eq!(config.all, Some(false));
        assert_eq!(config.json, Some(false));
        assert_eq!(config.backend, Some("native".to_string()));
        assert!(config.aliases.is_none());
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.format.is_none());
        assert!(config.all.is_none());
        assert!(config.json.is_none());
        assert!(config.backend.is_none());
        assert!(config.aliases.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            format: Some("Text".to_string()),
            json: Some(true),
            ..Default::default()
        };
        let other = AppConfig {
            format: Some("HTML Format".to_string()),
            json: None,
            ..Default::default()
        };

        let merged = base.merge(other);
        assert_eq!(merged.format, Some("HTML Format".to_string()));
        assert_eq!(merged.json, Some(true));
    }

    #[test]
    fn merge_aliases_union() {
        let base = AppConfig {
            aliases: Some(BTreeMap::from([
                ("a".to_string(), "Text".to_string()),
                ("b".to_string(), "Csv".to_string()),
            ])),
            ..Default::default()
        };
        let other = AppConfig {
            aliases: Some(BTreeMap::from([("b".to_string(), "Bitmap".to_string())])),
            ..Default::default()
        };

        let aliases = base.merge(other).aliases_or_default();
        assert_eq!(aliases.get("a").map(String::as_str), Some("Text"));
        assert_eq!(aliases.get("b").map(String::as_str), Some("Bitmap"));
    }

    #[test]
    fn accessors_fall_back() {
        let config = AppConfig::empty();
        assert_eq!(config.format_or_default(), "Text");
        assert!(!config.all_or_default());
        assert!(!config.json_or_default());
        assert_eq!(config.backend().unwrap(), ClipboardBackend::Native);
        assert!(config.aliases_or_default().is_empty());
    }

    #[test]
    fn backend_parses_setting() {
        let config = AppConfig {
            backend: Some("Arboard".to_string()),
            ..Default::default()
        };
        assert_eq!(config.backend().unwrap(), ClipboardBackend::Arboard);
    }

    #[test]
    fn invalid_backend_is_an_error() {
        let config = AppConfig {
            backend: Some("bogus".to_string()),
            ..Default::default()
        };
        let err = config.backend().unwrap_err();
        assert_eq!(err.input, "bogus");
    }
}
