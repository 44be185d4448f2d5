//! Platform format names mapped to portable names

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::domain::clip::format::{BITMAP, CSV, FILE_DROP, HTML, RICH_TEXT, TEXT};

/// Built-in platform names, across X11/Wayland, Windows and macOS.
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    // Text
    ("UTF8_STRING", TEXT),
    ("STRING", TEXT),
    ("text/plain", TEXT),
    ("text/plain;charset=utf-8", TEXT),
    ("CF_TEXT", TEXT),
    ("CF_UNICODETEXT", TEXT),
    ("CF_OEMTEXT", TEXT),
    ("public.utf8-plain-text", TEXT),
    ("NSStringPboardType", TEXT),
    // HTML
    ("text/html", HTML),
    ("public.html", HTML),
    ("Apple HTML pasteboard type", HTML),
    // RTF
    ("text/rtf", RICH_TEXT),
    ("text/richtext", RICH_TEXT),
    ("public.rtf", RICH_TEXT),
    ("NSRTFPboardType", RICH_TEXT),
    // File lists
    ("text/uri-list", FILE_DROP),
    ("CF_HDROP", FILE_DROP),
    ("public.file-url", FILE_DROP),
    ("NSFilenamesPboardType", FILE_DROP),
    // Images
    ("image/png", BITMAP),
    ("CF_DIB", BITMAP),
    ("CF_DIBV5", BITMAP),
    ("CF_BITMAP", BITMAP),
    ("PNG", BITMAP),
    ("public.png", BITMAP),
    ("public.tiff", BITMAP),
    ("NSTIFFPboardType", BITMAP),
    // CSV
    ("text/csv", CSV),
    ("public.comma-separated-values-text", CSV),
];

/// A catalog entry: the name we report and the name the platform uses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub portable: String,
    pub native: String,
}

/// Lookup table from platform format names to portable names.
/// Names without an alias are reported unchanged.
#[derive(Debug, Clone)]
pub struct FormatAliases {
    table: HashMap<String, String>,
}

impl FormatAliases {
    /// Built-in aliases only
    pub fn builtin() -> Self {
        Self {
            table: BUILTIN_ALIASES
                .iter()
                .map(|(native, portable)| (native.to_string(), portable.to_string()))
                .collect(),
        }
    }

    /// Built-in aliases extended with user entries, which win on conflict
    pub fn with_overrides(overrides: BTreeMap<String, String>) -> Self {
        let mut aliases = Self::builtin();
        aliases.table.extend(overrides);
        aliases
    }

    /// Portable name for a platform name
    pub fn portable<'a>(&'a self, native: &'a str) -> &'a str {
        self.table.get(native).map(String::as_str).unwrap_or(native)
    }

    /// Translate a platform catalog, keeping the first native name for each
    /// portable name and the platform's order.
    pub fn resolve(&self, natives: Vec<String>) -> Vec<CatalogEntry> {
        let mut seen = HashSet::with_capacity(natives.len());
        natives
            .into_iter()
            .filter_map(|native| {
                let portable = self.portable(&native).to_string();
                if !seen.insert(portable.clone()) {
                    return None;
                }
                Some(CatalogEntry { portable, native })
            })
            .collect()
    }
}

impl Default for FormatAliases {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn natives(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn maps_known_names() {
        let aliases = FormatAliases::builtin();
        assert_eq!(aliases.portable("UTF8_STRING"), "Text");
        assert_eq!(aliases.portable("text/uri-list"), "FileDrop");
        assert_eq!(aliases.portable("image/png"), "Bitmap");
        assert_eq!(aliases.portable("text/html"), "HTML Format");
    }

    #[test]
    fn unknown_names_pass_through() {
        let aliases = FormatAliases::builtin();
        assert_eq!(aliases.portable("TARGETS"), "TARGETS");
        assert_eq!(aliases.portable("Text"), "Text");
    }

    #[test]
    fn resolve_dedupes_keeping_first() {
        let aliases = FormatAliases::builtin();
        let entries = aliases.resolve(natives(&[
            "TARGETS",
            "UTF8_STRING",
            "text/plain",
            "image/png",
            "STRING",
        ]));

        let portable: Vec<_> = entries.iter().map(|e| e.portable.as_str()).collect();
        assert_eq!(portable, vec!["TARGETS", "Text", "Bitmap"]);
        assert_eq!(entries[1].native, "UTF8_STRING");
    }

    #[test]
    fn overrides_win() {
        let aliases = FormatAliases::with_overrides(BTreeMap::from([
            ("text/plain".to_string(), "Plain".to_string()),
            ("application/x-sheet".to_string(), "Csv".to_string()),
        ]));
        assert_eq!(aliases.portable("text/plain"), "Plain");
        assert_eq!(aliases.portable("application/x-sheet"), "Csv");
        assert_eq!(aliases.portable("UTF8_STRING"), "Text");
    }
}
