//! Portable clipboard format names and the common-formats allow-list

/// Plain text
pub const TEXT: &str = "Text";
/// Bitmap image, always emitted as PNG
pub const BITMAP: &str = "Bitmap";
/// List of file paths
pub const FILE_DROP: &str = "FileDrop";
/// HTML fragment
pub const HTML: &str = "HTML Format";
/// Comma-separated values
pub const CSV: &str = "Csv";
/// RTF document
pub const RICH_TEXT: &str = "Rich Text Format";

/// Format used by single-format mode when none is requested
pub const DEFAULT_FORMAT: &str = TEXT;

/// Formats kept by the filtered (non `--all`) view, compared case-sensitively.
pub const COMMON_FORMATS: &[&str] = &[TEXT, BITMAP, FILE_DROP, HTML, CSV, RICH_TEXT];

/// Check if a format name belongs to the common allow-list
pub fn is_common(format: &str) -> bool {
    COMMON_FORMATS.contains(&format)
}

/// Which records a multi-format export keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatFilter {
    /// Every format the clipboard advertises
    All,
    /// Only formats in [`COMMON_FORMATS`]
    #[default]
    Common,
}

impl FormatFilter {
    /// `--all` on the command line maps to [`FormatFilter::All`]
    pub fn from_all_flag(all: bool) -> Self {
        if all {
            Self::All
        } else {
            Self::Common
        }
    }

    /// Whether a record with this format name passes the filter
    pub fn allows(&self, format: &str) -> bool {
        match self {
            Self::All => true,
            Self::Common => is_common(format),
        }
    }
}

/// Render a newline-separated format list, keeping catalog order.
pub fn render_format_list<S: AsRef<str>>(formats: &[S]) -> String {
    formats
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_formats_match_exactly() {
        assert!(is_common("Text"));
        assert!(is_common("HTML Format"));
        assert!(is_common("Csv"));
        assert!(!is_common("text"));
        assert!(!is_common("UnicodeText"));
        assert!(!is_common("html format"));
    }

    #[test]
    fn filter_from_flag() {
        assert_eq!(FormatFilter::from_all_flag(true), FormatFilter::All);
        assert_eq!(FormatFilter::from_all_flag(false), FormatFilter::Common);
        assert_eq!(FormatFilter::default(), FormatFilter::Common);
    }

    #[test]
    fn all_filter_allows_anything() {
        assert!(FormatFilter::All.allows("Ole Private Data"));
        assert!(!FormatFilter::Common.allows("Ole Private Data"));
    }

    #[test]
    fn format_list_keeps_order() {
        let formats = vec!["Text", "UnicodeText", "Bitmap"];
        assert_eq!(render_format_list(&formats), "Text\nUnicodeText\nBitmap");
    }

    #[test]
    fn format_list_empty() {
        let formats: Vec<String> = Vec::new();
        assert_eq!(render_format_list(&formats), "");
    }
}
