//! Clipboard infrastructure module
//!
//! Provides clipboard readers using clipboard-rs (primary, every format)
//! or arboard (text and images only).

mod aliases;
mod arboard;
mod native;

pub use self::arboard::ArboardClipboard;
pub use aliases::{CatalogEntry, FormatAliases};
pub use native::NativeClipboard;

use std::collections::BTreeMap;

use crate::application::ports::{ClipboardError, ClipboardReader};
use crate::domain::config::ClipboardBackend;

/// Open the clipboard reader for a backend.
///
/// Fails with [`ClipboardError::Unavailable`] if the clipboard cannot be opened.
pub fn create_clipboard(
    backend: ClipboardBackend,
    aliases: BTreeMap<String, String>,
) -> Result<Box<dyn ClipboardReader>, ClipboardError> {
    tracing::debug!(%backend, "opening clipboard");
    match backend {
        ClipboardBackend::Native => Ok(Box::new(NativeClipboard::open(
            FormatAliases::with_overrides(aliases),
        )?)),
        ClipboardBackend::Arboard => {
            if !aliases.is_empty() {
                tracing::warn!("format aliases are ignored by the arboard backend");
            }
            Ok(Box::new(ArboardClipboard::open()?))
        }
    }
}
