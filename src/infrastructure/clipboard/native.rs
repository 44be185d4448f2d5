//! Clipboard adapter using clipboard-rs
//!
//! Enumerates every advertised format. Works on Windows, macOS and X11.

use std::cell::RefCell;
use std::collections::HashMap;

use clipboard_rs::common::RustImage;
use clipboard_rs::{Clipboard, ClipboardContext};

use crate::application::ports::{ClipboardError, ClipboardReader};
use crate::domain::clip::format::{BITMAP, FILE_DROP, HTML, RICH_TEXT, TEXT};
use crate::domain::clip::{ImageHandle, RawPayload};

use super::aliases::FormatAliases;

/// How a portable format is read back from the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Getter {
    Text,
    Html,
    RichText,
    Files,
    Image,
    Buffer,
}

impl Getter {
    fn for_format(portable: &str) -> Self {
        match portable {
            TEXT => Self::Text,
            HTML => Self::Html,
            RICH_TEXT => Self::RichText,
            FILE_DROP => Self::Files,
            BITMAP => Self::Image,
            _ => Self::Buffer,
        }
    }
}

type NativeResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// clipboard-rs backed reader
pub struct NativeClipboard {
    context: ClipboardContext,
    aliases: FormatAliases,
    /// portable name -> native name, filled by `list_formats`
    natives: RefCell<HashMap<String, String>>,
}

impl NativeClipboard {
    /// Open the system clipboard.
    pub fn open(aliases: FormatAliases) -> Result<Self, ClipboardError> {
        let context =
            ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        Ok(Self {
            context,
            aliases,
            natives: RefCell::new(HashMap::new()),
        })
    }

    fn native_name(&self, portable: &str) -> String {
        self.natives
            .borrow()
            .get(portable)
            .cloned()
            .unwrap_or_else(|| portable.to_string())
    }

    fn read(&self, getter: Getter, native: &str) -> NativeResult<RawPayload> {
        let ctx = &self.context;
        match getter {
            Getter::Text => ctx.get_text().map(RawPayload::Str),
            Getter::Html => ctx.get_html().map(RawPayload::Str),
            Getter::RichText => ctx.get_rich_text().map(RawPayload::Str),
            Getter::Files => ctx.get_files().map(RawPayload::StrList),
            Getter::Image => {
                let rgba = ctx.get_image()?.to_rgba8()?;
                Ok(RawPayload::Image(ImageHandle::new(
                    rgba.width(),
                    rgba.height(),
                    rgba.into_raw(),
                )))
            }
            Getter::Buffer => ctx.get_buffer(native).map(RawPayload::Bytes),
        }
    }
}

impl ClipboardReader for NativeClipboard {
    fn list_formats(&self) -> Result<Vec<String>, ClipboardError> {
        let available = self
            .context
            .available_formats()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        let entries = self.aliases.resolve(available);
        let mut natives = self.natives.borrow_mut();
        natives.clear();

        Ok(entries
            .into_iter()
            .map(|entry| {
                if entry.portable != entry.native {
                    tracing::info!(
                        native = %entry.native,
                        portable = %entry.portable,
                        "aliased format"
                    );
                }
                natives.insert(entry.portable.clone(), entry.native);
                entry.portable
            })
            .collect())
    }

    fn fetch(&self, format: &str) -> Result<Option<RawPayload>, ClipboardError> {
        let native = self.native_name(format);
        let getter = Getter::for_format(format);

        self.read(getter, &native)
            .map(Some)
            .map_err(|e| ClipboardError::FetchFailed {
                format: format.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn getter_for_portable_names() {
        assert_eq!(Getter::for_format("Text"), Getter::Text);
        assert_eq!(Getter::for_format("HTML Format"), Getter::Html);
        assert_eq!(Getter::for_format("Rich Text Format"), Getter::RichText);
        assert_eq!(Getter::for_format("FileDrop"), Getter::Files);
        assert_eq!(Getter::for_format("Bitmap"), Getter::Image);
    }

    #[test]
    fn getter_falls_back_to_buffer() {
        assert_eq!(Getter::for_format("Csv"), Getter::Buffer);
        assert_eq!(Getter::for_format("TARGETS"), Getter::Buffer);
        assert_eq!(Getter::for_format("text"), Getter::Buffer);
    }
}
