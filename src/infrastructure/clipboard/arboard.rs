//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland), but only sees
//! text and images.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::application::ports::{ClipboardError, ClipboardReader};
use crate::domain::clip::format::{BITMAP, TEXT};
use crate::domain::clip::{ImageHandle, RawPayload};

/// Cross-platform clipboard adapter using arboard
pub struct ArboardClipboard {
    clipboard: RefCell<arboard::Clipboard>,
    /// payloads read while listing, handed out once by `fetch`
    prefetched: RefCell<HashMap<&'static str, RawPayload>>,
}

impl ArboardClipboard {
    /// Open the system clipboard.
    pub fn open() -> Result<Self, ClipboardError> {
        let clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        Ok(Self {
            clipboard: RefCell::new(clipboard),
            prefetched: RefCell::new(HashMap::new()),
        })
    }

    fn read_text(&self) -> Result<Option<RawPayload>, arboard::Error> {
        match self.clipboard.borrow_mut().get_text() {
            Ok(text) => Ok(Some(RawPayload::Str(text))),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn read_image(&self) -> Result<Option<RawPayload>, arboard::Error> {
        match self.clipboard.borrow_mut().get_image() {
            Ok(image) => Ok(Some(RawPayload::Image(to_handle(image)))),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Convert arboard image data; dimensions that overflow `u32` leave the
/// buffer mismatched so encoding rejects it.
fn to_handle(image: arboard::ImageData<'_>) -> ImageHandle {
    let width = u32::try_from(image.width).unwrap_or(0);
    let height = u32::try_from(image.height).unwrap_or(0);
    ImageHandle::new(width, height, image.bytes.into_owned())
}

/// Whether a read result puts its format in the catalog.
///
/// Only "no such content" leaves a format out. Any other error keeps it, so
/// the fetch reports the failure and the record comes out absent.
fn lists_format(result: &Result<Option<RawPayload>, arboard::Error>) -> bool {
    match result {
        Ok(Some(_)) => true,
        Ok(None) => false,
        Err(e) => {
            tracing::debug!(error = %e, "read failed, keeping format");
            true
        }
    }
}

impl ClipboardReader for ArboardClipboard {
    fn list_formats(&self) -> Result<Vec<String>, ClipboardError> {
        let mut formats = Vec::new();
        let mut prefetched = self.prefetched.borrow_mut();
        prefetched.clear();

        // arboard has no format listing; read the two shapes it supports
        for (format, result) in [(TEXT, self.read_text()), (BITMAP, self.read_image())] {
            if lists_format(&result) {
                formats.push(format.to_string());
            }
            if let Ok(Some(payload)) = result {
                prefetched.insert(format, payload);
            }
        }

        Ok(formats)
    }

    fn fetch(&self, format: &str) -> Result<Option<RawPayload>, ClipboardError> {
        if let Some(payload) = self.prefetched.borrow_mut().remove(format) {
            return Ok(Some(payload));
        }

        let result = match format {
            TEXT => self.read_text(),
            BITMAP => self.read_image(),
            _ => {
                return Err(ClipboardError::FormatNotRetrievable {
                    format: format.to_string(),
                    reason: "arboard only reads text and images".to_string(),
                })
            }
        };

        result.map_err(|e| ClipboardError::FetchFailed {
            format: format.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn image_data_converts() {
        let image = arboard::ImageData {
            width: 1,
            height: 1,
            bytes: Cow::Owned(vec![1, 2, 3, 4]),
        };
        let handle = to_handle(image);
        assert_eq!(handle.width, 1);
        assert_eq!(handle.height, 1);
        assert_eq!(handle.rgba, vec![1, 2, 3, 4]);
    }

    #[test]
    fn present_format_is_listed() {
        assert!(lists_format(&Ok(Some(RawPayload::Str("hi".into())))));
    }

    #[test]
    fn missing_format_is_not_listed() {
        assert!(!lists_format(&Ok(None)));
    }

    #[test]
    fn failed_read_keeps_format() {
        assert!(lists_format(&Err(arboard::Error::ClipboardOccupied)));
        assert!(lists_format(&Err(arboard::Error::ConversionFailure)));
    }
}
