//! Raw clipboard payloads, as handed over by a platform adapter

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::domain::error::ImageEncodeError;

/// A native-shaped payload for a single clipboard format.
///
/// Adapters translate whatever their platform binding returns into one of
/// these shapes; the normalizer then decides what portable value it becomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawPayload {
    /// A string
    Str(String),
    /// A sequence of strings (file lists)
    StrList(Vec<String>),
    /// A decoded image
    Image(ImageHandle),
    /// An unclassified byte stream
    Bytes(Vec<u8>),
    /// A native object with no portable shape, carrying its type name
    Unsupported(String),
}

impl RawPayload {
    /// Short name of the payload shape, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::StrList(_) => "string list",
            Self::Image(_) => "image",
            Self::Bytes(_) => "bytes",
            Self::Unsupported(_) => "unsupported",
        }
    }
}

/// Decoded 8-bit RGBA image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ImageHandle {
    /// Create an image handle from raw RGBA pixels
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba,
        }
    }

    /// Number of bytes the pixel buffer must hold, `None` if it overflows
    pub fn expected_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|n| n.checked_mul(4))
    }

    /// Re-encode the pixels as a PNG file.
    pub fn into_png(self) -> Result<Vec<u8>, ImageEncodeError> {
        let actual = self.rgba.len();
        let expected = self.expected_len();
        let mismatch = ImageEncodeError::SizeMismatch {
            width: self.width,
            height: self.height,
            expected: expected.unwrap_or(usize::MAX),
            actual,
        };
        if expected != Some(actual) {
            return Err(mismatch);
        }

        let buffer = RgbaImage::from_raw(self.width, self.height, self.rgba).ok_or(mismatch)?;

        let mut out = Cursor::new(Vec::new());
        buffer
            .write_to(&mut out, ImageFormat::Png)
            .map_err(|e| ImageEncodeError::Encode(e.to_string()))?;

        Ok(out.into_inner())
    }
}
