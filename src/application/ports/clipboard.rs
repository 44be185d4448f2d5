//! Clipboard port interface

use thiserror::Error;

use crate::domain::clip::RawPayload;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    /// The clipboard service itself cannot be reached. Fatal for a run.
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// A format was advertised but its payload cannot be retrieved
    #[error("Format '{format}' is not retrievable: {reason}")]
    FormatNotRetrievable { format: String, reason: String },

    /// Reading a payload failed, e.g. another process owns the clipboard
    #[error("Failed to read format '{format}': {reason}")]
    FetchFailed { format: String, reason: String },
}

/// Port for reading the system clipboard. Read-only; never writes.
pub trait ClipboardReader {
    /// List the formats currently on the clipboard, in platform order.
    ///
    /// # Returns
    /// Format names, or [`ClipboardError::Unavailable`] if the clipboard
    /// cannot be opened at all
    fn list_formats(&self) -> Result<Vec<String>, ClipboardError>;

    /// Fetch the payload of one format.
    ///
    /// # Arguments
    /// * `format` - A name previously returned by [`list_formats`](Self::list_formats)
    ///
    /// # Returns
    /// `Ok(None)` when the platform returns nothing for the format
    fn fetch(&self, format: &str) -> Result<Option<RawPayload>, ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
impl ClipboardReader for Box<dyn ClipboardReader> {
    fn list_formats(&self) -> Result<Vec<String>, ClipboardError> {
        self.as_ref().list_formats()
    }

    fn fetch(&self, format: &str) -> Result<Option<RawPayload>, ClipboardError> {
        self.as_ref().fetch(format)
    }
}

impl<C: ClipboardReader + ?Sized> ClipboardReader for &C {
    fn list_formats(&self) -> Result<Vec<String>, ClipboardError> {
        (**self).list_formats()
    }

    fn fetch(&self, format: &str) -> Result<Option<RawPayload>, ClipboardError> {
        (**self).fetch(format)
    }
}
