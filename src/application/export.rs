//! Export use case: turn the clipboard into one output

use thiserror::Error;

use crate::domain::clip::{render_format_list, ClipValue, FormatFilter};

use super::ports::{ClipboardError, ClipboardReader};
use super::snapshot::build_snapshot;

/// What to produce from the clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportMode {
    /// Newline-separated list of format names, no payloads fetched
    ListFormats,
    /// JSON array of every (or every common) format
    Json { filter: FormatFilter },
    /// The value of one named format
    Single { format: String },
}

/// Result of an export, not yet routed to a destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutput {
    /// Text output
    Text(String),
    /// Binary output; raw in a file, base64 on stdout
    Binary(Vec<u8>),
    /// Nothing to write. Not an error.
    Nothing,
}

impl ExportOutput {
    pub fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }
}

/// Errors from the export use case
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Export the clipboard according to an [`ExportMode`]
pub struct ExportUseCase<C: ClipboardReader> {
    clipboard: C,
}

impl<C: ClipboardReader> ExportUseCase<C> {
    /// Create a new export use case over a clipboard reader
    pub fn new(clipboard: C) -> Self {
        Self { clipboard }
    }

    /// Run one export.
    ///
    /// The whole snapshot is captured before any output is produced.
    pub fn execute(&self, mode: &ExportMode) -> Result<ExportOutput, ExportError> {
        match mode {
            ExportMode::ListFormats => {
                let formats = self.clipboard.list_formats()?;
                if formats.is_empty() {
                    return Ok(ExportOutput::Nothing);
                }
                Ok(ExportOutput::Text(render_format_list(&formats)))
            }
            ExportMode::Json { filter } => {
                let snapshot = build_snapshot(&self.clipboard)?.apply(*filter);
                tracing::debug!(records = snapshot.len(), ?filter, "serializing snapshot");
                Ok(ExportOutput::Text(snapshot.to_json()?))
            }
            ExportMode::Single { format } => {
                let snapshot = build_snapshot(&self.clipboard)?;
                let output = match snapshot.single(format) {
                    Some(ClipValue::Text(text)) => ExportOutput::Text(text.clone()),
                    Some(ClipValue::Lines(lines)) => ExportOutput::Text(lines.join("\n")),
                    Some(ClipValue::Blob(bytes)) => ExportOutput::Binary(bytes.clone()),
                    Some(ClipValue::Absent) | None => {
                        tracing::debug!(%format, "requested format not on clipboard");
                        ExportOutput::Nothing
                    }
                };
                Ok(output)
            }
        }
    }
}
