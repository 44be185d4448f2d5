//! Output routing: stdout or a file

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

use crate::application::ExportOutput;

/// Output errors
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write to {path}: {source}")]
    File {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write to stdout: {0}")]
    Stdout(#[from] io::Error),
}

/// Where an export is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    /// Text plus newline; binary as a base64 line
    Stdout,
    /// Text and binary written verbatim
    File(PathBuf),
}

impl OutputSink {
    /// Stdout unless a path is given
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(path),
            None => Self::Stdout,
        }
    }

    /// Write an export. [`ExportOutput::Nothing`] writes nothing and does
    /// not create the file.
    pub fn write(&self, output: &ExportOutput) -> Result<(), OutputError> {
        match self {
            Self::Stdout => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                write_stream(&mut handle, output)?;
                handle.flush()?;
                Ok(())
            }
            Self::File(path) => write_file(path, output),
        }
    }
}

/// Write an export to a text stream
pub fn write_stream<W: Write>(writer: &mut W, output: &ExportOutput) -> io::Result<()> {
    match output {
        ExportOutput::Text(text) => writeln!(writer, "{}", text),
        ExportOutput::Binary(bytes) => writeln!(writer, "{}", STANDARD.encode(bytes)),
        ExportOutput::Nothing => Ok(()),
    }
}

fn write_file(path: &Path, output: &ExportOutput) -> Result<(), OutputError> {
    let bytes = match output {
        ExportOutput::Text(text) => text.as_bytes(),
        ExportOutput::Binary(bytes) => bytes.as_slice(),
        ExportOutput::Nothing => return Ok(()),
    };

    fs::write(path, bytes).map_err(|source| OutputError::File {
        path: path.display().to_string(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "output written");
    Ok(())
}
