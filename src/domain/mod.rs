//! Domain layer - Clipboard values and rules
//!
//! Contains the snapshot model, payload normalization, configuration
//! and domain errors. This layer has no dependencies on the clipboard.

pub mod clip;
pub mod config;
pub mod error;

// Re-export common types
pub use clip::{ClipRecord, ClipSnapshot, ClipValue, FormatFilter, ImageHandle, RawPayload};
pub use config::{AppConfig, ClipboardBackend};
pub use error::*;
