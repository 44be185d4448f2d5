//! Application layer - Use cases and port interfaces
//!
//! Contains the snapshot capture and export operations and the trait
//! definitions for the clipboard and configuration storage.

pub mod export;
pub mod ports;
pub mod snapshot;

// Re-export use cases
pub use export::{ExportError, ExportMode, ExportOutput, ExportUseCase};
pub use snapshot::{build_snapshot, fetch_payload};
