//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the system clipboard and the config file.

pub mod clipboard;
pub mod config;

// Re-export adapters
pub use clipboard::{create_clipboard, ArboardClipboard, FormatAliases, NativeClipboard};
pub use config::XdgConfigStore;
