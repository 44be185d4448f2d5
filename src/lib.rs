//! cclip - clipboard contents as text or JSON
//!
//! This crate reads every format currently on the system clipboard,
//! normalizes each payload into a portable value (text, text lines or a
//! binary blob) and prints either one format or the whole set as JSON.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Snapshot model, payload normalization, format filter, config
//! - **Application**: Snapshot capture and export use cases, port traits
//! - **Infrastructure**: Clipboard adapters (clipboard-rs, arboard), config file
//! - **CLI**: Argument parsing, output routing, logging

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
