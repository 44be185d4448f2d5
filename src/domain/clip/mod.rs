//! Clipboard snapshot model
//!
//! Raw payloads, their portable values, snapshot records and the
//! common-formats filter.

pub mod format;
pub mod payload;
pub mod snapshot;
pub mod value;

pub use format::{render_format_list, FormatFilter, COMMON_FORMATS, DEFAULT_FORMAT};
pub use payload::{ImageHandle, RawPayload};
pub use snapshot::{ClipRecord, ClipSnapshot};
pub use value::{normalize, ClipValue};
