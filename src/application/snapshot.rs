//! Snapshot capture: payload fetching and snapshot assembly

use std::collections::HashSet;

use crate::domain::clip::{normalize, ClipRecord, ClipSnapshot, RawPayload};

use super::ports::{ClipboardError, ClipboardReader};

/// Fetch the payload for one format, treating every failure as absence.
///
/// A format that is advertised but not retrievable, or a clipboard that is
/// briefly owned by another process, only affects this format.
pub fn fetch_payload<C: ClipboardReader + ?Sized>(clipboard: &C, format: &str) -> Option<RawPayload> {
    match clipboard.fetch(format) {
        Ok(Some(payload)) => {
            tracing::trace!(format, kind = payload.kind(), "fetched payload");
            Some(payload)
        }
        Ok(None) => {
            tracing::debug!(format, "format returned no payload");
            None
        }
        Err(e) => {
            tracing::warn!(format, error = %e, "treating format as absent");
            None
        }
    }
}

/// Capture the clipboard as one snapshot.
///
/// Lists formats once, then fetches and normalizes each one strictly in
/// catalog order. Only a failure to list formats is returned as an error.
/// Repeated catalog names keep their first position.
pub fn build_snapshot<C: ClipboardReader + ?Sized>(
    clipboard: &C,
) -> Result<ClipSnapshot, ClipboardError> {
    let formats = clipboard.list_formats()?;
    tracing::debug!(count = formats.len(), "clipboard formats listed");

    let mut seen = HashSet::with_capacity(formats.len());
    let mut records = Vec::with_capacity(formats.len());

    for format in formats {
        if !seen.insert(format.clone()) {
            tracing::debug!(%format, "skipping repeated format");
            continue;
        }

        let record = match fetch_payload(clipboard, &format) {
            Some(payload) => ClipRecord::new(format, normalize(payload)),
            None => ClipRecord::absent(format),
        };
        records.push(record);
    }

    Ok(ClipSnapshot::new(records))
}
