//! Portable clipboard values and payload normalization

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Serialize, Serializer};

use super::payload::RawPayload;

/// Output-safe value of one clipboard format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipValue {
    /// UTF-8 text
    Text(String),
    /// Ordered text lines, e.g. file paths
    Lines(Vec<String>),
    /// Opaque binary content
    Blob(Vec<u8>),
    /// Fetch failed or returned nothing
    Absent,
}

impl ClipValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl Serialize for ClipValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Lines(lines) => lines.serialize(serializer),
            Self::Blob(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

/// Convert a raw payload into its portable value.
///
/// Strings pass through untouched. Images are re-encoded as PNG; an image
/// that cannot be encoded becomes [`ClipValue::Absent`] rather than a partial
/// blob. Unsupported native objects are dropped, never stringified.
pub fn normalize(payload: RawPayload) -> ClipValue {
    match payload {
        RawPayload::Str(text) => ClipValue::Text(text),
        RawPayload::StrList(lines) => ClipValue::Lines(lines),
        RawPayload::Image(image) => match image.into_png() {
            Ok(png) => ClipValue::Blob(png),
            Err(e) => {
                tracing::warn!(error = %e, "dropping image payload");
                ClipValue::Absent
            }
        },
        RawPayload::Bytes(bytes) => ClipValue::Blob(bytes),
        RawPayload::Unsupported(type_name) => {
            tracing::debug!(%type_name, "dropping unsupported payload");
            ClipValue::Absent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clip::ImageHandle;

    #[test]
    fn string_becomes_text_unchanged() {
        let text = "  héllo\r\nwörld \u{1F600}";
        assert_eq!(
            normalize(RawPayload::Str(text.to_string())),
            ClipValue::Text(text.to_string())
        );
    }

    #[test]
    fn string_list_keeps_order() {
        let files = vec!["C:\\b.txt".to_string(), "C:\\a.txt".to_string()];
        assert_eq!(
            normalize(RawPayload::StrList(files.clone())),
            ClipValue::Lines(files)
        );
    }

    #[test]
    fn bytes_are_verbatim() {
        let bytes = vec![0u8, 159, 146, 150, 255];
        assert_eq!(
            normalize(RawPayload::Bytes(bytes.clone())),
            ClipValue::Blob(bytes)
        );
    }

    #[test]
    fn empty_bytes_are_not_absent() {
        let value = normalize(RawPayload::Bytes(Vec::new()));
        assert_eq!(value, ClipValue::Blob(Vec::new()));
        assert!(!value.is_absent());
    }

    #[test]
    fn image_becomes_png_blob() {
        let image = ImageHandle::new(1, 1, vec![10, 20, 30, 255]);
        match normalize(RawPayload::Image(image)) {
            ClipValue::Blob(bytes) => assert_eq!(&bytes[1..4], b"PNG"),
            other => panic!("expected blob, got {:?}", other),
        }
    }

    #[test]
    fn malformed_image_is_absent() {
        let image = ImageHandle::new(3, 3, vec![0; 5]);
        assert_eq!(normalize(RawPayload::Image(image)), ClipValue::Absent);
    }

    #[test]
    fn oversized_image_is_absent() {
        let image = ImageHandle::new(u32::MAX, u32::MAX, vec![0; 4]);
        assert_eq!(normalize(RawPayload::Image(image)), ClipValue::Absent);
    }

    #[test]
    fn unsupported_is_absent() {
        assert_eq!(
            normalize(RawPayload::Unsupported("System.Drawing.Metafile".into())),
            ClipValue::Absent
        );
    }

    #[test]
    fn serializes_each_variant() {
        assert_eq!(
            serde_json::to_string(&ClipValue::Text("hi".into())).unwrap(),
            r#""hi""#
        );
        assert_eq!(
            serde_json::to_string(&ClipValue::Lines(vec!["a".into(), "b".into()])).unwrap(),
            r#"["a","b"]"#
        );
        assert_eq!(
            serde_json::to_string(&ClipValue::Blob(b"hello".to_vec())).unwrap(),
            r#""aGVsbG8=""#
        );
        assert_eq!(serde_json::to_string(&ClipValue::Absent).unwrap(), "null");
    }
}
