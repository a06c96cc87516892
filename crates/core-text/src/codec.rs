//! Persisted document format (`.std`).
//!
//! A JSON envelope carrying the text and the run-length projection of its
//! attributes:
//!
//! ```json
//! {"format":"styledit","version":1,"text":"hi","runs":[{"len":2,"attrs":{"bold":true}}]}
//! ```
//!
//! Decoding never panics. Anything that is not such an envelope (wrong marker,
//! newer version, runs that disagree with the text, mistyped attribute values)
//! is rejected as [`TextError::UnsupportedFormat`].

use crate::{AttributeSet, Result, StyledDocument, TextError};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Conventional file extension, without the leading dot.
pub const FILE_EXTENSION: &str = "std";
pub const FORMAT_MARKER: &str = "styledit";
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    format: String,
    version: u32,
    text: String,
    #[serde(default)]
    runs: Vec<RunRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RunRecord {
    len: usize,
    #[serde(default, skip_serializing_if = "AttributeSet::is_empty")]
    attrs: AttributeSet,
}

/// Cheap check that `bytes` look like a JSON object; does not validate the envelope.
pub fn sniff(bytes: &[u8]) -> bool {
    let body = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    body.iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| *b == b'{')
}

pub fn encode(doc: &StyledDocument) -> Result<Vec<u8>> {
    let runs: Vec<RunRecord> = doc
        .spans()
        .into_iter()
        .map(|s| RunRecord {
            len: s.range.len(),
            attrs: s.attrs,
        })
        .collect();
    let envelope = Envelope {
        format: FORMAT_MARKER.to_string(),
        version: FORMAT_VERSION,
        text: doc.text(),
        runs,
    };
    let bytes = serde_json::to_vec(&envelope).map_err(|e| TextError::Encode(e.to_string()))?;
    debug!(target: "text.codec", chars = doc.len(), runs = envelope.runs.len(), bytes = bytes.len(), "encode");
    Ok(bytes)
}

pub fn decode(bytes: &[u8]) -> Result<StyledDocument> {
    if !sniff(bytes) {
        warn!(target: "text.codec", bytes = bytes.len(), "decode_sniff_failed");
        return Err(TextError::UnsupportedFormat(
            "not a styled document".to_string(),
        ));
    }
    let body = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let envelope: Envelope = serde_json::from_slice(body).map_err(|e| {
        warn!(target: "text.codec", error = %e, "decode_parse_failed");
        TextError::UnsupportedFormat(e.to_string())
    })?;
    if envelope.format != FORMAT_MARKER {
        return Err(TextError::UnsupportedFormat(format!(
            "unknown format marker {:?}",
            envelope.format
        )));
    }
    if envelope.version == 0 || envelope.version > FORMAT_VERSION {
        return Err(TextError::UnsupportedFormat(format!(
            "unsupported version {}",
            envelope.version
        )));
    }

    let char_len = envelope.text.chars().count();
    let mut attrs = Vec::with_capacity(char_len);
    for run in envelope.runs {
        if let Some(key) = run.attrs.first_mismatch() {
            return Err(TextError::UnsupportedFormat(format!(
                "attribute {key} has a value of the wrong type"
            )));
        }
        if run.len > char_len - attrs.len() {
            return Err(TextError::UnsupportedFormat(format!(
                "attribute runs exceed text length {char_len}"
            )));
        }
        attrs.extend(std::iter::repeat_n(run.attrs, run.len));
    }
    let doc = StyledDocument::from_parts(&envelope.text, attrs)?;
    debug!(target: "text.codec", chars = doc.len(), "decode");
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AttrKey;

    fn sample() -> StyledDocument {
        let mut doc = StyledDocument::from_plain("bold plain");
        let bold = AttributeSet::new()
            .with(AttrKey::Bold, true)
            .with(AttrKey::FontSize, 18u32);
        doc.set_character_attributes(0, 4, &bold, true).unwrap();
        doc
    }

    #[test]
    fn encoded_runs_are_coalesced() {
        let bytes = encode(&sample()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["format"], "styledit");
        assert_eq!(json["version"], 1);
        let runs = json["runs"].as_array().unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0]["len"], 4);
        assert_eq!(runs[0]["attrs"]["bold"], true);
        assert!(runs[1].get("attrs").is_none());
    }

    #[test]
    fn decode_restores_per_character_attributes() {
        let doc = sample();
        let back = decode(&encode(&doc).unwrap()).unwrap();
        assert_eq!(back, doc);
        assert_eq!(back.attributes(3).unwrap().font_size(), Some(18));
    }

    #[test]
    fn empty_document_survives() {
        let back = decode(&encode(&StyledDocument::new()).unwrap()).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn rejects_foreign_bytes() {
        let inputs: [&[u8]; 5] = [
            b"",
            b"\xAC\xED\x00\x05sr\x00",
            b"plain text file",
            b"[1,2,3]",
            b"{not json",
        ];
        for input in inputs {
            assert!(
                matches!(decode(input), Err(TextError::UnsupportedFormat(_))),
                "input {:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn rejects_wrong_marker_and_version() {
        let wrong_marker = br#"{"format":"other","version":1,"text":"","runs":[]}"#;
        assert!(matches!(decode(wrong_marker), Err(TextError::UnsupportedFormat(_))));
        let newer = br#"{"format":"styledit","version":9,"text":"","runs":[]}"#;
        assert!(matches!(decode(newer), Err(TextError::UnsupportedFormat(_))));
    }

    #[test]
    fn rejects_runs_that_disagree_with_text() {
        let short = br#"{"format":"styledit","version":1,"text":"abc","runs":[{"len":2}]}"#;
        assert!(matches!(decode(short), Err(TextError::UnsupportedFormat(_))));
        let long = br#"{"format":"styledit","version":1,"text":"abc","runs":[{"len":5}]}"#;
        assert!(matches!(decode(long), Err(TextError::UnsupportedFormat(_))));
    }

    #[test]
    fn rejects_mistyped_attribute_values() {
        let bad = br#"{"format":"styledit","version":1,"text":"a","runs":[{"len":1,"attrs":{"bold":"yes"}}]}"#;
        assert!(matches!(decode(bad), Err(TextError::UnsupportedFormat(_))));
    }

    #[test]
    fn sniff_accepts_bom_and_whitespace() {
        assert!(sniff(b"\xEF\xBB\xBF  {"));
        assert!(!sniff(b"  x{"));
    }
}
