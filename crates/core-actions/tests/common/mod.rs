#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::Editor;
use core_text::{AttrKey, AttributeSet, StyledDocument};

pub fn plain() -> AttributeSet {
    AttributeSet::new()
}

pub fn bold() -> AttributeSet {
    AttributeSet::new().with(AttrKey::Bold, true)
}

pub fn italic() -> AttributeSet {
    AttributeSet::new().with(AttrKey::Italic, true)
}

pub fn underline() -> AttributeSet {
    AttributeSet::new().with(AttrKey::Underline, true)
}

/// Build a document by appending each piece with its own formatting.
pub fn doc_from_pieces(pieces: &[(&str, AttributeSet)]) -> StyledDocument {
    let mut doc = StyledDocument::new();
    for (text, attrs) in pieces {
        let at = doc.len();
        doc.insert(at, text, attrs).unwrap();
    }
    doc
}

/// Per-character view of one flag across the whole document.
pub fn flags(ed: &Editor, key: AttrKey) -> Vec<bool> {
    (0..ed.document().len())
        .map(|i| ed.document().attributes(i).unwrap().flag(key))
        .collect()
}
