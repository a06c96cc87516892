//! Property-based tests for StyledDocument edit invariants.

use core_text::{AttrKey, AttributeSet, StyledDocument, codec};
use proptest::prelude::*;

fn attr_strategy() -> impl Strategy<Value = AttributeSet> {
    (any::<bool>(), any::<bool>(), any::<bool>(), prop::option::of(8u32..40)).prop_map(
        |(b, i, u, size)| {
            let mut set = AttributeSet::new();
            if b {
                set = set.with(AttrKey::Bold, true);
            }
            if i {
                set = set.with(AttrKey::Italic, true);
            }
            if u {
                set = set.with(AttrKey::Underline, true);
            }
            if let Some(size) = size {
                set = set.with(AttrKey::FontSize, size);
            }
            set
        },
    )
}

fn doc_strategy() -> impl Strategy<Value = StyledDocument> {
    prop::collection::vec(("[a-zé ]{1,6}", attr_strategy()), 0..8).prop_map(|pieces| {
        let mut doc = StyledDocument::new();
        for (text, attrs) in pieces {
            let at = doc.len();
            doc.insert(at, &text, &attrs).unwrap();
        }
        doc
    })
}

proptest! {
    // remove followed by re-inserting the removed run restores text and attributes
    #[test]
    fn remove_then_insert_round_trips(doc in doc_strategy(), a in 0usize..64, b in 0usize..64) {
        let len = doc.len();
        let start = if len == 0 { 0 } else { a % (len + 1) };
        let length = if len == start { 0 } else { b % (len - start + 1) };
        let mut edited = doc.clone();
        let removed = edited.remove(start, length).unwrap();
        prop_assert_eq!(edited.len(), len - length);
        edited.insert_run(start, &removed).unwrap();
        prop_assert_eq!(edited.text(), doc.text());
        for i in 0..len {
            prop_assert_eq!(edited.attributes(i).unwrap(), doc.attributes(i).unwrap());
        }
    }

    // every index in [0, len) has an attribute set; len itself does not
    #[test]
    fn every_position_has_attributes(doc in doc_strategy()) {
        for i in 0..doc.len() {
            prop_assert!(doc.attributes(i).is_ok());
        }
        prop_assert!(doc.attributes(doc.len()).is_err());
    }

    // spans tile the document exactly
    #[test]
    fn spans_cover_document(doc in doc_strategy()) {
        let spans = doc.spans();
        let mut next = 0;
        for span in &spans {
            prop_assert_eq!(span.range.start, next);
            prop_assert!(span.range.end > span.range.start);
            next = span.range.end;
        }
        prop_assert_eq!(next, doc.len());
    }

    // the persisted form preserves every character's attributes
    #[test]
    fn codec_preserves_document(doc in doc_strategy()) {
        let bytes = codec::encode(&doc).unwrap();
        let back = codec::decode(&bytes).unwrap();
        prop_assert_eq!(back, doc);
    }

    // arbitrary bytes never panic the decoder
    #[test]
    fn decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = codec::decode(&bytes);
    }
}
