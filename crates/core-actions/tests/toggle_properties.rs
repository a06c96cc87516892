//! Property-based tests for attribute toggling and replace formatting.

use core_actions::Editor;
use core_text::{AttrKey, AttributeSet, StyledDocument};
use proptest::prelude::*;

fn flagged_doc() -> impl Strategy<Value = StyledDocument> {
    prop::collection::vec((prop::char::range('a', 'z'), any::<bool>(), any::<bool>()), 1..24).prop_map(
        |chars| {
            let mut doc = StyledDocument::new();
            for (i, (ch, bold, italic)) in chars.into_iter().enumerate() {
                let mut attrs = AttributeSet::new();
                if bold {
                    attrs = attrs.with(AttrKey::Bold, true);
                }
                if italic {
                    attrs = attrs.with(AttrKey::Italic, true);
                }
                doc.insert(i, &ch.to_string(), &attrs).unwrap();
            }
            doc
        },
    )
}

fn bold_flags(ed: &Editor) -> Vec<bool> {
    (0..ed.document().len())
        .map(|i| ed.document().attributes(i).unwrap().is_bold())
        .collect()
}

proptest! {
    // Uniform selections restore after a double toggle; mixed ones end all-off.
    #[test]
    fn double_toggle_policy(doc in flagged_doc(), a in 0usize..32, b in 0usize..32) {
        let len = doc.len();
        let (start, end) = (a % (len + 1), b % (len + 1));
        let mut ed = Editor::with_document(doc);
        ed.select(start, end).unwrap();
        let range = ed.selection().range();
        let before = bold_flags(&ed);
        let all_set = ed.is_selection_bold();

        ed.toggle_bold().unwrap();
        let after_one = bold_flags(&ed);
        if !range.is_empty() {
            prop_assert!(after_one[range.clone()].iter().all(|&f| f == !all_set));
        }
        ed.toggle_bold().unwrap();
        let after_two = bold_flags(&ed);

        let uniform = before[range.clone()].iter().all(|&f| f) || before[range.clone()].iter().all(|&f| !f);
        if uniform || range.is_empty() {
            prop_assert_eq!(&after_two, &before);
        } else {
            prop_assert!(after_two[range.clone()].iter().all(|&f| !f));
        }
        // Outside the selection nothing changes.
        for i in (0..len).filter(|i| !range.contains(i)) {
            prop_assert_eq!(after_two[i], before[i]);
        }
    }

    // Toggling bold never disturbs italic.
    #[test]
    fn toggle_touches_only_its_key(doc in flagged_doc()) {
        let italic_before: Vec<bool> = (0..doc.len()).map(|i| doc.attributes(i).unwrap().is_italic()).collect();
        let mut ed = Editor::with_document(doc);
        ed.select_all();
        ed.toggle_bold().unwrap();
        let italic_after: Vec<bool> = (0..ed.document().len()).map(|i| ed.document().attributes(i).unwrap().is_italic()).collect();
        prop_assert_eq!(italic_after, italic_before);
    }

    // Same-length case conversion keeps every character's attributes.
    #[test]
    fn upper_case_preserves_attributes(doc in flagged_doc()) {
        let before: Vec<AttributeSet> = (0..doc.len()).map(|i| doc.attributes(i).unwrap()).collect();
        let mut ed = Editor::with_document(doc);
        ed.select_all();
        ed.selection_to_upper_case().unwrap();
        prop_assert_eq!(ed.document().len(), before.len());
        prop_assert_eq!(ed.document().text(), ed.document().text().to_uppercase());
        for (i, attrs) in before.iter().enumerate() {
            prop_assert_eq!(&ed.document().attributes(i).unwrap(), attrs);
        }
    }
}
