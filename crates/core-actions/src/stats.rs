//! Word and character counts for the status bar.
//!
//! Polled periodically by the UI; every function here is read-only.

use crate::Editor;
use core_text::words::word_count;

/// One poll's worth of counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub words: usize,
    pub selected_words: usize,
    pub chars: usize,
    pub selected_chars: usize,
}

impl StatusCounts {
    /// `"5 words"`, or `"2 of 5 words"` while a selection contains words.
    pub fn word_label(&self) -> String {
        label(self.selected_words, self.words, "word", "words")
    }

    /// `"12 characters"`, or `"3 of 12 characters"` while text is selected.
    pub fn char_label(&self) -> String {
        label(self.selected_chars, self.chars, "character", "characters")
    }
}

fn label(selected: usize, total: usize, one: &str, many: &str) -> String {
    let noun = if total == 1 { one } else { many };
    if selected == 0 {
        format!("{total} {noun}")
    } else {
        format!("{selected} of {total} {noun}")
    }
}

impl Editor {
    pub fn word_count(&self) -> usize {
        word_count(&self.document().text())
    }

    pub fn selected_word_count(&self) -> usize {
        if self.selection().is_empty() {
            return 0;
        }
        word_count(&self.selected_text())
    }

    pub fn char_count(&self) -> usize {
        self.document().len()
    }

    pub fn selected_char_count(&self) -> usize {
        self.selection().len()
    }

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts {
            words: self.word_count(),
            selected_words: self.selected_word_count(),
            chars: self.char_count(),
            selected_chars: self.selected_char_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::StyledDocument;

    #[test]
    fn counts_whole_document_and_selection() {
        let mut ed = Editor::with_document(StyledDocument::from_plain("one two, three."));
        assert_eq!(ed.word_count(), 3);
        assert_eq!(ed.char_count(), 15);
        assert_eq!(ed.selected_word_count(), 0);
        ed.select(4, 12).unwrap();
        assert_eq!(ed.selected_word_count(), 2);
        assert_eq!(ed.selected_char_count(), 8);
    }

    #[test]
    fn labels_pluralize_on_total() {
        let single = StatusCounts {
            words: 1,
            selected_words: 0,
            chars: 1,
            selected_chars: 0,
        };
        assert_eq!(single.word_label(), "1 word");
        assert_eq!(single.char_label(), "1 character");
        let partial = StatusCounts {
            words: 5,
            selected_words: 2,
            chars: 30,
            selected_chars: 9,
        };
        assert_eq!(partial.word_label(), "2 of 5 words");
        assert_eq!(partial.char_label(), "9 of 30 characters");
        assert_eq!(StatusCounts::default().word_label(), "0 words");
    }

    #[test]
    fn char_count_is_in_characters_not_bytes() {
        let ed = Editor::with_document(StyledDocument::from_plain("naïve"));
        assert_eq!(ed.char_count(), 5);
    }
}
