//! Cut / copy / paste against an explicitly passed [`StyledClipboard`].

use crate::{Editor, Result};
use core_state::{PastePayload, Selection, StyledClipboard};
use core_text::AttributeSet;
use tracing::debug;

impl Editor {
    /// Store the selection (with formatting) in the clipboard. An empty
    /// selection stores an empty run, clearing the clipboard.
    pub fn copy(&mut self, clipboard: &mut StyledClipboard) -> Result<()> {
        let run = self.state().selected_run()?;
        debug!(target: "actions.clipboard", chars = run.len(), "copy");
        clipboard.set_contents(run, true);
        Ok(())
    }

    /// Like [`Editor::copy`], then remove the selection and collapse the caret
    /// to where it started.
    pub fn cut(&mut self, clipboard: &mut StyledClipboard) -> Result<()> {
        let selection = self.selection();
        let run = self
            .state_mut()
            .document_mut()
            .remove(selection.start(), selection.len())?;
        self.state_mut()
            .set_selection(Selection::caret(selection.start()))?;
        debug!(target: "actions.clipboard", start = selection.start(), chars = run.len(), "cut");
        clipboard.set_contents(run, true);
        Ok(())
    }

    /// Replace the selection with the clipboard payload. The styled run is used
    /// only while the system clipboard still matches it; otherwise the system
    /// text is inserted without formatting. Returns the number of characters
    /// inserted; the caret ends after them.
    pub fn paste(&mut self, clipboard: &mut StyledClipboard) -> Result<usize> {
        let payload = clipboard.paste_payload();
        let selection = self.selection();
        let start = selection.start();
        if !selection.is_empty() {
            self.state_mut()
                .document_mut()
                .remove(start, selection.len())?;
        }
        let inserted = match payload {
            PastePayload::Styled(run) => {
                self.state_mut().document_mut().insert_run(start, &run)?;
                run.len()
            }
            PastePayload::Plain(text) => {
                self.state_mut()
                    .document_mut()
                    .insert(start, &text, &AttributeSet::new())?;
                text.chars().count()
            }
            PastePayload::Empty => 0,
        };
        self.state_mut()
            .set_selection(Selection::caret(start + inserted))?;
        debug!(target: "actions.clipboard", start, replaced = selection.len(), inserted, "paste");
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::{AttrKey, StyledDocument};

    #[test]
    fn paste_replaces_selection() {
        let (mut cb, system) = StyledClipboard::in_memory();
        system.set_external("new");
        let mut ed = Editor::with_document(StyledDocument::from_plain("old text"));
        ed.select(0, 3).unwrap();
        assert_eq!(ed.paste(&mut cb).unwrap(), 3);
        assert_eq!(ed.document().text(), "new text");
        assert_eq!(ed.selection(), Selection::caret(3));
    }

    #[test]
    fn copy_keeps_document_and_selection() {
        let (mut cb, system) = StyledClipboard::in_memory();
        let mut ed = Editor::with_document(StyledDocument::from_plain("abc"));
        ed.select(1, 3).unwrap();
        ed.copy(&mut cb).unwrap();
        assert_eq!(system.peek(), "bc");
        assert_eq!(ed.document().text(), "abc");
        assert_eq!(ed.selection(), Selection::new(1, 3));
        assert!(!ed.is_dirty());
    }

    #[test]
    fn cut_collapses_selection() {
        let (mut cb, _system) = StyledClipboard::in_memory();
        let mut ed = Editor::with_document(StyledDocument::from_plain("abcdef"));
        ed.select(2, 4).unwrap();
        ed.cut(&mut cb).unwrap();
        assert_eq!(ed.document().text(), "abef");
        assert_eq!(ed.selection(), Selection::caret(2));
        assert_eq!(cb.contents_as_string(), "cd");
    }

    #[test]
    fn paste_with_empty_clipboard_still_removes_selection() {
        let (mut cb, _system) = StyledClipboard::in_memory();
        let mut ed = Editor::with_document(StyledDocument::from_plain("abc"));
        ed.select(0, 1).unwrap();
        assert_eq!(ed.paste(&mut cb).unwrap(), 0);
        assert_eq!(ed.document().text(), "bc");
    }

    #[test]
    fn styled_paste_keeps_each_characters_attributes() {
        let (mut cb, _system) = StyledClipboard::in_memory();
        let mut doc = StyledDocument::from_plain("ab");
        doc.set_character_attributes(0, 1, &AttributeSet::new().with(AttrKey::Bold, true), true)
            .unwrap();
        let mut ed = Editor::with_document(doc);
        ed.select(0, 2).unwrap();
        ed.copy(&mut cb).unwrap();
        ed.select(2, 2).unwrap();
        ed.paste(&mut cb).unwrap();
        assert_eq!(ed.document().text(), "abab");
        let bold: Vec<bool> = (0..4)
            .map(|i| ed.document().attributes(i).unwrap().is_bold())
            .collect();
        assert_eq!(bold, vec![true, false, true, false]);
    }
}
