//! Editor state: the styled document, the active selection, and file metadata.
//!
//! Selections are half-open character ranges `[start, end)`; an empty range is
//! a caret. The state validates every selection against the document so edit
//! operations can index without re-checking bounds.
//!
//! The clipboard is deliberately not part of this state. It is a separate
//! single-owner service (see [`clipboard::StyledClipboard`]) handed to the
//! operations that need it.

use core_text::{StyledDocument, StyledRun, TextError};
use std::ops::Range;
use std::path::PathBuf;
use tracing::trace;

pub mod clipboard;

pub use clipboard::{MemoryClipboard, PastePayload, StyledClipboard, SystemClipboard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    start: usize,
    end: usize,
}

impl Selection {
    /// Construct a selection normalizing ordering so that start <= end.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Empty selection at `pos`.
    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the selection is empty (start == end).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditorState {
    document: StyledDocument,
    selection: Selection,
    /// Path the document was last opened from or saved to.
    pub file_name: Option<PathBuf>,
    /// Set by every mutation, cleared by a successful save or open.
    pub dirty: bool,
}

impl EditorState {
    pub fn new(document: StyledDocument) -> Self {
        Self {
            document,
            selection: Selection::default(),
            file_name: None,
            dirty: false,
        }
    }

    pub fn document(&self) -> &StyledDocument {
        &self.document
    }

    /// Mutable access to the document; marks the state dirty.
    ///
    /// Callers that shrink the document are responsible for resetting the
    /// selection afterwards (see [`EditorState::set_selection`]).
    pub fn document_mut(&mut self) -> &mut StyledDocument {
        self.dirty = true;
        &mut self.document
    }

    /// Swap in a new document (after open). Selection collapses to the start.
    pub fn replace_document(&mut self, document: StyledDocument, file_name: Option<PathBuf>) {
        self.document = document;
        self.selection = Selection::caret(0);
        self.file_name = file_name;
        self.dirty = false;
        trace!(target: "state", len = self.document.len(), "document_replaced");
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn set_selection(&mut self, selection: Selection) -> Result<(), TextError> {
        if selection.end() > self.document.len() {
            return Err(TextError::OutOfRange {
                start: selection.start(),
                end: selection.end(),
                len: self.document.len(),
            });
        }
        self.selection = selection;
        Ok(())
    }

    /// Select the whole document. Always in bounds.
    pub fn select_all(&mut self) {
        self.selection = Selection::new(0, self.document.len());
    }

    pub fn selected_text(&self) -> Result<String, TextError> {
        self.document.slice(self.selection.start, self.selection.end)
    }

    pub fn selected_run(&self) -> Result<StyledRun, TextError> {
        self.document
            .styled_run(self.selection.start, self.selection.end)
    }
}
