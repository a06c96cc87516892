//! Formatting-preserving edit operations over a styled document.
//!
//! [`Editor`] is the surface a UI drives: selection, find/replace, case
//! conversion, attribute toggling, cut/copy/paste, counts, and file I/O. Every
//! operation runs synchronously to completion on the caller's thread.
//!
//! Module map:
//! * `edit` – find, replace, case conversion, attribute toggles, fonts.
//! * `clipboard_ops` – cut/copy/paste against an injected [`StyledClipboard`].
//! * `stats` – word and character counts for the status bar.
//! * `io_ops` – open/save of the persisted `.std` format, plain import/export.
//!
//! Errors: range violations surface as [`ActionError::Text`] wrapping
//! `TextError::OutOfRange`; undecodable files as `TextError::UnsupportedFormat`.
//! A search that finds nothing is not an error; it returns `false`.

use core_state::{EditorState, Selection};
use core_text::{StyledDocument, TextError};
use std::path::PathBuf;
use thiserror::Error;

pub mod clipboard_ops;
pub mod edit;
pub mod io_ops;
pub mod stats;

pub use core_state::{MemoryClipboard, PastePayload, StyledClipboard, SystemClipboard};
pub use stats::StatusCounts;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Text(#[from] TextError),
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("document has no file name; use save as")]
    NoFilename,
}

pub type Result<T, E = ActionError> = std::result::Result<T, E>;

#[derive(Debug, Clone, Default)]
pub struct Editor {
    state: EditorState,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: StyledDocument) -> Self {
        Self {
            state: EditorState::new(document),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }

    pub fn document(&self) -> &StyledDocument {
        self.state.document()
    }

    pub fn selection(&self) -> Selection {
        self.state.selection()
    }

    /// Select `[start, end)` (ends may be given in either order).
    pub fn select(&mut self, start: usize, end: usize) -> Result<()> {
        self.state.set_selection(Selection::new(start, end))?;
        Ok(())
    }

    pub fn select_all(&mut self) {
        self.state.select_all();
    }

    pub fn selected_text(&self) -> String {
        self.state.selected_text().unwrap_or_default()
    }

    /// Whether the editor holds any text (callers prompt before discarding it).
    pub fn has_content(&self) -> bool {
        !self.document().is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.state.dirty
    }
}
