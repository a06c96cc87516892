//! Two-level clipboard: a styled run held in-process plus its plain-text
//! projection pushed to the system clipboard.
//!
//! Other applications only ever see plain text. Pasting inside the editor uses
//! the styled run, but only while the system clipboard still holds exactly the
//! projection we last pushed; once anything else has written to it the styled
//! payload is stale and paste falls back to the system text.
//!
//! The store is a single-owner service: create one at startup and pass it by
//! `&mut` to the operations that need it.

use anyhow::Result;
use core_text::StyledRun;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

/// Plain-text channel shared with other applications.
pub trait SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
    /// Current text; an empty clipboard reads as `""`.
    fn text(&mut self) -> Result<String>;
}

/// In-process stand-in for the system clipboard.
///
/// Clones share one slot, so a test (or a headless host) can keep a handle and
/// overwrite the text behind the editor's back the way another application would.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    slot: Rc<RefCell<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the shared text from outside the editor.
    pub fn set_external(&self, text: &str) {
        *self.slot.borrow_mut() = text.to_string();
    }

    pub fn peek(&self) -> String {
        self.slot.borrow().clone()
    }
}

impl SystemClipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.set_external(text);
        Ok(())
    }

    fn text(&mut self) -> Result<String> {
        Ok(self.peek())
    }
}

/// OS clipboard backed by `arboard`.
#[cfg(feature = "system-clipboard")]
pub struct OsClipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "system-clipboard")]
impl OsClipboard {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

#[cfg(feature = "system-clipboard")]
impl SystemClipboard for OsClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner.set_text(text)?;
        Ok(())
    }

    fn text(&mut self) -> Result<String> {
        match self.inner.get_text() {
            Ok(s) => Ok(s),
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }
}

/// What a paste should insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PastePayload {
    /// The system clipboard still matches; insert with per-character formatting.
    Styled(StyledRun),
    /// Someone else owns the system clipboard; insert this text unformatted.
    Plain(String),
    Empty,
}

pub struct StyledClipboard {
    contents: StyledRun,
    system: Box<dyn SystemClipboard>,
}

impl std::fmt::Debug for StyledClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyledClipboard")
            .field("chars", &self.contents.len())
            .finish()
    }
}

impl StyledClipboard {
    pub fn new(system: Box<dyn SystemClipboard>) -> Self {
        Self {
            contents: StyledRun::new(),
            system,
        }
    }

    /// Clipboard backed by a fresh [`MemoryClipboard`]; returns a handle to it.
    pub fn in_memory() -> (Self, MemoryClipboard) {
        let handle = MemoryClipboard::new();
        (Self::new(Box::new(handle.clone())), handle)
    }

    /// Store `run` as the current contents and push its plain text to the system
    /// clipboard. The previous run is always replaced; `clear_first` additionally
    /// empties the system clipboard before the new text is written.
    pub fn set_contents(&mut self, run: StyledRun, clear_first: bool) {
        if clear_first {
            self.clear();
        }
        self.contents = run;
        let text = self.contents_as_string();
        self.push_system(&text);
        debug!(target: "state.clipboard", chars = self.contents.len(), clear_first, "set_contents");
    }

    pub fn contents(&self) -> &StyledRun {
        &self.contents
    }

    /// Plain-text projection of the stored run.
    pub fn contents_as_string(&self) -> String {
        self.contents.text()
    }

    /// Resolve what a paste should insert right now.
    pub fn paste_payload(&mut self) -> PastePayload {
        let system = match self.system.text() {
            Ok(s) => s,
            Err(e) => {
                warn!(target: "state.clipboard", error = %e, "system_clipboard_read_failed");
                String::new()
            }
        };
        let internal = self.contents_as_string();
        if !internal.is_empty() && system == internal {
            debug!(target: "state.clipboard", chars = self.contents.len(), "paste_styled");
            PastePayload::Styled(self.contents.clone())
        } else if !system.is_empty() {
            debug!(target: "state.clipboard", chars = system.chars().count(), stale = !internal.is_empty(), "paste_plain");
            PastePayload::Plain(system)
        } else {
            PastePayload::Empty
        }
    }

    fn clear(&mut self) {
        self.contents = StyledRun::new();
        self.push_system("");
    }

    fn push_system(&mut self, text: &str) {
        if let Err(e) = self.system.set_text(text) {
            warn!(target: "state.clipboard", error = %e, "system_clipboard_write_failed");
        }
    }
}
