//! File IO for the editor: the `.std` styled format plus plain-text import/export.
//!
//! Synchronous and minimal. Opening decodes into a fresh document before
//! touching the editor, so a failed open leaves the current document, selection
//! and file name exactly as they were.

use crate::{ActionError, Editor, Result};
use core_text::{StyledDocument, codec};
use std::path::{Path, PathBuf};

/// `path` with the `.std` extension appended unless it already ends in it.
/// `notes.txt` becomes `notes.txt.std`.
pub fn with_document_extension(path: &Path) -> PathBuf {
    if path
        .extension()
        .is_some_and(|ext| ext == codec::FILE_EXTENSION)
    {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(codec::FILE_EXTENSION);
    PathBuf::from(name)
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ActionError + '_ {
    move |source| {
        tracing::error!(target: "actions.io", path = %path.display(), error = %source, "io_error");
        ActionError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read and decode a styled document without touching any editor.
pub fn read_document(path: &Path) -> Result<StyledDocument> {
    let bytes = std::fs::read(path).map_err(io_error(path))?;
    let doc = codec::decode(&bytes).inspect_err(|e| {
        tracing::warn!(target: "actions.io", path = %path.display(), error = %e, "decode_failed");
    })?;
    Ok(doc)
}

impl Editor {
    /// Replace the current document with the one stored at `path`.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let doc = read_document(path)?;
        let chars = doc.len();
        self.state_mut()
            .replace_document(doc, Some(path.to_path_buf()));
        tracing::debug!(target: "actions.io", path = %path.display(), chars, "file_open_ok");
        Ok(())
    }

    /// Write the document to `path` (gaining the `.std` extension if missing)
    /// and remember it for [`Editor::save`]. Returns the path written.
    pub fn save_as(&mut self, path: &Path) -> Result<PathBuf> {
        let path = with_document_extension(path);
        self.write_to(&path)?;
        Ok(path)
    }

    /// Write to the remembered path exactly as recorded.
    pub fn save(&mut self) -> Result<PathBuf> {
        let Some(path) = self.state().file_name.clone() else {
            return Err(ActionError::NoFilename);
        };
        self.write_to(&path)?;
        Ok(path)
    }

    fn write_to(&mut self, path: &Path) -> Result<()> {
        let bytes = codec::encode(self.document())?;
        std::fs::write(path, &bytes).map_err(io_error(path))?;
        let state = self.state_mut();
        state.file_name = Some(path.to_path_buf());
        state.dirty = false;
        tracing::debug!(target: "actions.io", path = %path.display(), bytes = bytes.len(), "file_write_ok");
        Ok(())
    }

    pub fn saved_file_path(&self) -> Option<&Path> {
        self.state().file_name.as_deref()
    }

    /// Load UTF-8 text as an unformatted, not-yet-saved document.
    pub fn import_plain(&mut self, path: &Path) -> Result<()> {
        let text = std::fs::read_to_string(path).map_err(io_error(path))?;
        let state = self.state_mut();
        state.replace_document(StyledDocument::from_plain(&text), None);
        state.dirty = true;
        Ok(())
    }

    /// Write the plain-text projection of the document.
    pub fn export_plain(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.document().text()).map_err(io_error(path))?;
        Ok(())
    }
}
