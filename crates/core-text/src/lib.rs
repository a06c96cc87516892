//! Rope-backed styled document: text plus one attribute set per character.
//!
//! Positions are character (Unicode scalar value) indices. The text lives in a
//! `ropey::Rope`; attributes live in a parallel vector whose length always equals
//! `rope.len_chars()`. Every public mutation validates its range up front and
//! fails with [`TextError::OutOfRange`] without touching either side, so the two
//! halves can never drift apart.

use ropey::Rope;
use std::ops::Range;
use thiserror::Error;
use tracing::trace;

pub mod attrs;
pub mod codec;
pub mod run;
pub mod search;
pub mod words;

pub use attrs::{AttrKey, AttrValue, AttributeSet};
pub use run::{StyledChar, StyledRun};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    #[error("range {start}..{end} is out of bounds for a document of length {len}")]
    OutOfRange { start: usize, end: usize, len: usize },
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to encode document: {0}")]
    Encode(String),
}

pub type Result<T, E = TextError> = std::result::Result<T, E>;

/// A maximal span of characters sharing one attribute set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrSpan {
    pub range: Range<usize>,
    pub attrs: AttributeSet,
}

#[derive(Clone, Default)]
pub struct StyledDocument {
    rope: Rope,
    attrs: Vec<AttributeSet>,
}

impl std::fmt::Debug for StyledDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyledDocument")
            .field("len", &self.len())
            .field("spans", &self.spans().len())
            .finish()
    }
}

impl PartialEq for StyledDocument {
    fn eq(&self, other: &Self) -> bool {
        self.rope == other.rope && self.attrs == other.attrs
    }
}

impl Eq for StyledDocument {}

impl StyledDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unformatted document holding `text`.
    pub fn from_plain(text: &str) -> Self {
        let rope = Rope::from_str(text);
        let attrs = vec![AttributeSet::new(); rope.len_chars()];
        Self { rope, attrs }
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full content.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Text in `[start, end)`.
    pub fn slice(&self, start: usize, end: usize) -> Result<String> {
        self.check_range(start, end)?;
        Ok(self.rope.slice(start..end).to_string())
    }

    /// Character at `idx`.
    pub fn char_at(&self, idx: usize) -> Result<char> {
        self.check_index(idx)?;
        Ok(self.rope.char(idx))
    }

    /// Attribute set of the character at `idx`.
    pub fn attributes(&self, idx: usize) -> Result<AttributeSet> {
        self.check_index(idx)?;
        Ok(self.attrs[idx].clone())
    }

    /// Characters in `[start, end)` each with its own attribute set.
    pub fn styled_run(&self, start: usize, end: usize) -> Result<StyledRun> {
        self.check_range(start, end)?;
        Ok(self
            .rope
            .slice(start..end)
            .chars()
            .zip(&self.attrs[start..end])
            .map(|(ch, a)| StyledChar::new(ch, a.clone()))
            .collect())
    }

    /// Insert `text` at `at`; every inserted character receives `attrs`.
    /// Inserted text never inherits formatting from its neighbours.
    pub fn insert(&mut self, at: usize, text: &str, attrs: &AttributeSet) -> Result<()> {
        if at > self.len() {
            return Err(self.out_of_range(at, at));
        }
        let count = text.chars().count();
        self.rope.insert(at, text);
        self.attrs
            .splice(at..at, std::iter::repeat_n(attrs.clone(), count));
        trace!(target: "text.document", at, count, len = self.len(), "insert");
        Ok(())
    }

    /// Insert a styled run at `at`, each character keeping its own attributes.
    pub fn insert_run(&mut self, at: usize, run: &StyledRun) -> Result<()> {
        if at > self.len() {
            return Err(self.out_of_range(at, at));
        }
        self.rope.insert(at, &run.text());
        self.attrs
            .splice(at..at, run.attributes().cloned());
        trace!(target: "text.document", at, count = run.len(), len = self.len(), "insert_run");
        Ok(())
    }

    /// Delete `length` characters starting at `start`, returning what was removed.
    pub fn remove(&mut self, start: usize, length: usize) -> Result<StyledRun> {
        let end = start
            .checked_add(length)
            .ok_or_else(|| self.out_of_range(start, usize::MAX))?;
        let removed = self.styled_run(start, end)?;
        self.rope.remove(start..end);
        self.attrs.drain(start..end);
        trace!(target: "text.document", start, length, len = self.len(), "remove");
        Ok(removed)
    }

    /// Apply `attrs` over `[start, start + length)`.
    ///
    /// With `replace` each character's set becomes exactly `attrs`; otherwise the
    /// keys named in `attrs` overwrite the character's prior values for those keys
    /// and every other key is kept.
    pub fn set_character_attributes(
        &mut self,
        start: usize,
        length: usize,
        attrs: &AttributeSet,
        replace: bool,
    ) -> Result<()> {
        let end = start
            .checked_add(length)
            .ok_or_else(|| self.out_of_range(start, usize::MAX))?;
        self.check_range(start, end)?;
        for slot in &mut self.attrs[start..end] {
            *slot = if replace {
                attrs.clone()
            } else {
                slot.merge(attrs)
            };
        }
        trace!(target: "text.document", start, length, replace, keys = attrs.len(), "set_character_attributes");
        Ok(())
    }

    /// Run-length view of the attributes: adjacent characters with equal sets are
    /// grouped into one span. Empty documents yield no spans.
    pub fn spans(&self) -> Vec<AttrSpan> {
        let mut out: Vec<AttrSpan> = Vec::new();
        for (i, a) in self.attrs.iter().enumerate() {
            match out.last_mut() {
                Some(span) if span.attrs == *a => span.range.end = i + 1,
                _ => out.push(AttrSpan {
                    range: i..i + 1,
                    attrs: a.clone(),
                }),
            }
        }
        out
    }

    /// First occurrence of `needle` at or after `from`, scanning the rope in
    /// place. `from` past the end finds nothing.
    pub fn find(&self, needle: &str, from: usize, case_sensitive: bool) -> Option<usize> {
        if from > self.len() {
            return None;
        }
        search::find_in_chars(self.rope.chars_at(from), needle, case_sensitive).map(|i| i + from)
    }

    /// True when every character in `[start, end)` satisfies `pred`.
    /// Empty ranges yield `false`.
    pub fn all_in_range<F>(&self, start: usize, end: usize, mut pred: F) -> Result<bool>
    where
        F: FnMut(&AttributeSet) -> bool,
    {
        self.check_range(start, end)?;
        Ok(start != end && self.attrs[start..end].iter().all(|a| pred(a)))
    }

    /// Assemble a document from text and a per-character attribute vector.
    pub(crate) fn from_parts(text: &str, attrs: Vec<AttributeSet>) -> Result<Self> {
        let rope = Rope::from_str(text);
        if rope.len_chars() != attrs.len() {
            return Err(TextError::UnsupportedFormat(format!(
                "attribute runs cover {} characters but text has {}",
                attrs.len(),
                rope.len_chars()
            )));
        }
        Ok(Self { rope, attrs })
    }

    fn check_index(&self, idx: usize) -> Result<()> {
        if idx >= self.len() {
            return Err(self.out_of_range(idx, idx.saturating_add(1)));
        }
        Ok(())
    }

    fn check_range(&self, start: usize, end: usize) -> Result<()> {
        if start > end || end > self.len() {
            return Err(self.out_of_range(start, end));
        }
        Ok(())
    }

    fn out_of_range(&self, start: usize, end: usize) -> TextError {
        TextError::OutOfRange {
            start,
            end,
            len: self.len(),
        }
    }
}
