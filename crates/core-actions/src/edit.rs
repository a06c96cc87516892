//! Find / replace / case conversion / attribute toggling.
//!
//! Replacement keeps formatting attached to positions, not to text: the k-th
//! inserted character takes the attribute set of the k-th matched character.
//! When the replacement is longer than the match, the extra characters take the
//! set of the last matched character (attribute bleed). Case conversion goes
//! through the same primitive, so an italic selection stays italic even when
//! uppercasing lengthens it (`ß` -> `SS`).

use crate::{Editor, Result};
use core_state::Selection;
use core_text::{AttrKey, AttributeSet, search};
use std::ops::Range;
use tracing::debug;

impl Editor {
    /// Select the first (or, with `search_from_end`, the last) occurrence of
    /// `needle`. Returns false and leaves the selection alone when nothing matches.
    pub fn find_text(
        &mut self,
        needle: &str,
        case_sensitive: bool,
        search_from_end: bool,
    ) -> Result<bool> {
        let found = if search_from_end {
            search::rfind(&self.document().text(), needle, case_sensitive)
        } else {
            self.document().find(needle, 0, case_sensitive)
        };
        let Some(index) = found else {
            debug!(target: "actions.edit", needle_len = needle.chars().count(), case_sensitive, search_from_end, "find_miss");
            return Ok(false);
        };
        let end = index + needle.chars().count();
        self.state_mut().set_selection(Selection::new(index, end))?;
        debug!(target: "actions.edit", start = index, end, "find_hit");
        Ok(true)
    }

    /// Replace the first occurrence of `from` (or every occurrence with
    /// `replace_all`). Returns whether anything was replaced.
    ///
    /// Each replacement selects the inserted text, so after a replace-all the
    /// selection sits on the last replaced occurrence. Replace-all resumes
    /// scanning after the inserted text; text produced by a replacement is never
    /// itself rescanned.
    pub fn replace_text(
        &mut self,
        from: &str,
        to: &str,
        case_sensitive: bool,
        replace_all: bool,
    ) -> Result<bool> {
        let mut from_index = 0;
        let mut count = 0usize;
        while let Some(range) = self.replace_text_from(from, to, case_sensitive, from_index)? {
            count += 1;
            if !replace_all {
                break;
            }
            from_index = range.end;
        }
        debug!(target: "actions.edit", count, replace_all, case_sensitive, "replace_text");
        Ok(count > 0)
    }

    /// Replace the first occurrence of `from` at or after `from_index`.
    /// Returns the range of the inserted text.
    pub fn replace_text_from(
        &mut self,
        from: &str,
        to: &str,
        case_sensitive: bool,
        from_index: usize,
    ) -> Result<Option<Range<usize>>> {
        let Some(index) = self.document().find(from, from_index, case_sensitive) else {
            return Ok(None);
        };
        let range = self.replace_range(index, from.chars().count(), to)?;
        Ok(Some(range))
    }

    /// Replace `[start, start + len)` with `to`, carrying the replaced
    /// characters' attributes over position by position.
    fn replace_range(&mut self, start: usize, len: usize, to: &str) -> Result<Range<usize>> {
        let captured: Vec<AttributeSet> = self
            .document()
            .styled_run(start, start + len)?
            .attributes()
            .cloned()
            .collect();
        let to_len = to.chars().count();
        let doc = self.state_mut().document_mut();
        doc.remove(start, len)?;
        doc.insert(start, to, &AttributeSet::new())?;
        if let Some(last) = captured.last() {
            for k in 0..to_len {
                let attrs = captured.get(k).unwrap_or(last);
                doc.set_character_attributes(start + k, 1, attrs, true)?;
            }
        }
        let end = start + to_len;
        self.state_mut().set_selection(Selection::new(start, end))?;
        debug!(target: "actions.edit", start, removed = len, inserted = to_len, bleed = to_len.saturating_sub(len), "replace_range");
        Ok(start..end)
    }

    pub fn selection_to_upper_case(&mut self) -> Result<bool> {
        self.convert_selection_case(search::to_upper)
    }

    pub fn selection_to_lower_case(&mut self) -> Result<bool> {
        self.convert_selection_case(search::to_lower)
    }

    fn convert_selection_case(&mut self, convert: fn(&str) -> String) -> Result<bool> {
        let selection = self.selection();
        if selection.is_empty() {
            return Ok(false);
        }
        let original = self.state().selected_text()?;
        let converted = convert(&original);
        let replaced = self.replace_text_from(&original, &converted, true, selection.start())?;
        Ok(replaced.is_some())
    }

    /// True only if the selection is non-empty and every selected character has
    /// `key` set.
    pub fn selection_has_attribute(&self, key: AttrKey) -> bool {
        let selection = self.selection();
        self.document()
            .all_in_range(selection.start(), selection.end(), |a| a.flag(key))
            .unwrap_or(false)
    }

    /// Flip `key` across the selection: on if any character lacks it (so a mixed
    /// selection turns fully on), otherwise off.
    pub fn toggle_attribute(&mut self, key: AttrKey) -> Result<()> {
        let value = !self.selection_has_attribute(key);
        self.apply_to_selection(&AttributeSet::new().with(key, value))?;
        debug!(target: "actions.edit", key = key.as_str(), value, "toggle_attribute");
        Ok(())
    }

    pub fn toggle_bold(&mut self) -> Result<()> {
        self.toggle_attribute(AttrKey::Bold)
    }

    pub fn toggle_italic(&mut self) -> Result<()> {
        self.toggle_attribute(AttrKey::Italic)
    }

    pub fn toggle_underline(&mut self) -> Result<()> {
        self.toggle_attribute(AttrKey::Underline)
    }

    pub fn is_selection_bold(&self) -> bool {
        self.selection_has_attribute(AttrKey::Bold)
    }

    pub fn is_selection_italic(&self) -> bool {
        self.selection_has_attribute(AttrKey::Italic)
    }

    pub fn is_selection_underline(&self) -> bool {
        self.selection_has_attribute(AttrKey::Underline)
    }

    /// Apply a font to the selection. Underline and any other keys survive.
    pub fn set_selection_font(
        &mut self,
        family: &str,
        size: u32,
        bold: bool,
        italic: bool,
    ) -> Result<()> {
        let font = AttributeSet::new()
            .with(AttrKey::FontFamily, family)
            .with(AttrKey::FontSize, size)
            .with(AttrKey::Bold, bold)
            .with(AttrKey::Italic, italic);
        self.apply_to_selection(&font)
    }

    /// Merge `attrs` into every selected character.
    fn apply_to_selection(&mut self, attrs: &AttributeSet) -> Result<()> {
        let selection = self.selection();
        if selection.is_empty() {
            return Ok(());
        }
        self.state_mut().document_mut().set_character_attributes(
            selection.start(),
            selection.len(),
            attrs,
            false,
        )?;
        Ok(())
    }
}
