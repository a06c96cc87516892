//! Styled runs: characters paired with their own attribute sets.

use crate::attrs::AttributeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledChar {
    pub ch: char,
    pub attrs: AttributeSet,
}

impl StyledChar {
    pub fn new(ch: char, attrs: AttributeSet) -> Self {
        Self { ch, attrs }
    }
}

/// A contiguous sequence of characters together with their individual attribute
/// sets, as transferred through the clipboard or captured from a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledRun {
    chars: Vec<StyledChar>,
}

impl StyledRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every character of `text` receives `attrs`.
    pub fn uniform(text: &str, attrs: &AttributeSet) -> Self {
        text.chars()
            .map(|ch| StyledChar::new(ch, attrs.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StyledChar> {
        self.chars.iter()
    }

    /// Plain-text projection.
    pub fn text(&self) -> String {
        self.chars.iter().map(|c| c.ch).collect()
    }

    pub fn attributes(&self) -> impl Iterator<Item = &AttributeSet> {
        self.chars.iter().map(|c| &c.attrs)
    }
}

impl FromIterator<StyledChar> for StyledRun {
    fn from_iter<I: IntoIterator<Item = StyledChar>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StyledRun {
    type Item = &'a StyledChar;
    type IntoIter = std::slice::Iter<'a, StyledChar>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars.iter()
    }
}
