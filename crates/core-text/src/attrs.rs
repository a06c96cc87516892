//! Per-character formatting attributes.
//!
//! An [`AttributeSet`] is an immutable snapshot: every "mutation" returns a new
//! set and leaves the receiver untouched. Sets are reference counted so that a
//! run of characters formatted together shares one allocation; writing to one
//! position never leaks into another.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Formatting property names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrKey {
    Bold,
    Italic,
    Underline,
    FontFamily,
    FontSize,
}

impl AttrKey {
    pub fn as_str(self) -> &'static str {
        match self {
            AttrKey::Bold => "bold",
            AttrKey::Italic => "italic",
            AttrKey::Underline => "underline",
            AttrKey::FontFamily => "font_family",
            AttrKey::FontSize => "font_size",
        }
    }

    /// Whether `value` has the shape this key expects.
    pub fn accepts(self, value: &AttrValue) -> bool {
        matches!(
            (self, value),
            (
                AttrKey::Bold | AttrKey::Italic | AttrKey::Underline,
                AttrValue::Flag(_)
            ) | (AttrKey::FontFamily, AttrValue::Text(_))
                | (AttrKey::FontSize, AttrValue::Size(_))
        )
    }
}

impl fmt::Display for AttrKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Flag(bool),
    Size(u32),
    Text(String),
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Flag(v)
    }
}

impl From<u32> for AttrValue {
    fn from(v: u32) -> Self {
        AttrValue::Size(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Text(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Text(v)
    }
}

/// Immutable mapping from [`AttrKey`] to [`AttrValue`] held per character.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet(Arc<BTreeMap<AttrKey, AttrValue>>);

impl AttributeSet {
    /// The empty set ("no formatting").
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this set with `key` bound to `value` (any prior value is dropped).
    pub fn with(&self, key: AttrKey, value: impl Into<AttrValue>) -> Self {
        let mut map = (*self.0).clone();
        map.insert(key, value.into());
        Self(Arc::new(map))
    }

    /// Key-wise merge: every key present in `overlay` replaces the value held here,
    /// all other keys survive.
    pub fn merge(&self, overlay: &AttributeSet) -> Self {
        if overlay.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return overlay.clone();
        }
        let mut map = (*self.0).clone();
        for (k, v) in overlay.iter() {
            map.remove(k);
            map.insert(*k, v.clone());
        }
        Self(Arc::new(map))
    }

    pub fn get(&self, key: AttrKey) -> Option<&AttrValue> {
        self.0.get(&key)
    }

    /// Boolean view of a flag attribute; absent or non-flag values read as `false`.
    pub fn flag(&self, key: AttrKey) -> bool {
        matches!(self.0.get(&key), Some(AttrValue::Flag(true)))
    }

    pub fn is_bold(&self) -> bool {
        self.flag(AttrKey::Bold)
    }

    pub fn is_italic(&self) -> bool {
        self.flag(AttrKey::Italic)
    }

    pub fn is_underline(&self) -> bool {
        self.flag(AttrKey::Underline)
    }

    pub fn font_family(&self) -> Option<&str> {
        match self.0.get(&AttrKey::FontFamily) {
            Some(AttrValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn font_size(&self) -> Option<u32> {
        match self.0.get(&AttrKey::FontSize) {
            Some(AttrValue::Size(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AttrKey, &AttrValue)> {
        self.0.iter()
    }

    /// True when both handles point at the same snapshot.
    pub fn ptr_eq(&self, other: &AttributeSet) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// First key whose value has the wrong shape, if any.
    pub fn first_mismatch(&self) -> Option<AttrKey> {
        self.0
            .iter()
            .find(|(k, v)| !k.accepts(v))
            .map(|(k, _)| *k)
    }
}

impl fmt::Debug for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl FromIterator<(AttrKey, AttrValue)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (AttrKey, AttrValue)>>(iter: I) -> Self {
        Self(Arc::new(iter.into_iter().collect()))
    }
}
