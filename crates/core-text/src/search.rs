//! Character-indexed substring search with optional case folding.
//!
//! Folding is a fixed per-character lowercase map independent of any locale. A
//! character whose lowercase form is more than one scalar (e.g. `İ`) folds to
//! itself, so folded text always has the same length as the original and match
//! indices can be used directly against the document.

use std::collections::VecDeque;

/// Fold a single character for case-insensitive comparison.
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn prepare(s: &str, case_sensitive: bool) -> Vec<char> {
    if case_sensitive {
        s.chars().collect()
    } else {
        s.chars().map(fold_char).collect()
    }
}

/// First occurrence of `needle` in a stream of characters, as an offset from
/// the start of the stream. An empty needle never matches. Keeps only a
/// needle-sized window in memory, so a rope can be scanned in place.
pub fn find_in_chars<I>(haystack: I, needle: &str, case_sensitive: bool) -> Option<usize>
where
    I: IntoIterator<Item = char>,
{
    let pat = prepare(needle, case_sensitive);
    if pat.is_empty() {
        return None;
    }
    let mut window: VecDeque<char> = VecDeque::with_capacity(pat.len());
    for (i, c) in haystack.into_iter().enumerate() {
        if window.len() == pat.len() {
            window.pop_front();
        }
        window.push_back(if case_sensitive { c } else { fold_char(c) });
        if window.len() == pat.len() && window.iter().eq(pat.iter()) {
            return Some(i + 1 - pat.len());
        }
    }
    None
}

/// Last occurrence of `needle` in `haystack`.
pub fn rfind(haystack: &str, needle: &str, case_sensitive: bool) -> Option<usize> {
    let hay = prepare(haystack, case_sensitive);
    let pat = prepare(needle, case_sensitive);
    if pat.is_empty() || pat.len() > hay.len() {
        return None;
    }
    let last_start = hay.len() - pat.len();
    (0..=last_start)
        .rev()
        .find(|&i| hay[i..i + pat.len()] == pat[..])
}

/// Full Unicode uppercase; may change length (`ß` becomes `SS`).
pub fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

/// Full Unicode lowercase; may change length.
pub fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(haystack: &str, needle: &str, from: usize, case_sensitive: bool) -> Option<usize> {
        find_in_chars(haystack.chars().skip(from), needle, case_sensitive).map(|i| i + from)
    }

    #[test]
    fn finds_first_and_last() {
        assert_eq!(find("xxabcxx", "abc", 0, true), Some(2));
        assert_eq!(rfind("ab ab", "ab", true), Some(3));
        assert_eq!(find("ab ab", "ab", 1, true), Some(3));
        assert_eq!(find("ab ab", "ab", 4, true), None);
    }

    #[test]
    fn streamed_search_reports_stream_offsets() {
        assert_eq!(find_in_chars("xxabcxx".chars().skip(3), "c", true), Some(1));
        assert_eq!(find_in_chars("aAa".chars(), "AA", false), Some(0));
        assert_eq!(find_in_chars("aab".chars(), "ab", true), Some(1));
        assert_eq!(find_in_chars("ab".chars(), "abc", true), None);
    }

    #[test]
    fn from_past_end_is_none() {
        assert_eq!(find("abc", "c", 10, true), None);
    }

    #[test]
    fn case_insensitive_folds_both_sides() {
        assert_eq!(find("Hello World", "WORLD", 0, false), Some(6));
        assert_eq!(find("Hello World", "WORLD", 0, true), None);
    }

    #[test]
    fn empty_needle_never_matches() {
        assert_eq!(find("abc", "", 0, true), None);
        assert_eq!(rfind("abc", "", false), None);
    }

    #[test]
    fn fold_keeps_length_for_multi_scalar_lowercase() {
        // 'İ' lowercases to two scalars; it must fold to itself.
        assert_eq!(fold_char('İ'), 'İ');
        assert_eq!(find("aİb", "b", 0, false), Some(2));
    }

    #[test]
    fn indices_are_char_based() {
        assert_eq!(find("ééx", "x", 0, true), Some(2));
    }

    #[test]
    fn upper_can_lengthen() {
        assert_eq!(to_upper("straße"), "STRASSE");
        assert_eq!(to_lower("ABC"), "abc");
    }
}
