//! Word counting over a fixed delimiter set.

/// Characters that separate words.
pub const WORD_DELIMITERS: &str = " ,.!?/\\()[]{};:\t\r\n";

pub fn is_delimiter(c: char) -> bool {
    WORD_DELIMITERS.contains(c)
}

/// Number of non-empty tokens in `text` after splitting on [`WORD_DELIMITERS`].
pub fn word_count(text: &str) -> usize {
    text.split(is_delimiter).filter(|t| !t.is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_tokens_between_delimiters() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("one, two;three"), 3);
        assert_eq!(word_count("(a)[b]{c}"), 3);
        assert_eq!(word_count("line\r\nnext\tword"), 3);
    }

    #[test]
    fn apostrophes_and_hyphens_stay_inside_words() {
        assert_eq!(word_count("don't stop-gap"), 2);
    }
}
