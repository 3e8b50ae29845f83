use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Number of maximal runs of word characters in `text`. Punctuation never
/// counts as a word.
pub fn count_words(text: &str) -> usize {
    WORD_RE.find_iter(text).count()
}
