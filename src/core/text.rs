//! Tokenization and separator-driven segmentation.
//!
//! These are the leaf operations of the pipeline: lowercasing and stripping
//! edge punctuation from tokens, splitting lines into normalized words, and
//! partitioning text on single-character separator sets. Everything here is
//! pure and allocation-light; segmentation returns borrowed fragments.

use crate::core::config::DEFAULT_EDGE_PUNCTUATION;

/// Lowercase a word-like string and strip edge punctuation.
///
/// Characters from `edge_punctuation` are removed from both ends only;
/// internal punctuation (apostrophes, hyphens) is preserved. Empty input
/// yields empty output. The operation is idempotent.
///
/// ```
/// use kenning_rs::core::config::DEFAULT_EDGE_PUNCTUATION;
/// use kenning_rs::normalize_token;
///
/// assert_eq!(
///     normalize_token("Happy Birthday!!!", DEFAULT_EDGE_PUNCTUATION),
///     "happy birthday"
/// );
/// assert_eq!(
///     normalize_token("-> It's on your left-hand side.", DEFAULT_EDGE_PUNCTUATION),
///     " it's on your left-hand side"
/// );
/// ```
pub fn normalize_token(raw: &str, edge_punctuation: &str) -> String {
    let lowered = raw.to_lowercase();
    lowered
        .trim_matches(|c: char| edge_punctuation.contains(c))
        .to_string()
}

/// Split `original` on any character contained in `separators`, discarding
/// fragments that are empty or whitespace-only.
///
/// Fragments keep their original internal whitespace and punctuation; no
/// normalization happens at this layer. A single scan classifying each
/// character as separator-or-not yields the same partition as splitting on
/// each separator in turn.
///
/// ```
/// use kenning_rs::split_on_separators;
///
/// assert_eq!(
///     split_on_separators("Hooray! Finally, we're done.", "!,"),
///     vec!["Hooray", " Finally", " we're done."]
/// );
/// ```
pub fn split_on_separators<'a>(original: &'a str, separators: &str) -> Vec<&'a str> {
    original
        .split(|c: char| separators.contains(c))
        .filter(|fragment| !is_blank(fragment))
        .collect()
}

/// Split raw text lines into normalized words, preserving line grouping.
///
/// Each line is split on whitespace runs, every raw word is normalized via
/// [`normalize_token`], and blank results are discarded. A line with zero
/// words yields an empty token list; feature computations downstream treat
/// an all-empty result as a precondition violation.
pub fn tokenize_lines<S: AsRef<str>>(lines: &[S], edge_punctuation: &str) -> Vec<Vec<String>> {
    lines
        .iter()
        .map(|line| {
            line.as_ref()
                .split_whitespace()
                .map(|word| normalize_token(word, edge_punctuation))
                .filter(|word| !is_blank(word))
                .collect()
        })
        .collect()
}

/// True if the string is empty or contains only whitespace.
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
