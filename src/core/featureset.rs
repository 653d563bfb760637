//! Signature extraction and the five stylometric features.
//!
//! A signature characterizes an author's style with five scalars: average
//! word length, type-token ratio, hapax legomena ratio, average sentence
//! length, and average sentence complexity. All five are derived from the
//! separator-driven tokenization in [`crate::core::text`]; nothing here is
//! grammar-aware, so the features are deterministic across arbitrary authors
//! restricted to the configured punctuation set.
//!
//! Callers must supply text containing at least one word and at least one
//! sentence; a zero denominator is reported as
//! [`KenningError::EmptyInput`](crate::core::errors::KenningError) rather
//! than silently producing NaN.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::TextConfig;
use crate::core::errors::{KenningError, Result};
use crate::core::text::{is_blank, normalize_token, split_on_separators, tokenize_lines};

/// Number of scalar features in a signature.
pub const FEATURE_COUNT: usize = 5;

/// An author's linguistic signature: a label plus five features in fixed
/// order.
///
/// The legacy representation was a heterogeneous 6-item list with the label
/// at index 0; the structured record keeps the label out of the numeric
/// vector so feature indices cannot be confused with the label slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    /// Author label; opaque, never compared numerically
    pub author: String,

    /// Feature values in fixed order: average word length, type-token
    /// ratio, hapax legomena ratio, average sentence length, average
    /// sentence complexity
    pub features: [f64; FEATURE_COUNT],
}

impl Signature {
    /// Create a signature from a label and a feature vector.
    pub fn new(author: impl Into<String>, features: [f64; FEATURE_COUNT]) -> Self {
        Self {
            author: author.into(),
            features,
        }
    }

    /// Average word length feature.
    pub fn avg_word_length(&self) -> f64 {
        self.features[0]
    }

    /// Type-token ratio feature.
    pub fn type_token_ratio(&self) -> f64 {
        self.features[1]
    }

    /// Hapax legomena ratio feature.
    pub fn hapax_legomena_ratio(&self) -> f64 {
        self.features[2]
    }

    /// Average sentence length feature.
    pub fn avg_sentence_length(&self) -> f64 {
        self.features[3]
    }

    /// Average sentence complexity feature.
    pub fn avg_sentence_complexity(&self) -> f64 {
        self.features[4]
    }
}

/// Computes signatures from line-oriented text using configured
/// segmentation rules.
///
/// Each line is expected to retain its terminating line break; sentence
/// segmentation concatenates lines verbatim, so a missing break would fuse
/// the last word of one line with the first word of the next.
#[derive(Debug, Clone, Default)]
pub struct SignatureExtractor {
    text: TextConfig,
}

/// Aggregate token statistics gathered in one pass over the tokenized text.
struct TokenCensus {
    total_tokens: usize,
    total_chars: usize,
    distinct_tokens: usize,
    hapax_tokens: usize,
}

impl SignatureExtractor {
    /// Create an extractor with the given segmentation rules.
    pub fn new(text: TextConfig) -> Self {
        Self { text }
    }

    /// The segmentation rules this extractor applies.
    pub fn text_config(&self) -> &TextConfig {
        &self.text
    }

    /// Compute the full five-feature signature for `lines` under `author`.
    pub fn extract<S: AsRef<str>>(&self, lines: &[S], author: &str) -> Result<Signature> {
        Ok(Signature::new(
            author,
            [
                self.avg_word_length(lines)?,
                self.type_token_ratio(lines)?,
                self.hapax_legomena_ratio(lines)?,
                self.avg_sentence_length(lines)?,
                self.avg_sentence_complexity(lines)?,
            ],
        ))
    }

    /// Average number of characters per word across all lines.
    pub fn avg_word_length<S: AsRef<str>>(&self, lines: &[S]) -> Result<f64> {
        let census = self.token_census(lines, "avg_word_length")?;
        Ok(census.total_chars as f64 / census.total_tokens as f64)
    }

    /// Distinct words divided by total words.
    pub fn type_token_ratio<S: AsRef<str>>(&self, lines: &[S]) -> Result<f64> {
        let census = self.token_census(lines, "type_token_ratio")?;
        Ok(census.distinct_tokens as f64 / census.total_tokens as f64)
    }

    /// Words occurring exactly once divided by total words.
    ///
    /// Multiplicity is counted globally across all lines, not per line.
    pub fn hapax_legomena_ratio<S: AsRef<str>>(&self, lines: &[S]) -> Result<f64> {
        let census = self.token_census(lines, "hapax_legomena_ratio")?;
        Ok(census.hapax_tokens as f64 / census.total_tokens as f64)
    }

    /// Average number of words per sentence.
    ///
    /// Lines are concatenated into one string before sentences are split on
    /// the configured terminators; within each sentence, line breaks are
    /// treated as spaces and words are normalized before counting.
    pub fn avg_sentence_length<S: AsRef<str>>(&self, lines: &[S]) -> Result<f64> {
        let text = concat_lines(lines);
        let sentences = split_on_separators(&text, &self.text.sentence_terminators);
        if sentences.is_empty() {
            return Err(KenningError::empty_input_for(
                "text contains no sentences",
                "avg_sentence_length",
            ));
        }

        let mut word_count = 0usize;
        for sentence in &sentences {
            let flat = sentence.replace('\n', " ");
            word_count += flat
                .split_whitespace()
                .map(|word| normalize_token(word, &self.text.edge_punctuation))
                .filter(|word| !is_blank(word))
                .count();
        }

        Ok(word_count as f64 / sentences.len() as f64)
    }

    /// Average number of phrases per sentence.
    ///
    /// Each sentence is further split on the configured phrase separators;
    /// phrases are normalized and blank ones discarded before counting.
    pub fn avg_sentence_complexity<S: AsRef<str>>(&self, lines: &[S]) -> Result<f64> {
        let text = concat_lines(lines);
        let sentences = split_on_separators(&text, &self.text.sentence_terminators);
        if sentences.is_empty() {
            return Err(KenningError::empty_input_for(
                "text contains no sentences",
                "avg_sentence_complexity",
            ));
        }

        let mut phrase_count = 0usize;
        for sentence in &sentences {
            phrase_count += split_on_separators(sentence, &self.text.phrase_separators)
                .into_iter()
                .map(|phrase| normalize_token(phrase, &self.text.edge_punctuation))
                .filter(|phrase| !is_blank(phrase))
                .count();
        }

        Ok(phrase_count as f64 / sentences.len() as f64)
    }

    /// Tokenize once and gather the statistics shared by the three
    /// token-based features.
    fn token_census<S: AsRef<str>>(&self, lines: &[S], feature: &str) -> Result<TokenCensus> {
        let token_lines = tokenize_lines(lines, &self.text.edge_punctuation);

        let mut total_tokens = 0usize;
        let mut total_chars = 0usize;
        let mut multiplicities: AHashMap<&str, usize> = AHashMap::new();

        for tokens in &token_lines {
            total_tokens += tokens.len();
            for token in tokens {
                total_chars += token.chars().count();
                *multiplicities.entry(token.as_str()).or_insert(0) += 1;
            }
        }

        if total_tokens == 0 {
            return Err(KenningError::empty_input_for(
                "text contains no words",
                feature,
            ));
        }

        let distinct_tokens = multiplicities.len();
        let hapax_tokens = multiplicities.values().filter(|&&n| n == 1).count();

        Ok(TokenCensus {
            total_tokens,
            total_chars,
            distinct_tokens,
            hapax_tokens,
        })
    }
}

/// Compute a signature using the default segmentation rules.
///
/// Convenience wrapper over [`SignatureExtractor`] for callers that do not
/// customize the punctuation or separator sets.
pub fn extract_signature<S: AsRef<str>>(lines: &[S], author: &str) -> Result<Signature> {
    SignatureExtractor::default().extract(lines, author)
}

fn concat_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines.iter().map(AsRef::as_ref).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn walrus_text() -> Vec<&'static str> {
        vec![
            "The time has come, the Walrus said\n",
            "To talk of many things: of shoes - and ships - and sealing wax,\n",
            "Of cabbages; and kings.\n",
            "And why the sea is boiling hot;\n",
            "and whether pigs have wings.\n",
        ]
    }

    fn emma_text() -> Vec<&'static str> {
        vec![
            "Emma Woodhouse, handsome, clever, and rich, with a comfortable home\n",
            "and happy disposition, seemed to unite some of the best blessings of\n",
            "existence? and had lived nearly twenty-one years in the world with very!\n",
            "little to distress or vex her.\n",
        ]
    }

    #[test]
    fn test_avg_word_length() {
        let extractor = SignatureExtractor::default();
        let lines = ["James Fennimore Cooper\n", "Peter, Paul and Mary\n"];
        let value = extractor.avg_word_length(&lines).unwrap();
        assert_abs_diff_eq!(value, 5.142857142857143, epsilon = 1e-9);
    }

    #[test]
    fn test_avg_word_length_longer_text() {
        let extractor = SignatureExtractor::default();
        let lines = [
            "The first linguistic feature is simply the average number\n",
            "of characters per word,\n",
            "calculated after the punctuation has been stripped\n",
            "using the already-written clean_up function.\n",
        ];
        let value = extractor.avg_word_length(&lines).unwrap();
        assert_abs_diff_eq!(value, 6.04, epsilon = 1e-9);
    }

    #[test]
    fn test_type_token_ratio() {
        let extractor = SignatureExtractor::default();
        let lines = [
            "James Fennimore Cooper\n",
            "Peter, Paul, and Mary\n",
            "James Gosling\n",
        ];
        let value = extractor.type_token_ratio(&lines).unwrap();
        assert_abs_diff_eq!(value, 0.8888888888888888, epsilon = 1e-9);
    }

    #[test]
    fn test_type_token_ratio_case_folds() {
        let extractor = SignatureExtractor::default();
        let lines = ["this is great\n", "This was awesome\n", "and, what about IS\n"];
        let value = extractor.type_token_ratio(&lines).unwrap();
        assert_abs_diff_eq!(value, 0.8, epsilon = 1e-9);
    }

    #[test]
    fn test_hapax_legomena_ratio() {
        let extractor = SignatureExtractor::default();
        let lines = [
            "James Fennimore Cooper\n",
            "Peter, Paul, and Mary\n",
            "James Gosling\n",
        ];
        let value = extractor.hapax_legomena_ratio(&lines).unwrap();
        assert_abs_diff_eq!(value, 0.7777777777777778, epsilon = 1e-9);
    }

    #[test]
    fn test_hapax_counts_multiplicity_across_lines() {
        let extractor = SignatureExtractor::default();
        let lines = ["this is great\n", "This was awesome\n", "and, what about IS\n"];
        let value = extractor.hapax_legomena_ratio(&lines).unwrap();
        assert_abs_diff_eq!(value, 0.6, epsilon = 1e-9);
    }

    #[test]
    fn test_avg_sentence_length() {
        let extractor = SignatureExtractor::default();
        let value = extractor.avg_sentence_length(&walrus_text()).unwrap();
        assert_abs_diff_eq!(value, 17.5, epsilon = 1e-9);
    }

    #[test]
    fn test_avg_sentence_length_terminators_mid_line() {
        let extractor = SignatureExtractor::default();
        let value = extractor.avg_sentence_length(&emma_text()).unwrap();
        assert_abs_diff_eq!(value, 13.333333333333334, epsilon = 1e-9);
    }

    #[test]
    fn test_avg_sentence_complexity() {
        let extractor = SignatureExtractor::default();
        let value = extractor.avg_sentence_complexity(&walrus_text()).unwrap();
        assert_abs_diff_eq!(value, 3.5, epsilon = 1e-9);
    }

    #[test]
    fn test_avg_sentence_complexity_emma() {
        let extractor = SignatureExtractor::default();
        let value = extractor.avg_sentence_complexity(&emma_text()).unwrap();
        assert_abs_diff_eq!(value, 2.6666666666666665, epsilon = 1e-9);
    }

    #[test]
    fn test_extract_signature_feature_order() {
        let signature = extract_signature(&walrus_text(), "lewis carroll").unwrap();
        assert_eq!(signature.author, "lewis carroll");
        assert_abs_diff_eq!(signature.avg_sentence_length(), 17.5, epsilon = 1e-9);
        assert_abs_diff_eq!(signature.avg_sentence_complexity(), 3.5, epsilon = 1e-9);
        assert_eq!(signature.features[3], signature.avg_sentence_length());
    }

    #[test]
    fn test_empty_text_is_rejected() {
        let extractor = SignatureExtractor::default();
        let lines: [&str; 1] = ["\n"];

        let err = extractor.avg_word_length(&lines).unwrap_err();
        assert!(matches!(err, KenningError::EmptyInput { .. }));

        let err = extractor.extract(&lines, "nobody").unwrap_err();
        assert!(matches!(err, KenningError::EmptyInput { .. }));
    }

    #[test]
    fn test_punctuation_only_text_is_rejected() {
        let extractor = SignatureExtractor::default();
        let lines = ["!!! ??? ...\n"];
        let err = extractor.type_token_ratio(&lines).unwrap_err();

        if let KenningError::EmptyInput { feature, .. } = err {
            assert_eq!(feature, Some("type_token_ratio".to_string()));
        } else {
            panic!("Expected EmptyInput error");
        }
    }

    proptest! {
        #[test]
        fn prop_hapax_never_exceeds_ttr(
            words in proptest::collection::vec("[a-z]{1,5}", 1..40),
        ) {
            let line = format!("{}\n", words.join(" "));
            let lines = [line];
            let extractor = SignatureExtractor::default();

            let ttr = extractor.type_token_ratio(&lines).unwrap();
            let hapax = extractor.hapax_legomena_ratio(&lines).unwrap();

            prop_assert!(hapax <= ttr);
            prop_assert!(ttr <= 1.0);
        }
    }
}
