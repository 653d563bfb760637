//! Main attribution engine implementation.

use std::path::Path;

use tracing::info;

use crate::api::results::AttributionResults;
use crate::core::config::KenningConfig;
use crate::core::errors::{KenningError, Result};
use crate::core::featureset::{Signature, SignatureExtractor};
use crate::core::scoring::rank_candidates;
use crate::io::corpus;

/// Main kenning attribution engine.
///
/// Holds a validated configuration and drives signature extraction and
/// candidate ranking. The engine is stateless between calls; signatures are
/// recomputed per invocation.
pub struct KenningEngine {
    /// Engine configuration
    config: KenningConfig,

    /// Extractor built from the configured segmentation rules
    extractor: SignatureExtractor,
}

impl KenningEngine {
    /// Create a new engine with the given configuration.
    pub fn new(config: KenningConfig) -> Result<Self> {
        config.validate()?;
        info!("initializing kenning engine");

        let extractor = SignatureExtractor::new(config.text.clone());
        Ok(Self { config, extractor })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &KenningConfig {
        &self.config
    }

    /// Compute a signature from line-oriented text.
    ///
    /// Each line should retain its terminating line break; see
    /// [`crate::io::corpus::read_corpus`].
    pub fn signature_from_lines<S: AsRef<str>>(
        &self,
        lines: &[S],
        author: &str,
    ) -> Result<Signature> {
        self.extractor.extract(lines, author)
    }

    /// Compute a signature from a text file, labeled with the file stem.
    pub fn signature_from_file(&self, path: impl AsRef<Path>) -> Result<Signature> {
        let path = path.as_ref();
        let author = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("unknown")
            .to_string();

        let lines = corpus::read_corpus(path)?;
        info!("extracting signature for '{}' from {}", author, path.display());
        self.extractor.extract(&lines, &author)
    }

    /// Rank candidate signatures against an unknown one.
    pub fn attribute(
        &self,
        unknown: Signature,
        candidates: &[Signature],
    ) -> Result<AttributionResults> {
        let weights = self.config.weights.to_weight_vector();
        let matches = rank_candidates(&unknown, candidates, &weights)?;
        Ok(AttributionResults { unknown, matches })
    }

    /// Attribute an unknown text file against a directory of known
    /// signature JSON files.
    pub fn attribute_file(
        &self,
        unknown_path: impl AsRef<Path>,
        signature_dir: impl AsRef<Path>,
    ) -> Result<AttributionResults> {
        let unknown_path = unknown_path.as_ref();
        let signature_dir = signature_dir.as_ref();

        let unknown = self.signature_from_file(unknown_path)?;
        let candidates = corpus::discover_signatures(signature_dir)?;
        if candidates.is_empty() {
            return Err(KenningError::invalid_argument(format!(
                "no candidate signatures found in '{}'",
                signature_dir.display()
            )));
        }

        info!(
            "attributing {} against {} candidates",
            unknown_path.display(),
            candidates.len()
        );
        self.attribute(unknown, &candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> KenningEngine {
        KenningEngine::new(KenningConfig::default()).unwrap()
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let mut config = KenningConfig::default();
        config.text.phrase_separators.clear();
        assert!(KenningEngine::new(config).is_err());
    }

    #[test]
    fn test_signature_from_lines() {
        let lines = ["The time has come, the Walrus said.\n"];
        let signature = engine().signature_from_lines(&lines, "carroll").unwrap();
        assert_eq!(signature.author, "carroll");
        assert!(signature.avg_word_length() > 0.0);
    }

    #[test]
    fn test_attribute_prefers_identical_signature() {
        let engine = engine();
        let lines = [
            "The time has come, the Walrus said\n",
            "To talk of many things: of shoes - and ships - and sealing wax,\n",
            "Of cabbages; and kings.\n",
        ];
        let unknown = engine.signature_from_lines(&lines, "unknown").unwrap();

        let mut twin = unknown.clone();
        twin.author = "carroll".to_string();
        let other = Signature::new("austen", [4.5, 0.9, 0.9, 13.3, 2.7]);

        let results = engine.attribute(unknown, &[other, twin]).unwrap();
        assert_eq!(results.best_match().unwrap().author, "carroll");
        assert_eq!(results.best_match().unwrap().score, 0.0);
    }

    #[test]
    fn test_attribute_empty_candidates_ok_at_this_layer() {
        let engine = engine();
        let unknown = Signature::new("unknown", [1.0, 1.0, 1.0, 1.0, 1.0]);
        let results = engine.attribute(unknown, &[]).unwrap();
        assert!(results.best_match().is_none());
    }
}
