//! Configuration types and management for kenning-rs.
//!
//! Segmentation rules and comparison weights are named configuration rather
//! than literals buried in the pipeline, so they can be swapped and tested in
//! isolation. The defaults reproduce the classical stylometry rules: edge
//! punctuation stripping, `!?.` sentence terminators, `,;:` phrase separators,
//! and the published five-feature weight set.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::errors::{KenningError, Result};
use crate::core::featureset::FEATURE_COUNT;

/// Punctuation characters stripped from both ends of a token.
///
/// Internal occurrences (apostrophes, hyphens) are never touched.
pub const DEFAULT_EDGE_PUNCTUATION: &str = "!\"',;:.-?)([]<>*#\n\t\r";

/// Characters that terminate a sentence.
pub const DEFAULT_SENTENCE_TERMINATORS: &str = "!?.";

/// Characters that separate phrases within a sentence.
pub const DEFAULT_PHRASE_SEPARATORS: &str = ",;:";

/// Main configuration for the kenning engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KenningConfig {
    /// Tokenization and segmentation rules
    #[serde(default)]
    pub text: TextConfig,

    /// Comparison weights for the five features
    #[serde(default)]
    pub weights: WeightsConfig,
}

impl KenningConfig {
    /// Load a configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            KenningError::io(format!("failed to read config '{}'", path.display()), e)
        })?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize this configuration to a YAML string.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        self.text.validate()?;
        self.weights.validate()?;
        Ok(())
    }
}

/// Tokenization and segmentation rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextConfig {
    /// Characters stripped from both ends of a token
    pub edge_punctuation: String,

    /// Single-character sentence terminators
    pub sentence_terminators: String,

    /// Single-character phrase separators
    pub phrase_separators: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            edge_punctuation: DEFAULT_EDGE_PUNCTUATION.to_string(),
            sentence_terminators: DEFAULT_SENTENCE_TERMINATORS.to_string(),
            phrase_separators: DEFAULT_PHRASE_SEPARATORS.to_string(),
        }
    }
}

impl TextConfig {
    /// Validate the segmentation rules.
    ///
    /// An empty terminator or separator set would make every text a single
    /// sentence or phrase, which is almost certainly a configuration mistake.
    pub fn validate(&self) -> Result<()> {
        if self.sentence_terminators.is_empty() {
            return Err(KenningError::config_field(
                "must contain at least one character",
                "text.sentence_terminators",
            ));
        }
        if self.phrase_separators.is_empty() {
            return Err(KenningError::config_field(
                "must contain at least one character",
                "text.phrase_separators",
            ));
        }
        Ok(())
    }
}

/// Multiplicative weights applied to feature differences during comparison.
///
/// The weights are presumed pre-tuned to equalize feature scales; no
/// normalization is applied at comparison time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightsConfig {
    /// Weight for average word length
    pub word_length: f64,

    /// Weight for type-token ratio
    pub type_token_ratio: f64,

    /// Weight for hapax legomena ratio
    pub hapax_legomena_ratio: f64,

    /// Weight for average sentence length
    pub sentence_length: f64,

    /// Weight for average sentence complexity
    pub sentence_complexity: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            word_length: 11.0,
            type_token_ratio: 33.0,
            hapax_legomena_ratio: 50.0,
            sentence_length: 0.4,
            sentence_complexity: 4.0,
        }
    }
}

impl WeightsConfig {
    /// Produce the legacy 6-slot weight vector expected by the comparator.
    ///
    /// Slot 0 aligns with the author label and is never read.
    pub fn to_weight_vector(&self) -> [f64; FEATURE_COUNT + 1] {
        [
            0.0,
            self.word_length,
            self.type_token_ratio,
            self.hapax_legomena_ratio,
            self.sentence_length,
            self.sentence_complexity,
        ]
    }

    /// Validate that every weight is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("weights.word_length", self.word_length),
            ("weights.type_token_ratio", self.type_token_ratio),
            ("weights.hapax_legomena_ratio", self.hapax_legomena_ratio),
            ("weights.sentence_length", self.sentence_length),
            ("weights.sentence_complexity", self.sentence_complexity),
        ];
        for (field, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(KenningError::config_field(
                    format!("weight must be finite and non-negative, got {value}"),
                    field,
                ));
            }
        }
        Ok(())
    }
}
