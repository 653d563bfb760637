//! # Kenning-RS: Stylometric Authorship Attribution Engine
//!
//! A Rust implementation of separator-driven stylometry. This library computes
//! a linguistic signature for a body of text — five scalar features describing
//! an author's style — and compares signatures with a weighted distance metric
//! to attribute authorship by similarity:
//!
//! - **Average word length**: characters per word after edge punctuation is stripped
//! - **Type-token ratio**: lexical diversity (distinct words / total words)
//! - **Hapax legomena ratio**: words occurring exactly once / total words
//! - **Average sentence length**: words per sentence, delimited by `!?.`
//! - **Average sentence complexity**: phrases per sentence, delimited by `,;:`
//!
//! Segmentation is separator-driven rather than grammar-aware, which keeps the
//! feature space deterministic and independent of any natural-language library.
//!
//! ## Architecture
//!
//! ```text
//! raw text ──▶ tokenizer / splitter ──▶ feature extractor ──▶ Signature
//!                                                                │
//!                                 weighted comparison ◀──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use kenning_rs::{compare_signatures, extract_signature};
//!
//! # fn main() -> kenning_rs::Result<()> {
//! let lines = ["The time has come, the Walrus said.\n".to_string()];
//! let signature = extract_signature(&lines, "walrus")?;
//! let weights = [0.0, 11.0, 33.0, 50.0, 0.4, 4.0];
//! let distance = compare_signatures(&signature, &signature, &weights)?;
//! assert_eq!(distance, 0.0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Core analysis modules
pub mod core {
    //! Core tokenization, feature extraction, and scoring.

    pub mod config;
    pub mod errors;
    pub mod featureset;
    pub mod scoring;
    pub mod text;
}

// I/O and persistence
pub mod io {
    //! Corpus loading and signature persistence.

    pub mod corpus;
}

// Public API and engine interface
pub mod api {
    //! High-level API and engine interface.

    pub mod engine;
    pub mod results;
}

// Re-export primary types for convenience
pub use api::engine::KenningEngine;
pub use api::results::AttributionResults;
pub use core::config::{KenningConfig, TextConfig, WeightsConfig};
pub use core::errors::{KenningError, Result};
pub use core::featureset::{extract_signature, Signature, SignatureExtractor, FEATURE_COUNT};
pub use core::scoring::{compare_signatures, rank_candidates, ScoredCandidate};
pub use core::text::{normalize_token, split_on_separators, tokenize_lines};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
