//! Signature comparison and candidate ranking.
//!
//! Comparison is a fixed weighted distance, not a learned model: the
//! absolute difference of each feature pair is scaled by its weight and the
//! products are summed. The weights are presumed pre-tuned to equalize
//! feature scales, so no normalization happens here.

use std::cmp::Ordering;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::errors::{KenningError, Result};
use crate::core::featureset::{Signature, FEATURE_COUNT};

/// Expected length of a weight vector.
///
/// Weight vectors keep the legacy 6-slot layout: slot 0 aligns with the
/// author label and is never read; slots 1..=5 weight the five features.
pub const WEIGHT_VECTOR_LEN: usize = FEATURE_COUNT + 1;

/// Compute the weighted distance between two signatures.
///
/// The result is non-negative, zero iff every weighted feature difference
/// is zero, and symmetric in its first two arguments. The sum runs in
/// feature order. A weight vector whose length is not
/// [`WEIGHT_VECTOR_LEN`] is rejected with an invalid-argument error rather
/// than silently truncated.
///
/// ```
/// use kenning_rs::{compare_signatures, Signature};
///
/// let sig1 = Signature::new("a_string", [4.4, 0.1, 0.05, 10.0, 2.0]);
/// let sig2 = Signature::new("a_string2", [4.3, 0.1, 0.04, 16.0, 4.0]);
/// let weights = [0.0, 11.0, 33.0, 50.0, 0.4, 4.0];
///
/// let score = compare_signatures(&sig1, &sig2, &weights).unwrap();
/// assert!((score - 12.000000000000007).abs() < 1e-9);
/// ```
pub fn compare_signatures(sig1: &Signature, sig2: &Signature, weights: &[f64]) -> Result<f64> {
    if weights.len() != WEIGHT_VECTOR_LEN {
        return Err(KenningError::invalid_argument_with_shape(
            "weight vector length does not match the signature layout",
            WEIGHT_VECTOR_LEN.to_string(),
            weights.len().to_string(),
        ));
    }

    let mut score = 0.0;
    for i in 0..FEATURE_COUNT {
        score += (sig1.features[i] - sig2.features[i]).abs() * weights[i + 1];
    }

    Ok(score)
}

/// A candidate author scored against an unknown signature.
///
/// Lower scores indicate greater stylistic similarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// Candidate author label
    pub author: String,

    /// Weighted distance from the unknown signature
    pub score: f64,
}

/// Score every candidate against `unknown` and rank by ascending distance.
///
/// Candidates are scored in parallel; ties are broken by author label so
/// the ranking is deterministic.
pub fn rank_candidates(
    unknown: &Signature,
    candidates: &[Signature],
    weights: &[f64],
) -> Result<Vec<ScoredCandidate>> {
    let mut ranked: Vec<ScoredCandidate> = candidates
        .par_iter()
        .map(|candidate| {
            compare_signatures(unknown, candidate, weights).map(|score| ScoredCandidate {
                author: candidate.author.clone(),
                score,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    ranked.sort_by(|a, b| {
        a.score
            .partial_cmp(&b.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.author.cmp(&b.author))
    });

    Ok(ranked)
}
