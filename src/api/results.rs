//! Attribution results for public API consumption.

use serde::{Deserialize, Serialize};

use crate::core::featureset::Signature;
use crate::core::scoring::ScoredCandidate;

/// Outcome of attributing an unknown text against candidate signatures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributionResults {
    /// Signature computed for the unknown text
    pub unknown: Signature,

    /// Candidates ranked by ascending distance (best match first)
    pub matches: Vec<ScoredCandidate>,
}

impl AttributionResults {
    /// The closest candidate, if any were supplied.
    pub fn best_match(&self) -> Option<&ScoredCandidate> {
        self.matches.first()
    }

    /// Number of candidates scored.
    pub fn candidate_count(&self) -> usize {
        self.matches.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_match_is_first() {
        let results = AttributionResults {
            unknown: Signature::new("unknown", [1.0, 1.0, 1.0, 1.0, 1.0]),
            matches: vec![
                ScoredCandidate {
                    author: "close".to_string(),
                    score: 0.5,
                },
                ScoredCandidate {
                    author: "far".to_string(),
                    score: 9.0,
                },
            ],
        };

        assert_eq!(results.best_match().unwrap().author, "close");
        assert_eq!(results.candidate_count(), 2);
    }

    #[test]
    fn test_best_match_empty() {
        let results = AttributionResults {
            unknown: Signature::new("unknown", [1.0, 1.0, 1.0, 1.0, 1.0]),
            matches: Vec::new(),
        };

        assert!(results.best_match().is_none());
    }
}
