//! Report envelope for presenting a breakdown

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use chrono::{DateTime, Utc};
use crate::types::{Answer, EmissionsBreakdown};

/// A breakdown plus the time it was produced and a fingerprint of its input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateReport {
    pub generated_at: DateTime<Utc>,
    /// SHA-256 hex of the answer's JSON form
    pub answers_digest: String,
    pub answer: Answer,
    pub breakdown: EmissionsBreakdown,
}

impl EstimateReport {
    pub fn new(answer: Answer, breakdown: EmissionsBreakdown) -> Self {
        Self {
            generated_at: Utc::now(),
            answers_digest: answers_digest(&answer),
            answer,
            breakdown,
        }
    }
}

/// Fingerprint identifying an answer set
pub fn answers_digest(answer: &Answer) -> String {
    let json = serde_json::to_vec(answer).unwrap_or_default();
    let hash: [u8; 32] = Sha256::digest(&json).into();
    hash.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CarType;

    #[test]
    fn test_digest_is_stable() {
        let answer = Answer::default();
        assert_eq!(answers_digest(&answer), answers_digest(&answer.clone()));
        assert_eq!(answers_digest(&answer).len(), 64);
    }

    #[test]
    fn test_digest_changes_with_answer() {
        let a = Answer::default();
        let b = Answer { car_type: CarType::Hybrid, ..Answer::default() };
        assert_ne!(answers_digest(&a), answers_digest(&b));
    }
}
