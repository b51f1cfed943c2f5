// ============================================================
// Layer 3 — Verdicts and Evaluation Results
// ============================================================
// A Verdict is the pass/fail decision for one scoring unit:
//   - a sentence for MFT          (identifier "7")
//   - a sentence pair for INV/DIR (identifier "10-11")
//
// Verdicts only live while a file is being scored. What
// survives is the EvaluationResult: how many units were
// scored, the truncated failure rate and the failing ids.

use serde::{Deserialize, Serialize};

use crate::domain::test_kind::TestKind;

/// Pass/fail decision for one sentence or sentence pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub identifier: String,
    pub passed:     bool,
}

impl Verdict {
    pub fn new(identifier: impl Into<String>, passed: bool) -> Self {
        Self {
            identifier: identifier.into(),
            passed,
        }
    }

    /// Verdict for a sentence pair, identified as "idA-idB".
    pub fn for_pair(first: i64, second: i64, passed: bool) -> Self {
        Self::new(format!("{first}-{second}"), passed)
    }
}

/// Outcome of scoring one file with one test category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub evaluation_type: TestKind,

    /// Number of sentences (MFT) or sentence pairs (INV/DIR) scored
    pub total: usize,

    /// floor(100 * failed / total); None when `total` is zero
    pub failure_rate: Option<u8>,

    /// Failing identifiers in the order they were scored
    pub failed_ids: Vec<String>,
}

impl EvaluationResult {
    /// True when the file contained nothing to score.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn failed_count(&self) -> usize {
        self.failed_ids.len()
    }
}
