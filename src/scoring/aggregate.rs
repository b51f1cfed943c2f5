// ============================================================
// Layer 5 — Aggregator
// ============================================================
// Folds a list of verdicts into an EvaluationResult.
//
// The failure rate is an integer percentage computed with
// integer arithmetic: floor(100 * failed / total). It is
// never rounded, so 1 failure out of 3 reports 33.
//
// A file with nothing to score (no sentences, or no pairs)
// has no meaningful rate; it reports `None` instead of
// dividing by zero.

use crate::domain::test_kind::TestKind;
use crate::domain::verdict::{EvaluationResult, Verdict};

/// Truncated failure percentage, or None when `total` is zero.
pub fn failure_rate(failed: usize, total: usize) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let failed = failed.min(total);
    // 0..=100, so the narrowing never truncates
    Some(((failed * 100) / total) as u8)
}

/// Build the result for one file from its verdicts, preserving order.
pub fn aggregate(kind: TestKind, verdicts: Vec<Verdict>) -> EvaluationResult {
    let total = verdicts.len();
    let failed_ids: Vec<String> = verdicts
        .into_iter()
        .filter(|v| !v.passed)
        .map(|v| v.identifier)
        .collect();

    let failure_rate = failure_rate(failed_ids.len(), total);
    if failure_rate.is_none() {
        tracing::warn!("No {} units to score; reporting no data", kind);
    }

    EvaluationResult {
        evaluation_type: kind,
        total,
        failure_rate,
        failed_ids,
    }
}
