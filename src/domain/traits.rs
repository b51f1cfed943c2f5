// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Two seams matter in this system:
//
//   Scorer          — turns one file's rows into a result.
//                     MftScorer, InvScorer and DirScorer
//                     (Layer 5) implement it, and the batch
//                     driver only ever sees `dyn Scorer`.
//
//   TokenClassifier — the model under test. The network
//                     itself lives outside this crate; the
//                     labelling pipeline only needs sub-word
//                     offsets and predicted label indices.

use serde::{Deserialize, Serialize};
use std::io::BufRead;

use crate::domain::error::Result;
use crate::domain::test_kind::TestKind;
use crate::domain::verdict::EvaluationResult;

// ─── Scorer ───────────────────────────────────────────────────────────────────
/// Anything that can score a stream of evaluation rows.
pub trait Scorer {
    /// Which test category this scorer implements.
    fn kind(&self) -> TestKind;

    /// Read the whole input and produce the aggregated result.
    /// Scoring is a pure function of the input: calling this twice on
    /// the same content gives the same result.
    fn score(&self, input: &mut dyn BufRead) -> Result<EvaluationResult>;
}

// ─── TokenClassifier ──────────────────────────────────────────────────────────
/// Per-sub-word output of a token classification model for one sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtokenPredictions {
    /// Character span of each sub-word inside its word.
    /// `(0, 0)` marks special tokens such as [CLS] or padding.
    pub offsets: Vec<(usize, usize)>,

    /// Predicted label index for each sub-word (argmax over logits)
    pub label_ids: Vec<usize>,
}

/// A model that labels pre-split words at sub-word granularity.
pub trait TokenClassifier {
    fn classify(&self, words: &[String]) -> Result<SubtokenPredictions>;
}
