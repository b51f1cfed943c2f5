// ============================================================
// Layer 5 — Scoring
// ============================================================
// The three behavioral test scorers and the pieces they share.
//
//   mft.rs       — per-sentence check, streamed in one pass
//   inv.rs       — sentence pairs, labels must stay the same
//   dir.rs       — sentence pairs, labels must change
//   pairing.rs   — (0,1), (2,3), ... over sorted sentence ids
//   aggregate.rs — verdicts → failure rate + failing ids
//
// All scorers implement domain::traits::Scorer. `scorer_for`
// is the only place that maps a TestKind to an implementation.

pub mod aggregate;
pub mod dir;
pub mod inv;
pub mod mft;
pub mod pairing;

use crate::domain::test_kind::TestKind;
use crate::domain::traits::Scorer;

/// The scorer responsible for a test category.
pub fn scorer_for(kind: TestKind) -> Box<dyn Scorer> {
    match kind {
        TestKind::Mft => Box::new(mft::MftScorer),
        TestKind::Inv => Box::new(inv::InvScorer),
        TestKind::Dir => Box::new(dir::DirScorer),
    }
}
