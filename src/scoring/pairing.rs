// ============================================================
// Layer 5 — Sentence Pairing
// ============================================================
// INV and DIR files hold an original sentence followed by its
// perturbed variant. After sorting by numeric id, sentences
// are paired (0,1), (2,3), ... stepping by two.
//
// An odd number of sentences leaves the last one without a
// partner. It is dropped from pairing and a warning is logged;
// the rest of the file is still scored.

use crate::data::reader::KeyedSentences;
use crate::domain::record::TokenRecord;

/// One original/perturbed test case.
#[derive(Debug, Clone, Copy)]
pub struct SentencePair<'a> {
    pub first_id:  i64,
    pub first:     &'a [TokenRecord],
    pub second_id: i64,
    pub second:    &'a [TokenRecord],
}

/// Pair consecutive sentences in ascending id order.
pub fn consecutive_pairs(sentences: &KeyedSentences) -> Vec<SentencePair<'_>> {
    let ordered: Vec<(i64, &[TokenRecord])> = sentences.iter().collect();

    if ordered.len() % 2 != 0 {
        if let Some((id, _)) = ordered.last() {
            tracing::warn!(
                "Uneven number of sentences ({}); sentence {} is left unpaired",
                ordered.len(),
                id
            );
        }
    }

    ordered
        .chunks_exact(2)
        .map(|chunk| SentencePair {
            first_id:  chunk[0].0,
            first:     chunk[0].1,
            second_id: chunk[1].0,
            second:    chunk[1].1,
        })
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn keyed(ids: &[i64]) -> KeyedSentences {
        ids.iter()
            .map(|id| TokenRecord::new(id.to_string(), 1, "w", "ARG0", "ARG0"))
            .collect()
    }

    #[test]
    fn test_pairs_follow_sorted_ids() {
        let sentences = keyed(&[11, 3, 10, 2]);
        let pairs = consecutive_pairs(&sentences);
        let ids: Vec<(i64, i64)> = pairs.iter().map(|p| (p.first_id, p.second_id)).collect();
        assert_eq!(ids, vec![(2, 3), (10, 11)]);
    }

    #[test]
    fn test_odd_count_drops_trailing_sentence() {
        let sentences = keyed(&[0, 1, 2]);
        let pairs = consecutive_pairs(&sentences);
        assert_eq!(pairs.len(), 1);
        assert_eq!((pairs[0].first_id, pairs[0].second_id), (0, 1));
    }

    #[test]
    fn test_no_sentences_no_pairs() {
        assert!(consecutive_pairs(&KeyedSentences::default()).is_empty());
        assert!(consecutive_pairs(&keyed(&[4])).is_empty());
    }
}
