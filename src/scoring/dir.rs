// ============================================================
// Layer 5 — Directional Expectation Test (DIR) Scorer
// ============================================================
// Here the perturbation is expected to *change* the label of
// the marked span. Each sentence is mapped by token text:
//
//   token → (gold label, system label)     last write wins
//
// The pair fails when a token present in both sentences keeps
// the same system label: the expected change did not happen.
// Walking and short-circuiting mirror the INV scorer.
//
// Pairs that share no token text pass vacuously.

use std::collections::HashMap;
use std::io::BufRead;

use crate::data::reader::{KeyedSentences, RecordReader};
use crate::domain::error::Result;
use crate::domain::record::TokenRecord;
use crate::domain::test_kind::TestKind;
use crate::domain::traits::Scorer;
use crate::domain::verdict::{EvaluationResult, Verdict};
use crate::scoring::aggregate::aggregate;
use crate::scoring::pairing::{consecutive_pairs, SentencePair};

/// token text → (gold, system), last write wins.
fn token_to_labels(tokens: &[TokenRecord]) -> HashMap<&str, (&str, &str)> {
    tokens
        .iter()
        .map(|t| {
            (
                t.token.as_str(),
                (t.gold_label.as_str(), t.system_label.as_str()),
            )
        })
        .collect()
}

/// True when every shared token received a different system label.
pub fn pair_passes(pair: &SentencePair<'_>) -> bool {
    let first  = token_to_labels(pair.first);
    let second = token_to_labels(pair.second);

    let unchanged = pair.first.iter().find(|t| {
        let token = t.token.as_str();
        match (first.get(token), second.get(token)) {
            (Some((_, a)), Some((_, b))) => a == b,
            _ => false,
        }
    });

    if let Some(token) = unchanged {
        tracing::debug!(
            "DIR pair {}-{} kept label for token '{}'",
            pair.first_id,
            pair.second_id,
            token.token
        );
    }
    unchanged.is_none()
}

pub fn score_sentences(sentences: &KeyedSentences) -> Vec<Verdict> {
    consecutive_pairs(sentences)
        .iter()
        .map(|pair| Verdict::for_pair(pair.first_id, pair.second_id, pair_passes(pair)))
        .collect()
}

/// DIR implementation of the Scorer trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirScorer;

impl Scorer for DirScorer {
    fn kind(&self) -> TestKind {
        TestKind::Dir
    }

    fn score(&self, input: &mut dyn BufRead) -> Result<EvaluationResult> {
        let sentences = RecordReader::new(input).read_keyed()?;
        Ok(aggregate(self.kind(), score_sentences(&sentences)))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Cursor;

    const TOKENS_A: [&str; 3] = ["dog", "ran", "home"];
    const TOKENS_B: [&str; 3] = ["cat", "sat", "mat"];
    const LABELS: [&str; 4] = ["ARG0", "ARG1", "ARGM-LOC", "O"];

    fn score(text: &str) -> EvaluationResult {
        DirScorer.score(&mut Cursor::new(text)).unwrap()
    }

    fn sentence(id: i64, rows: &[(&str, &str, &str)]) -> String {
        let mut text = String::new();
        for (i, (token, gold, system)) in rows.iter().enumerate() {
            text.push_str(&format!("{id}\t{}\t{token}\t{gold}\t{system}\n", i + 1));
        }
        text.push('\n');
        text
    }

    fn shuffled_file(rows: &[(i64, usize, usize)], golds: &[&str], systems: &[&str]) -> String {
        rows.iter()
            .enumerate()
            .map(|(i, &(id, g, s))| format!("{id}\t{}\tw{g}\t{}\t{}\n", i + 1, golds[g], systems[s]))
            .collect()
    }

    #[test]
    fn test_unchanged_label_fails_pair() {
        let r = score("0\t1\tran\tARG1\tARG1\n\n1\t1\tran\tARG2\tARG1\n\n");
        assert_eq!(r.failed_ids, vec!["0-1"]);
        assert_eq!(r.failure_rate, Some(100));
    }

    #[test]
    fn test_changed_label_passes_pair() {
        let r = score("0\t1\tran\tARG1\tARG1\n\n1\t1\tran\tARG2\tARG2\n\n");
        assert!(r.failed_ids.is_empty());
        assert_eq!(r.failure_rate, Some(0));
    }

    #[test]
    fn test_no_shared_tokens_passes() {
        let r = score("0\t1\tdog\tARG0\tARG0\n\n1\t1\tcat\tARG0\tARG0\n\n");
        assert!(r.failed_ids.is_empty());
    }

    #[test]
    fn test_gold_labels_do_not_matter() {
        // same gold on both sides, system label changed: still a pass
        let r = score("0\t1\tit\tARG0\tARG0\n\n1\t1\tit\tARG0\tARG1\n\n");
        assert!(r.failed_ids.is_empty());
    }

    #[test]
    fn test_duplicate_token_last_write_wins() {
        // sentence 0 maps "it" to ARG0 (last row); sentence 1 has ARG1 → changed
        let r = score(
            "0\t1\tit\tARG1\tARG1\n0\t4\tit\tARG0\tARG0\n\n\
             1\t1\tit\tARG0\tARG1\n\n",
        );
        assert!(r.failed_ids.is_empty());
    }

    #[test]
    fn test_blank_gold_tokens_are_not_compared() {
        let r = score(
            "0\t1\tthe\t_\tO\n0\t2\tran\tARG1\tARG1\n\n\
             1\t1\tthe\t_\tO\n1\t2\tran\tARG1\tARG2\n\n",
        );
        assert!(r.failed_ids.is_empty());
    }

    #[test]
    fn test_rate_over_several_pairs() {
        let r = score(
            "0\t1\ta\tX\tA\n\n1\t1\ta\tY\tA\n\n\
             2\t1\ta\tX\tA\n\n3\t1\ta\tY\tB\n\n\
             4\t1\ta\tX\tA\n\n5\t1\ta\tY\tB\n\n",
        );
        assert_eq!(r.total, 3);
        assert_eq!(r.failure_rate, Some(33));
        assert_eq!(r.failed_ids, vec!["0-1"]);
    }

    proptest! {
        #[test]
        fn test_disjoint_tokens_always_pass(
            first  in prop::collection::vec((0usize..3, 0usize..4, 0usize..4), 1..8),
            second in prop::collection::vec((0usize..3, 0usize..4, 0usize..4), 1..8),
        ) {
            let a: Vec<_> = first
                .iter()
                .map(|&(t, g, s)| (TOKENS_A[t], LABELS[g], LABELS[s]))
                .collect();
            let b: Vec<_> = second
                .iter()
                .map(|&(t, g, s)| (TOKENS_B[t], LABELS[g], LABELS[s]))
                .collect();
            let r = score(&(sentence(0, &a) + &sentence(1, &b)));
            prop_assert_eq!(r.total, 1);
            prop_assert!(r.failed_ids.is_empty());
        }

        #[test]
        fn test_scoring_twice_gives_same_result(
            rows in prop::collection::vec((0i64..6, 0usize..4, 0usize..4), 0..32),
        ) {
            let text = shuffled_file(&rows, &LABELS, &LABELS);
            prop_assert_eq!(score(&text), score(&text));
        }
    }
}
