// ============================================================
// Layer 5 — Invariance Test (INV) Scorer
// ============================================================
// Each pair is an original sentence A and a perturbation B
// that should not affect the labelled spans. B is turned into
// a map  gold label → system label  built from its evaluated
// tokens; when a gold label repeats inside B the last
// occurrence wins.
//
// A's tokens are walked in their original order, each row on
// its own. The pair fails at the first row whose gold label is
// in B's map with a different system label, so a repeated gold
// label in A is checked once per row.
//
// Pairs that share no gold label pass.

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

/// gold label → system label, last write wins.
fn gold_to_system(tokens: &[TokenRecord]) -> HashMap<&str, &str> {
    tokens
        .iter()
        .map(|t| (t.gold_label.as_str(), t.system_label.as_str()))
        .collect()
}

/// True when no row of A disagrees with B's label for the same gold label.
pub fn pair_passes(pair: &SentencePair<'_>) -> bool {
    let second = gold_to_system(pair.second);

    let changed = pair.first.iter().find(|t| {
        second
            .get(t.gold_label.as_str())
            .is_some_and(|&b| b != t.system_label)
    });

    if let Some(token) = changed {
        tracing::debug!(
            "INV pair {}-{} changed label for gold '{}'",
            pair.first_id,
            pair.second_id,
            token.gold_label
        );
    }
    changed.is_none()
}

/// Score every consecutive pair of an already-read file.
pub fn score_sentences(sentences: &KeyedSentences) -> Vec<Verdict> {
    consecutive_pairs(sentences)
        .iter()
        .map(|pair| Verdict::for_pair(pair.first_id, pair.second_id, pair_passes(pair)))
        .collect()
}

/// INV implementation of the Scorer trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvScorer;

impl Scorer for InvScorer {
    fn kind(&self) -> TestKind {
        TestKind::Inv
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

    const GOLD_A: [&str; 3] = ["ARG0", "ARG1", "ARG2"];
    const GOLD_B: [&str; 3] = ["ARGM-TMP", "ARGM-LOC", "R-ARG0"];
    const SYSTEM: [&str; 4] = ["ARG0", "ARG1", "ARGM-TMP", "O"];

    fn score(text: &str) -> EvaluationResult {
        InvScorer.score(&mut Cursor::new(text)).unwrap()
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
    fn test_changed_label_fails_pair() {
        let r = score("10\t1\tdog\tARG0\tARG0\n\n11\t1\tdog\tARG0\tARG1\n\n");
        assert_eq!(r.total, 1);
        assert_eq!(r.failure_rate, Some(100));
        assert_eq!(r.failed_ids, vec!["10-11"]);
    }

    #[test]
    fn test_stable_label_passes() {
        let r = score("0\t1\tdog\tARG0\tARG0\n\n1\t1\thound\tARG0\tARG0\n\n");
        assert_eq!(r.failure_rate, Some(0));
    }

    #[test]
    fn test_no_shared_gold_label_passes() {
        let r = score("0\t1\tdog\tARG0\tARG1\n\n1\t1\tbone\tARG1\tARG0\n\n");
        assert!(r.failed_ids.is_empty());
    }

    #[test]
    fn test_blank_gold_tokens_are_ignored() {
        // "ran" changes label but is not evaluated
        let r = score(
            "0\t1\tdog\tARG0\tARG0\n0\t2\tran\t_\tV\n\n\
             1\t1\tdog\tARG0\tARG0\n1\t2\tran\t_\tO\n\n",
        );
        assert!(r.failed_ids.is_empty());
    }

    #[test]
    fn test_repeated_gold_label_in_first_sentence_checks_every_row() {
        // Sentence 0 labels ARG1 first as ARG2 then as ARG1; the first row
        // already disagrees with sentence 1.
        let r = score(
            "0\t1\tthe\tARG1\tARG2\n0\t2\tball\tARG1\tARG1\n\n\
             1\t1\tball\tARG1\tARG1\n\n",
        );
        assert_eq!(r.failed_ids, vec!["0-1"]);
        assert_eq!(r.failure_rate, Some(100));
    }

    #[test]
    fn test_repeated_gold_label_in_second_sentence_last_write_wins() {
        // Sentence 1 maps ARG1 to ARG2 then to ARG1; only ARG1 is kept.
        let r = score(
            "0\t1\tball\tARG1\tARG1\n\n\
             1\t1\tthe\tARG1\tARG2\n1\t2\tball\tARG1\tARG1\n\n",
        );
        assert!(r.failed_ids.is_empty());
    }

    #[test]
    fn test_pairs_are_formed_by_sorted_ids() {
        let r = score(
            "3\t1\ta\tARG0\tARG0\n\n\
             1\t1\ta\tARG0\tARG0\n\n\
             2\t1\ta\tARG0\tARG1\n\n\
             0\t1\ta\tARG0\tARG0\n\n",
        );
        assert_eq!(r.total, 2);
        assert_eq!(r.failed_ids, vec!["2-3"]);
        assert_eq!(r.failure_rate, Some(50));
    }

    #[test]
    fn test_odd_sentence_count_drops_last() {
        let r = score(
            "0\t1\ta\tARG0\tARG0\n\n1\t1\ta\tARG0\tARG0\n\n2\t1\ta\tARG0\tARG1\n\n",
        );
        assert_eq!(r.total, 1);
        assert!(r.failed_ids.is_empty());
    }

    #[test]
    fn test_no_pairs_has_no_rate() {
        let r = score("0\t1\ta\tARG0\tARG0\n\n");
        assert_eq!(r.total, 0);
        assert_eq!(r.failure_rate, None);
    }

    proptest! {
        #[test]
        fn test_disjoint_gold_labels_always_pass(
            first  in prop::collection::vec((0usize..3, 0usize..4), 1..8),
            second in prop::collection::vec((0usize..3, 0usize..4), 1..8),
        ) {
            let a: Vec<_> = first.iter().map(|&(g, s)| ("dog", GOLD_A[g], SYSTEM[s])).collect();
            let b: Vec<_> = second.iter().map(|&(g, s)| ("dog", GOLD_B[g], SYSTEM[s])).collect();
            let r = score(&(sentence(0, &a) + &sentence(1, &b)));
            prop_assert_eq!(r.total, 1);
            prop_assert!(r.failed_ids.is_empty());
        }

        #[test]
        fn test_scoring_twice_gives_same_result(
            rows in prop::collection::vec((0i64..6, 0usize..3, 0usize..4), 0..32),
        ) {
            let text = shuffled_file(&rows, &GOLD_A, &SYSTEM);
            prop_assert_eq!(score(&text), score(&text));
        }
    }
}
