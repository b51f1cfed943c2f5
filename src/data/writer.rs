// ============================================================
// Layer 4 — Prediction Writer
// ============================================================
// Writes the 5-column evaluation format read back by
// data::reader:
//
//   sentence_id  token_id  token  gold_label  system_label
//
// Input sentences may carry model-only context that must not
// reach the evaluation files:
//   - everything from the first [SEP] token on is dropped
//   - a "[PRED] " marker in front of the predicate is removed
//
// Sentence ids are assigned here, counting from 1 in the
// order sentences are written.

use std::io::{self, Write};

use crate::data::conllu::GoldSentence;
use crate::domain::record::BLANK_LABEL;

/// Separator between the sentence and appended predicate context.
pub const SEP_TOKEN: &str = "[SEP]";

/// Marker some input variants put in front of the predicate.
pub const PRED_MARKER: &str = "[PRED] ";

/// Name of the prediction file for a gold input file name.
///
/// `voice_INV_M1.conllu` → `voice_INV_M1_predictions.tsv`
pub fn prediction_file_name(input_name: &str) -> String {
    match input_name.strip_suffix(".conllu") {
        Some(stem) => format!("{stem}_predictions.tsv"),
        None => format!("{input_name}_predictions.tsv"),
    }
}

/// Write one sentence followed by a blank line.
///
/// `system` holds one entry per token; a missing label is written as `_`.
pub fn write_sentence<W: Write>(
    out:         &mut W,
    sentence_id: usize,
    sentence:    &GoldSentence,
    system:      &[Option<String>],
) -> io::Result<()> {
    let rows = sentence.tokens.iter().zip(&sentence.gold).zip(system);

    for (i, ((token, gold), system_label)) in rows.enumerate() {
        if token == SEP_TOKEN {
            break;
        }
        let token = token.replace(PRED_MARKER, "");
        let system_label = system_label.as_deref().unwrap_or(BLANK_LABEL);

        writeln!(out, "{}\t{}\t{}\t{}\t{}", sentence_id, i + 1, token, gold, system_label)?;
    }

    writeln!(out)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(tokens: &[&str], gold: &[&str]) -> GoldSentence {
        GoldSentence {
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
            gold:   gold.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn labels(labels: &[&str]) -> Vec<Option<String>> {
        labels.iter().map(|s| Some(s.to_string())).collect()
    }

    #[test]
    fn test_writes_five_columns_and_blank_line() {
        let mut out = Vec::new();
        let s = sentence(&["dog", "ran"], &["ARG0", "_"]);
        write_sentence(&mut out, 3, &s, &labels(&["ARG0", "O"])).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "3\t1\tdog\tARG0\tARG0\n3\t2\tran\t_\tO\n\n");
    }

    #[test]
    fn test_stops_at_sep_token() {
        let mut out = Vec::new();
        let s = sentence(&["dog", "ran", "[SEP]", "ran"], &["ARG0", "_", "_", "_"]);
        write_sentence(&mut out, 1, &s, &labels(&["ARG0", "O", "O", "V"])).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().filter(|l| !l.is_empty()).count(), 2);
        assert!(!text.contains("[SEP]"));
    }

    #[test]
    fn test_strips_predicate_marker_and_fills_missing_labels() {
        let mut out = Vec::new();
        let s = sentence(&["[PRED] ran"], &["_"]);
        write_sentence(&mut out, 1, &s, &[None]).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "1\t1\tran\t_\t_\n\n");
    }

    #[test]
    fn test_prediction_file_name() {
        assert_eq!(prediction_file_name("neg_MFT_M1.conllu"), "neg_MFT_M1_predictions.tsv");
        assert_eq!(prediction_file_name("raw"), "raw_predictions.tsv");
    }
}
