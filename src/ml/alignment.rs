// ============================================================
// Layer 5 — Sub-word → Word Label Alignment
// ============================================================
// The classifier sees sub-words, the evaluation format wants
// one label per word. Given the offset mapping returned with
// the predictions:
//
//   sub-word   [CLS]   ran   aw    ay    [SEP]
//   offset     (0,0)  (0,3) (0,2) (2,4)  (0,0)
//   label        -    ARG1  ARG2  ARG2     -
//
//   - (0,0) marks a special token and is skipped
//   - a sub-word starting at 0 opens a new word
//   - each word takes the most frequent label of its
//     sub-words; ties go to the label seen first
//
// Result for the example: ["ARG1", "ARG2"].

use std::collections::HashMap;

use crate::domain::error::EvalError;
use crate::domain::traits::SubtokenPredictions;
use crate::ml::label_set::LabelSet;

/// Offset the tokenizer assigns to special and padding tokens.
const SPECIAL_OFFSET: (usize, usize) = (0, 0);

/// Most frequent label; on a tie the one that occurs first wins.
pub fn majority_label<'a>(labels: &[&'a str]) -> Option<&'a str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(*label).or_insert(0) += 1;
    }

    let mut best: Option<(&'a str, usize)> = None;
    for &label in labels {
        let count = counts[label];
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label)
}

/// Reduce sub-word predictions to one label per word.
///
/// The returned vector always has `word_count` entries. Words the model
/// never reached (for example after truncation) are `None`.
pub fn reduce_to_words(
    predictions: &SubtokenPredictions,
    labels:      &LabelSet,
    word_count:  usize,
) -> Result<Vec<Option<String>>, EvalError> {
    if predictions.offsets.len() != predictions.label_ids.len() {
        return Err(EvalError::PredictionShape {
            offsets: predictions.offsets.len(),
            labels:  predictions.label_ids.len(),
        });
    }

    let mut word_labels: Vec<Option<String>> = vec![None; word_count];
    let mut word = 0usize;
    let mut pending: Vec<&str> = Vec::new();

    for (&offset, &label_id) in predictions.offsets.iter().zip(&predictions.label_ids) {
        if offset == SPECIAL_OFFSET {
            continue;
        }

        let label = labels.label(label_id)?;

        if offset.0 == 0 && !pending.is_empty() {
            if let Some(slot) = word_labels.get_mut(word) {
                *slot = majority_label(&pending).map(str::to_string);
            }
            word += 1;
            pending.clear();
        }
        pending.push(label);
    }

    if !pending.is_empty() {
        if let Some(slot) = word_labels.get_mut(word) {
            *slot = majority_label(&pending).map(str::to_string);
        }
        word += 1;
    }

    if word > word_count {
        tracing::warn!(
            "Classifier produced {} words for a {}-word sentence; extra words ignored",
            word,
            word_count
        );
    }

    Ok(word_labels)
}
