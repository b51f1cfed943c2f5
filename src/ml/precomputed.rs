// ============================================================
// Layer 5 — Precomputed Classifier
// ============================================================
// Replays the outputs of a token classification model that was
// run elsewhere. The export is a JSON array with one entry per
// sentence:
//
//   [
//     { "words":     ["I", "ran", "away"],
//       "offsets":   [[0,0], [0,1], [0,3], [0,2], [2,4], [0,0]],
//       "label_ids": [58, 0, 58, 3, 3, 58] },
//     ...
//   ]
//
// Entries are looked up by their word sequence, so the export
// can cover several input files in any order. When the same
// sentence appears twice the later entry wins.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};

use crate::domain::error::{EvalError, Result as EvalResult};
use crate::domain::traits::{SubtokenPredictions, TokenClassifier};

/// One exported sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedSentence {
    pub words: Vec<String>,
    #[serde(flatten)]
    pub predictions: SubtokenPredictions,
}

/// TokenClassifier over exported model outputs.
#[derive(Debug, Clone, Default)]
pub struct PrecomputedClassifier {
    by_words: HashMap<Vec<String>, SubtokenPredictions>,
}

impl PrecomputedClassifier {
    pub fn new(sentences: impl IntoIterator<Item = ExportedSentence>) -> Self {
        let by_words = sentences
            .into_iter()
            .map(|s| (s.words, s.predictions))
            .collect();
        Self { by_words }
    }

    /// Read an export written by the model runner.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read predictions from '{}'", path.display()))?;
        let sentences: Vec<ExportedSentence> = serde_json::from_str(&json)
            .with_context(|| format!("Invalid predictions JSON in '{}'", path.display()))?;

        let classifier = Self::new(sentences);
        tracing::info!(
            "Loaded predictions for {} sentences from '{}'",
            classifier.len(),
            path.display()
        );
        Ok(classifier)
    }

    pub fn len(&self) -> usize {
        self.by_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_words.is_empty()
    }
}

impl TokenClassifier for PrecomputedClassifier {
    fn classify(&self, words: &[String]) -> EvalResult<SubtokenPredictions> {
        self.by_words
            .get(words)
            .cloned()
            .ok_or_else(|| EvalError::MissingPrediction(words.join(" ")))
    }
}
