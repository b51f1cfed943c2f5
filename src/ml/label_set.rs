// ============================================================
// Layer 5 — Label Set
// ============================================================
// The label inventory of the token classifier: the model
// predicts an index, and this table turns it into a label
// string such as "ARGM-TMP".
//
// A LabelSet is built once (either the default PropBank-style
// inventory below or a JSON file) and passed explicitly to
// whatever needs it. There is no global label table.
//
// JSON format: a plain array, position = index
//   ["ARG0", "ARG1", ..., "_"]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::domain::error::EvalError;

/// The inventory the SRL models were fine-tuned with.
const DEFAULT_LABELS: [&str; 59] = [
    "ARG0", "ARG1", "ARG1-DSP", "ARG2", "ARG3", "ARG4", "ARG5", "ARGA",
    "ARGM-ADJ", "ARGM-ADV", "ARGM-CAU", "ARGM-COM", "ARGM-CXN", "ARGM-DIR",
    "ARGM-DIS", "ARGM-EXT", "ARGM-GOL", "ARGM-LOC", "ARGM-LVB", "ARGM-MNR",
    "ARGM-MOD", "ARGM-NEG", "ARGM-PRD", "ARGM-PRP", "ARGM-PRR", "ARGM-REC",
    "ARGM-TMP", "C-ARG0", "C-ARG1", "C-ARG1-DSP", "C-ARG2", "C-ARG3",
    "C-ARG4", "C-ARGM-ADV", "C-ARGM-COM", "C-ARGM-CXN", "C-ARGM-DIR",
    "C-ARGM-EXT", "C-ARGM-GOL", "C-ARGM-LOC", "C-ARGM-MNR", "C-ARGM-PRP",
    "C-ARGM-PRR", "C-ARGM-TMP", "R-ARG0", "R-ARG1", "R-ARG2", "R-ARG3",
    "R-ARG4", "R-ARGM-ADJ", "R-ARGM-ADV", "R-ARGM-CAU", "R-ARGM-COM",
    "R-ARGM-DIR", "R-ARGM-GOL", "R-ARGM-LOC", "R-ARGM-MNR", "R-ARGM-TMP", "_",
];

/// Index → label table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    /// Build from labels in index order.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Read a JSON array of labels from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read label set from '{}'", path.display()))?;
        let set: LabelSet = serde_json::from_str(&json)
            .with_context(|| format!("Invalid label set JSON in '{}'", path.display()))?;
        tracing::debug!("Loaded {} labels from '{}'", set.len(), path.display());
        Ok(set)
    }

    /// Write the labels as a pretty-printed JSON array.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write label set to '{}'", path.display()))?;
        Ok(())
    }

    /// Labels in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label for a predicted index.
    pub fn label(&self, index: usize) -> Result<&str, EvalError> {
        self.labels
            .get(index)
            .map(String::as_str)
            .ok_or(EvalError::UnknownLabelIndex(index))
    }
}

impl Default for LabelSet {
    fn default() -> Self {
        Self::new(DEFAULT_LABELS)
    }
}

impl From<Vec<String>> for LabelSet {
    fn from(labels: Vec<String>) -> Self {
        Self::new(labels)
    }
}

impl From<LabelSet> for Vec<String> {
    fn from(set: LabelSet) -> Self {
        set.labels
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_inventory_round_trips_indices() {
        let set = LabelSet::default();
        assert_eq!(set.len(), 59);
        assert_eq!(set.label(0).unwrap(), "ARG0");
        assert_eq!(set.label(26).unwrap(), "ARGM-TMP");
        assert_eq!(set.label(58).unwrap(), "_");
        assert_eq!(set.label(57).unwrap(), "R-ARGM-TMP");
    }

    #[test]
    fn test_unknown_index_is_an_error() {
        let set = LabelSet::new(["A", "B"]);
        assert!(matches!(set.label(2), Err(EvalError::UnknownLabelIndex(2))));
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["O", "ARG0", "ARG1"]"#).unwrap();

        let set = LabelSet::load(file.path()).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.label(1).unwrap(), "ARG0");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["O", "ARG0", "ARG1"]);
    }

    #[test]
    fn test_save_writes_plain_array() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("labels.json");
        let set = LabelSet::new(["O", "ARG0"]);
        set.save(&path).unwrap();

        let values: Vec<String> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(values, vec!["O", "ARG0"]);
        assert_eq!(LabelSet::load(&path).unwrap(), set);
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        assert!(LabelSet::load(file.path()).is_err());
    }
}
