// ============================================================
// Layer 3 — Token Record and Reader Events
// ============================================================
// One line of the evaluation input looks like this
// (fields separated by a single tab):
//
//   sentence_id  token_id  token  gold_label  system_label
//   4            2         ran    ARG1        ARG1
//
// Sentences are separated by a blank line. Instead of letting
// every consumer re-discover those blank lines, the reader
// emits an explicit `Boundary` event between sentences, so a
// scorer is just a state machine over `ReaderEvent`s.

use serde::{Deserialize, Serialize};

use crate::domain::error::{EvalError, Result};

/// Gold label meaning "this token is not evaluated by this test".
pub const BLANK_LABEL: &str = "_";

/// Number of tab-separated fields in an evaluation row.
pub const FIELD_COUNT: usize = 5;

/// A single token row with its gold and predicted label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Kept as text: MFT reports ids exactly as written in the file
    pub sentence_id: String,

    /// 1-based position of the token inside its sentence
    pub token_id: u32,

    pub token: String,

    /// Ground truth, or `_` when the test does not look at this token
    pub gold_label: String,

    /// Label produced by the model under test
    pub system_label: String,
}

impl TokenRecord {
    pub fn new(
        sentence_id:  impl Into<String>,
        token_id:     u32,
        token:        impl Into<String>,
        gold_label:   impl Into<String>,
        system_label: impl Into<String>,
    ) -> Self {
        Self {
            sentence_id:  sentence_id.into(),
            token_id,
            token:        token.into(),
            gold_label:   gold_label.into(),
            system_label: system_label.into(),
        }
    }

    /// Parse one non-blank, already trimmed line.
    ///
    /// `line_no` is 1-based and only used for error messages.
    pub fn parse(line: &str, line_no: usize) -> Result<Self> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != FIELD_COUNT {
            return Err(EvalError::format(
                line_no,
                format!("expected {FIELD_COUNT} tab-separated fields, found {}", fields.len()),
            ));
        }

        let token_id = fields[1].parse::<u32>().map_err(|_| {
            EvalError::format(line_no, format!("token id '{}' is not an integer", fields[1]))
        })?;

        Ok(Self::new(fields[0], token_id, fields[2], fields[3], fields[4]))
    }

    /// True when the gold label takes part in evaluation.
    pub fn is_evaluated(&self) -> bool {
        self.gold_label != BLANK_LABEL
    }

    /// True when the token is evaluated and the model got it wrong.
    pub fn is_mismatch(&self) -> bool {
        self.is_evaluated() && self.gold_label != self.system_label
    }

    /// The sentence id as an integer, as needed for pair ordering.
    pub fn numeric_sentence_id(&self, line_no: usize) -> Result<i64> {
        self.sentence_id.parse::<i64>().map_err(|_| {
            EvalError::format(
                line_no,
                format!("sentence id '{}' is not an integer", self.sentence_id),
            )
        })
    }
}

/// What the reader hands to a streaming scorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReaderEvent {
    Token(TokenRecord),
    /// A blank line: the current sentence is complete
    Boundary,
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_row() {
        let r = TokenRecord::parse("4\t2\tran\tARG1\tARG0", 1).unwrap();
        assert_eq!(r.sentence_id, "4");
        assert_eq!(r.token_id, 2);
        assert_eq!(r.token, "ran");
        assert_eq!(r.gold_label, "ARG1");
        assert_eq!(r.system_label, "ARG0");
        assert!(r.is_mismatch());
    }

    #[test]
    fn test_wrong_column_count_is_format_error() {
        let err = TokenRecord::parse("4\t2\tran\tARG1", 7).unwrap_err();
        match err {
            EvalError::Format { line, .. } => assert_eq!(line, 7),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_gold_is_never_a_mismatch() {
        let r = TokenRecord::new("1", 1, "the", BLANK_LABEL, "ARG0");
        assert!(!r.is_evaluated());
        assert!(!r.is_mismatch());
    }

    #[test]
    fn test_non_numeric_sentence_id() {
        let r = TokenRecord::new("s1", 1, "the", "ARG0", "ARG0");
        assert!(r.numeric_sentence_id(3).is_err());
        let r = TokenRecord::new("12", 1, "the", "ARG0", "ARG0");
        assert_eq!(r.numeric_sentence_id(3).unwrap(), 12);
    }
}
