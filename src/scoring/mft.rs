// ============================================================
// Layer 5 — Minimum Functionality Test (MFT) Scorer
// ============================================================
// A sentence passes when every evaluated token (gold label
// other than "_") carries the gold label as its system label.
//
// The scorer is a small state machine over ReaderEvents:
//
//   Token(r)  → if r starts a new sentence id, close the
//               previous sentence and open a new one; then
//               clear `matches` if r is a mismatch
//   Boundary  → close the current sentence
//   end       → close the current sentence
//
// "Close" happens at most once per sentence and records a
// Verdict. Sentence ids are reported exactly as written and
// in file order.

use std::io::BufRead;

use crate::data::reader::RecordReader;
use crate::domain::error::Result;
use crate::domain::record::ReaderEvent;
use crate::domain::test_kind::TestKind;
use crate::domain::traits::Scorer;
use crate::domain::verdict::{EvaluationResult, Verdict};
use crate::scoring::aggregate::aggregate;

/// Streaming state for one MFT file.
#[derive(Debug, Default)]
pub struct MftState {
    /// Id of the sentence currently open, if any
    current:  Option<String>,
    /// Whether every evaluated token so far matched
    matches:  bool,
    verdicts: Vec<Verdict>,
}

impl MftState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the state machine by one event.
    pub fn feed(&mut self, event: ReaderEvent) {
        match event {
            ReaderEvent::Token(record) => {
                if self.current.as_deref() != Some(record.sentence_id.as_str()) {
                    self.close_sentence();
                    self.current = Some(record.sentence_id.clone());
                    self.matches = true;
                }
                if record.is_mismatch() {
                    self.matches = false;
                }
            }
            ReaderEvent::Boundary => self.close_sentence(),
        }
    }

    /// Close any open sentence and return the verdicts in file order.
    pub fn finish(mut self) -> Vec<Verdict> {
        self.close_sentence();
        self.verdicts
    }

    fn close_sentence(&mut self) {
        if let Some(id) = self.current.take() {
            if !self.matches {
                tracing::debug!("MFT sentence {} failed", id);
            }
            self.verdicts.push(Verdict::new(id, self.matches));
        }
        self.matches = true;
    }
}

/// Score an already-produced event sequence.
pub fn score_events<I>(events: I) -> Result<Vec<Verdict>>
where
    I: IntoIterator<Item = Result<ReaderEvent>>,
{
    let mut state = MftState::new();
    for event in events {
        state.feed(event?);
    }
    Ok(state.finish())
}

/// MFT implementation of the Scorer trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct MftScorer;

impl Scorer for MftScorer {
    fn kind(&self) -> TestKind {
        TestKind::Mft
    }

    fn score(&self, input: &mut dyn BufRead) -> Result<EvaluationResult> {
        let verdicts = score_events(RecordReader::new(input))?;
        Ok(aggregate(self.kind(), verdicts))
    }
}
