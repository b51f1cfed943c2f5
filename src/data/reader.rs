// ============================================================
// Layer 4 — Record Reader
// ============================================================
// Reads the 5-column evaluation format produced by the
// labelling pipeline:
//
//   1	1	The	_	_
//   1	2	dog	ARG0	ARG0
//   1	3	ran	_	_
//   <blank line>
//   2	1	The	_	_
//   ...
//
// Two views of the same input are offered:
//
//   (a) RecordReader as an Iterator of ReaderEvents.
//       Nothing is buffered beyond the current line, so MFT
//       can be scored in a single forward pass.
//
//   (b) RecordReader::read_keyed, which reads everything,
//       drops rows whose gold label is "_" and groups the
//       rest by numeric sentence id. INV and DIR need this
//       because they pair sentences by sorted id, not by
//       position in the file.
//
// Every line is trimmed before it is looked at, so a line
// holding only whitespace counts as a sentence boundary.

use std::collections::BTreeMap;
use std::io::{BufRead, Lines};

use crate::domain::error::Result;
use crate::domain::record::{ReaderEvent, TokenRecord};

/// Streaming reader over evaluation rows.
pub struct RecordReader<R> {
    lines:   Lines<R>,
    /// 1-based number of the last line handed out
    line_no: usize,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            lines:   input.lines(),
            line_no: 0,
        }
    }

    /// Read the whole input into sentences keyed by numeric id.
    ///
    /// Rows with gold label "_" are validated but not kept. A sentence
    /// made only of such rows never enters the map.
    pub fn read_keyed(self) -> Result<KeyedSentences> {
        let mut sentences: BTreeMap<i64, Vec<TokenRecord>> = BTreeMap::new();
        let mut reader = self;

        while let Some(event) = reader.next() {
            let record = match event? {
                ReaderEvent::Token(record) => record,
                ReaderEvent::Boundary => continue,
            };

            let id = record.numeric_sentence_id(reader.line_no)?;
            if !record.is_evaluated() {
                continue;
            }
            sentences.entry(id).or_default().push(record);
        }

        tracing::debug!("Read {} sentences with evaluated tokens", sentences.len());
        Ok(KeyedSentences { sentences })
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<ReaderEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e.into())),
        };
        self.line_no += 1;

        let line = line.trim();
        if line.is_empty() {
            return Some(Ok(ReaderEvent::Boundary));
        }

        Some(TokenRecord::parse(line, self.line_no).map(ReaderEvent::Token))
    }
}

/// Evaluated tokens grouped by sentence, iterated in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyedSentences {
    sentences: BTreeMap<i64, Vec<TokenRecord>>,
}

impl KeyedSentences {
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Sentences in ascending numeric id order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &[TokenRecord])> {
        self.sentences.iter().map(|(id, tokens)| (*id, tokens.as_slice()))
    }
}

impl FromIterator<TokenRecord> for KeyedSentences {
    /// Group already-parsed records; ids that are not integers are skipped.
    fn from_iter<I: IntoIterator<Item = TokenRecord>>(iter: I) -> Self {
        let mut sentences: BTreeMap<i64, Vec<TokenRecord>> = BTreeMap::new();
        for record in iter {
            if !record.is_evaluated() {
                continue;
            }
            if let Ok(id) = record.sentence_id.parse::<i64>() {
                sentences.entry(id).or_default().push(record);
            }
        }
        Self { sentences }
    }
}
