// ============================================================
// Layer 4 — Gold Input Reader
// ============================================================
// Reads the files the preprocessing step hands to the model:
//
//   sentence_id  token_id  token  gold_label
//
// Only the token (3rd column) and the gold label (4th column)
// are kept. Depending on the input variant a sentence may end
// with extra context after a [SEP] token, or carry a "[PRED] "
// marker on the predicate; both are passed through untouched
// here and handled by the prediction writer.
//
// Blank lines separate sentences. The last sentence is kept
// even when the file does not end with a blank line.

use anyhow::{Context, Result};
use std::{fs, io::BufRead, path::Path};

use crate::domain::error::EvalError;

/// Minimum number of tab-separated columns in a gold input row.
const MIN_COLUMNS: usize = 4;

/// One sentence of the gold input, tokens and labels aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoldSentence {
    pub tokens: Vec<String>,
    pub gold:   Vec<String>,
}

impl GoldSentence {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Parse gold sentences from any buffered reader.
pub fn read_gold_sentences<R: BufRead>(input: R) -> Result<Vec<GoldSentence>, EvalError> {
    let mut sentences = Vec::new();
    let mut current = GoldSentence::default();

    for (i, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            if !current.is_empty() {
                sentences.push(std::mem::take(&mut current));
            }
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < MIN_COLUMNS {
            return Err(EvalError::format(
                i + 1,
                format!("expected at least {MIN_COLUMNS} columns, found {}", fields.len()),
            ));
        }
        current.tokens.push(fields[2].to_string());
        current.gold.push(fields[3].to_string());
    }

    if !current.is_empty() {
        sentences.push(current);
    }

    Ok(sentences)
}

/// Read gold sentences from a file on disk.
pub fn load_gold_file(path: &Path) -> Result<Vec<GoldSentence>> {
    let file = fs::File::open(path)
        .with_context(|| format!("Cannot open '{}'", path.display()))?;
    let sentences = read_gold_sentences(std::io::BufReader::new(file))
        .with_context(|| format!("Cannot parse '{}'", path.display()))?;

    tracing::debug!("Read {} sentences from '{}'", sentences.len(), path.display());
    Ok(sentences)
}
