// ============================================================
// Layer 2 — LabelUseCase
// ============================================================
// Produces the prediction files the evaluator scores:
//
//   Step 1: Read gold sentences (.conllu)          (Layer 4)
//   Step 2: Ask the classifier for sub-word labels (Layer 3 trait)
//   Step 3: Majority-vote sub-words into words     (Layer 5)
//   Step 4: Write 5-column rows (.tsv)             (Layer 4)
//
// The classifier is generic, so this workflow runs the same
// whether the model is a local network, a remote service or
// a stub in a test.

use anyhow::{Context, Result};
use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::data::{
    conllu::{load_gold_file, GoldSentence},
    writer::{prediction_file_name, write_sentence},
};
use crate::domain::traits::TokenClassifier;
use crate::ml::{alignment::reduce_to_words, label_set::LabelSet};

pub struct LabelUseCase<C> {
    classifier: C,
    labels:     LabelSet,
}

impl<C: TokenClassifier> LabelUseCase<C> {
    pub fn new(classifier: C, labels: LabelSet) -> Self {
        Self { classifier, labels }
    }

    /// Label sentences and write them to `out`; returns the count written.
    pub fn label_sentences<W: Write>(&self, sentences: &[GoldSentence], out: &mut W) -> Result<usize> {
        for (i, sentence) in sentences.iter().enumerate() {
            let predictions = self.classifier.classify(&sentence.tokens)?;
            let system = reduce_to_words(&predictions, &self.labels, sentence.len())?;
            write_sentence(out, i + 1, sentence, &system)?;
        }
        Ok(sentences.len())
    }

    /// Label one gold input file into one prediction file.
    pub fn label_file(&self, input: &Path, output: &Path) -> Result<usize> {
        let sentences = load_gold_file(input)?;

        let file = fs::File::create(output)
            .with_context(|| format!("Cannot create '{}'", output.display()))?;
        let mut out = BufWriter::new(file);

        let written = self
            .label_sentences(&sentences, &mut out)
            .with_context(|| format!("Cannot label '{}'", input.display()))?;
        out.flush()?;

        tracing::info!("Predicted {} sentences: '{}'", written, output.display());
        Ok(written)
    }

    /// Label every `.conllu` file of `input_dir` into `output_dir`.
    /// Returns the prediction files written, in input name order.
    pub fn label_dir(&self, input_dir: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(output_dir)
            .with_context(|| format!("Cannot create '{}'", output_dir.display()))?;

        let mut inputs: Vec<PathBuf> = fs::read_dir(input_dir)
            .with_context(|| format!("Cannot read directory '{}'", input_dir.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("conllu"))
            .collect();
        inputs.sort();

        let mut written = Vec::with_capacity(inputs.len());
        for input in inputs {
            let Some(name) = input.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let output = output_dir.join(prediction_file_name(name));
            tracing::info!("Predicting file: {}", input.display());
            self.label_file(&input, &output)?;
            written.push(output);
        }
        Ok(written)
    }
}
