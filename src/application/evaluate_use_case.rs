// ============================================================
// Layer 2 — EvaluateUseCase
// ============================================================
// Scores every prediction file of one or more model output
// directories:
//
//   Step 1: List regular files, sorted by name       (std::fs)
//   Step 2: Keep the configured extension (".tsv")
//   Step 3: Pick MFT / INV / DIR from the file name  (Layer 3)
//   Step 4: Score the file                           (Layer 5)
//   Step 5: Record the outcome and move on
//
// A file never stops the batch: an unknown test type is
// recorded as Skipped, a read or format error as Failed.
// A directory that cannot be listed is recorded on its source
// and the next input is evaluated.
// Printing the outcomes is Layer 1's job.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::domain::error::EvalError;
use crate::domain::test_kind::TestKind;
use crate::domain::verdict::EvaluationResult;
use crate::scoring::scorer_for;

// ─── Evaluation Configuration ────────────────────────────────────────────────
// Serialisable so a batch can be described in a JSON file and
// passed with --config instead of repeating the flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluateConfig {
    /// Directories (one per model) or individual files
    pub inputs:     Vec<String>,
    /// Only files with this extension are scored inside directories
    pub extension:  String,
    /// Where results.csv / results.json go; no report when unset
    pub report_dir: Option<String>,
}

impl Default for EvaluateConfig {
    fn default() -> Self {
        Self {
            inputs: vec![
                "datasets/output_M1".to_string(),
                "datasets/output_M2".to_string(),
                "datasets/output_M3".to_string(),
            ],
            extension:  "tsv".to_string(),
            report_dir: None,
        }
    }
}

// ─── Outcomes ─────────────────────────────────────────────────────────────────
/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Evaluated(EvaluationResult),
    Skipped { reason: String },
    Failed { error: String },
}

impl FileOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            FileOutcome::Evaluated(_) => "evaluated",
            FileOutcome::Skipped { .. } => "skipped",
            FileOutcome::Failed { .. } => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub file:    String,
    pub outcome: FileOutcome,
}

/// All files of one input path (usually one model's output directory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReport {
    pub source: String,
    pub files:  Vec<FileReport>,
    /// Set when the input could not be listed at all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error:  Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub sources: Vec<SourceReport>,
}

impl BatchReport {
    /// Iterate (source, file report) over the whole batch.
    pub fn files(&self) -> impl Iterator<Item = (&str, &FileReport)> {
        self.sources
            .iter()
            .flat_map(|s| s.files.iter().map(move |f| (s.source.as_str(), f)))
    }

    pub fn count(&self, status: &str) -> usize {
        self.files().filter(|(_, f)| f.outcome.status() == status).count()
    }

    /// Sources that could not be listed.
    pub fn unreadable_sources(&self) -> usize {
        self.sources.iter().filter(|s| s.error.is_some()).count()
    }
}

// ─── EvaluateUseCase ──────────────────────────────────────────────────────────
pub struct EvaluateUseCase {
    config: EvaluateConfig,
}

impl EvaluateUseCase {
    pub fn new(config: EvaluateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluateConfig {
        &self.config
    }

    /// Score every input and collect the outcomes.
    pub fn execute(&self) -> Result<BatchReport> {
        let mut report = BatchReport::default();

        for input in &self.config.inputs {
            let path = Path::new(input);
            tracing::info!("Evaluating '{}'", path.display());

            let (files, error) = if path.is_file() {
                (vec![path.to_path_buf()], None)
            } else {
                match self.list_files(path) {
                    Ok(files) => (files, None),
                    Err(e) => {
                        tracing::error!("Skipping '{}': {:#}", path.display(), e);
                        (Vec::new(), Some(format!("{e:#}")))
                    }
                }
            };

            let files = files
                .iter()
                .map(|file| FileReport {
                    file:    display_name(file),
                    outcome: evaluate_file(file),
                })
                .collect();

            report.sources.push(SourceReport {
                source: input.clone(),
                files,
                error,
            });
        }

        tracing::info!(
            "Batch done: {} evaluated, {} skipped, {} failed, {} unreadable inputs",
            report.count("evaluated"),
            report.count("skipped"),
            report.count("failed"),
            report.unreadable_sources(),
        );
        Ok(report)
    }

    /// Regular files with the configured extension, sorted by file name.
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        // Missing directories are reported but do not fail the batch.
        if !dir.exists() {
            tracing::warn!("Directory '{}' does not exist; nothing to evaluate", dir.display());
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(dir)
            .with_context(|| format!("Cannot read directory '{}'", dir.display()))?
        {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) == Some(self.config.extension.as_str()) {
                files.push(path);
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        tracing::debug!("Found {} files in '{}'", files.len(), dir.display());
        Ok(files)
    }
}

/// Score a single file, turning every problem into an outcome.
pub fn evaluate_file(path: &Path) -> FileOutcome {
    let name = display_name(path);

    let Some(kind) = TestKind::from_file_name(&name) else {
        tracing::warn!("Could not determine evaluation type for file: {}", path.display());
        return FileOutcome::Skipped {
            reason: EvalError::UnknownEvaluationType(name).to_string(),
        };
    };

    match score_file(path, kind) {
        Ok(result) => {
            tracing::debug!("{}: {} {:?}", name, kind, result.failure_rate);
            FileOutcome::Evaluated(result)
        }
        Err(e) => {
            tracing::error!("Failed to evaluate '{}': {:#}", path.display(), e);
            FileOutcome::Failed {
                error: format!("{e:#}"),
            }
        }
    }
}

fn score_file(path: &Path, kind: TestKind) -> Result<EvaluationResult> {
    let file = fs::File::open(path)
        .with_context(|| format!("Cannot open '{}'", path.display()))?;
    let mut reader = BufReader::new(file);

    let result = scorer_for(kind)
        .score(&mut reader)
        .with_context(|| format!("Cannot score '{}'", path.display()))?;
    Ok(result)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}
