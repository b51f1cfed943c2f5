// ============================================================
// Layer 6 — Report Writer
// ============================================================
// Persists one batch of outcomes so runs can be compared
// later (in a spreadsheet, or by diffing JSON):
//
//   <report_dir>/results.csv
//   <report_dir>/results.json
//
// Example CSV output:
//   source,file,evaluation_type,status,total,failure_rate,failed_ids
//   datasets/output_M1,neg_MFT_M1_predictions.tsv,MFT,evaluated,20,15,3;7;12
//   datasets/output_M1,voice_INV_M1_predictions.tsv,INV,evaluated,10,20,4-5;8-9
//   datasets/output_M1,readme.tsv,,skipped,,,
//   datasets/output_M4,,,unreadable,,,
//
// Both files are rewritten on every run.

use anyhow::{Context, Result};
use std::{
    fs,
    io::{BufWriter, Write},
    path::PathBuf,
};

use crate::application::evaluate_use_case::{BatchReport, FileOutcome};

const CSV_HEADER: &str = "source,file,evaluation_type,status,total,failure_rate,failed_ids";

/// Writes batch results into a directory.
pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    /// Create the writer, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create report directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn csv_path(&self) -> PathBuf {
        self.dir.join("results.csv")
    }

    pub fn json_path(&self) -> PathBuf {
        self.dir.join("results.json")
    }

    /// Write both report files.
    pub fn write(&self, report: &BatchReport) -> Result<()> {
        self.write_csv(report)?;
        self.write_json(report)?;
        tracing::info!("Wrote report to '{}'", self.dir.display());
        Ok(())
    }

    fn write_csv(&self, report: &BatchReport) -> Result<()> {
        let path = self.csv_path();
        let file = fs::File::create(&path)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;
        let mut out = BufWriter::new(file);

        writeln!(out, "{CSV_HEADER}")?;
        for source in report.sources.iter().filter(|s| s.error.is_some()) {
            writeln!(out, "{},,,unreadable,,,", csv_field(&source.source))?;
        }
        for (source, file) in report.files() {
            let (kind, total, rate, failed) = match &file.outcome {
                FileOutcome::Evaluated(r) => (
                    r.evaluation_type.to_string(),
                    r.total.to_string(),
                    r.failure_rate.map(|p| p.to_string()).unwrap_or_default(),
                    r.failed_ids.join(";"),
                ),
                _ => Default::default(),
            };

            writeln!(
                out,
                "{},{},{},{},{},{},{}",
                csv_field(source),
                csv_field(&file.file),
                kind,
                file.outcome.status(),
                total,
                rate,
                csv_field(&failed),
            )?;
        }
        out.flush()?;

        tracing::debug!("Wrote '{}'", path.display());
        Ok(())
    }

    fn write_json(&self, report: &BatchReport) -> Result<()> {
        let path = self.json_path();
        let json = serde_json::to_string_pretty(report)?;
        fs::write(&path, json).with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::debug!("Wrote '{}'", path.display());
        Ok(())
    }
}

/// Quote a field when it contains a comma, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
