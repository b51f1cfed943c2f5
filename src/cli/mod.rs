// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap, delegates the work to Layer 2, and prints the results.
//
// Three commands are supported:
//   1. `evaluate` — scores prediction files per test category
//   2. `predict`  — writes prediction files from model outputs
//   3. `labels`   — shows or exports the label inventory

pub mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use commands::{Commands, EvaluateArgs, LabelsArgs, PredictArgs};

use crate::application::evaluate_use_case::{
    BatchReport, EvaluateUseCase, FileOutcome, FileReport,
};
use crate::application::label_use_case::LabelUseCase;
use crate::infra::report::ReportWriter;
use crate::ml::label_set::LabelSet;
use crate::ml::precomputed::PrecomputedClassifier;

#[derive(Parser, Debug)]
#[command(
    name = "srl-behavior-eval",
    version,
    about = "Score MFT, INV and DIR behavioral tests for an SRL token classifier."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the selected subcommand.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Evaluate(args) => run_evaluate(args),
            Commands::Predict(args) => run_predict(args),
            Commands::Labels(args) => run_labels(args),
        }
    }
}

/// Handles the `evaluate` subcommand.
fn run_evaluate(args: EvaluateArgs) -> Result<()> {
    let config = args.into_config()?;
    let use_case = EvaluateUseCase::new(config);
    let report = use_case.execute()?;

    print_report(&report);

    if let Some(dir) = &use_case.config().report_dir {
        let writer = ReportWriter::new(dir)?;
        writer.write(&report)?;
        println!("Report written to {}", dir);
    }
    Ok(())
}

/// Handles the `predict` subcommand.
fn run_predict(args: PredictArgs) -> Result<()> {
    let labels = load_labels(args.labels.as_deref())?;
    let classifier = PrecomputedClassifier::load(&args.predictions)?;
    let use_case = LabelUseCase::new(classifier, labels);

    let written = use_case.label_dir(Path::new(&args.input_dir), Path::new(&args.output_dir))?;
    for path in &written {
        println!("Predictions saved to {}", path.display());
    }
    println!("Wrote {} prediction files", written.len());
    Ok(())
}

/// Handles the `labels` subcommand.
fn run_labels(args: LabelsArgs) -> Result<()> {
    let labels = load_labels(args.from.as_deref())?;

    match &args.output {
        Some(path) => {
            labels.save(path)?;
            println!("Wrote {} labels to {}", labels.len(), path);
        }
        None => {
            for (index, label) in labels.iter().enumerate() {
                println!("{index}\t{label}");
            }
        }
    }
    Ok(())
}

fn load_labels(path: Option<&str>) -> Result<LabelSet> {
    match path {
        Some(path) => LabelSet::load(path),
        None => Ok(LabelSet::default()),
    }
}

fn print_report(report: &BatchReport) {
    for source in &report.sources {
        println!("Evaluating model: {}", source.source);
        if let Some(error) = &source.error {
            println!("Could not read input: {error}");
        }
        for file in &source.files {
            print_file(file);
        }
        println!("-------------------------------------------------------\n");
    }
}

fn print_file(file: &FileReport) {
    println!("\nFile: {}", file.file);
    match &file.outcome {
        FileOutcome::Evaluated(result) => {
            println!("Evaluation Type: {}", result.evaluation_type);
            match result.failure_rate {
                Some(rate) => println!("Failure Rate: {rate}%"),
                None => println!("Failure Rate: n/a (no data)"),
            }
            if result.failed_ids.is_empty() {
                return;
            }
            if result.evaluation_type.is_paired() {
                println!("Failed Sentence Pairs: {}", result.failed_ids.join(", "));
            } else {
                println!("Failed Sentence IDs: [{}]", result.failed_ids.join(", "));
            }
        }
        FileOutcome::Skipped { reason } => println!("Skipped: {reason}"),
        FileOutcome::Failed { error } => println!("Could not evaluate: {error}"),
    }
}
