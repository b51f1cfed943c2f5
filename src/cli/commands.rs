// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands and all their flags:
//
//   evaluate — score MFT / INV / DIR prediction files
//   predict  — turn exported model outputs into prediction files
//   labels   — show or export the classifier's label set
//
// clap's derive macros generate help text, error messages
// for bad flags, and type conversion.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::Path;

use crate::application::evaluate_use_case::EvaluateConfig;
use crate::infra::config::load_config;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score prediction files and print failure rates per test
    Evaluate(EvaluateArgs),

    /// Write 5-column prediction files from gold inputs and model outputs
    Predict(PredictArgs),

    /// Print the label inventory, or export it as JSON
    Labels(LabelsArgs),
}

/// Arguments for the `evaluate` command.
/// Flags given on the command line override values from --config.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Model output directories or single prediction files.
    /// Defaults to datasets/output_M1..M3
    pub paths: Vec<String>,

    /// Only score files with this extension inside directories
    #[arg(long)]
    pub extension: Option<String>,

    /// JSON file with an evaluation config
    #[arg(long)]
    pub config: Option<String>,

    /// Write results.csv and results.json into this directory
    #[arg(long)]
    pub report_dir: Option<String>,
}

impl EvaluateArgs {
    /// Merge the optional config file with the command-line flags.
    /// This is the boundary between Layer 1 and Layer 2 —
    /// the application layer never sees clap types.
    pub fn into_config(self) -> Result<EvaluateConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(Path::new(path))?,
            None => EvaluateConfig::default(),
        };

        if !self.paths.is_empty() {
            config.inputs = self.paths;
        }
        if let Some(ext) = self.extension {
            config.extension = ext.trim_start_matches('.').to_string();
        }
        if self.report_dir.is_some() {
            config.report_dir = self.report_dir;
        }
        Ok(config)
    }
}

/// Arguments for the `predict` command.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// JSON export of the model's sub-word offsets and label ids
    #[arg(long)]
    pub predictions: String,

    /// Directory with the .conllu gold inputs
    #[arg(long, default_value = "datasets/input_M1")]
    pub input_dir: String,

    /// Directory that receives the *_predictions.tsv files
    #[arg(long, default_value = "datasets/output_M1")]
    pub output_dir: String,

    /// Label set JSON; the built-in inventory when omitted
    #[arg(long)]
    pub labels: Option<String>,
}

/// Arguments for the `labels` command.
#[derive(Args, Debug)]
pub struct LabelsArgs {
    /// Read the label set from this JSON file instead of the default
    #[arg(long)]
    pub from: Option<String>,

    /// Write the label set as JSON to this file instead of printing it
    #[arg(long)]
    pub output: Option<String>,
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config::save_config;
    use tempfile::TempDir;

    fn args(paths: &[&str]) -> EvaluateArgs {
        EvaluateArgs {
            paths:      paths.iter().map(|s| s.to_string()).collect(),
            extension:  None,
            config:     None,
            report_dir: None,
        }
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = args(&[]).into_config().unwrap();
        assert_eq!(config, EvaluateConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("eval.json");
        let saved = EvaluateConfig {
            inputs:     vec!["from_file".to_string()],
            extension:  "txt".to_string(),
            report_dir: Some("r".to_string()),
        };
        save_config(&path, &saved).unwrap();

        let mut a = args(&["from_cli"]);
        a.config = Some(path.display().to_string());
        a.extension = Some(".tsv".to_string());

        let config = a.into_config().unwrap();
        assert_eq!(config.inputs, vec!["from_cli"]);
        assert_eq!(config.extension, "tsv");
        assert_eq!(config.report_dir.as_deref(), Some("r"));
    }

    #[test]
    fn test_predict_defaults_to_first_model_dirs() {
        use crate::cli::Cli;
        use clap::Parser;

        let cli = Cli::try_parse_from(["srl-behavior-eval", "predict", "--predictions", "m1.json"]).unwrap();
        match cli.command {
            Commands::Predict(args) => {
                assert_eq!(args.predictions, "m1.json");
                assert_eq!(args.input_dir, "datasets/input_M1");
                assert_eq!(args.output_dir, "datasets/output_M1");
                assert!(args.labels.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_predict_requires_an_export() {
        use crate::cli::Cli;
        use clap::Parser;

        assert!(Cli::try_parse_from(["srl-behavior-eval", "predict"]).is_err());
    }
}
