// ============================================================
// Layer 6 — Configuration Store
// ============================================================
// Loads and saves EvaluateConfig as JSON so a batch can be
// checked into a repository and re-run with --config:
//
//   {
//     "inputs": ["datasets/output_M1", "datasets/output_M2"],
//     "extension": "tsv",
//     "report_dir": "reports/latest"
//   }
//
// Missing keys fall back to EvaluateConfig::default().

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::application::evaluate_use_case::EvaluateConfig;

/// Read an evaluation config from a JSON file.
pub fn load_config(path: &Path) -> Result<EvaluateConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    let config: EvaluateConfig = serde_json::from_str(&json)
        .with_context(|| format!("Invalid config JSON in '{}'", path.display()))?;

    tracing::debug!("Loaded config from '{}'", path.display());
    Ok(config)
}

/// Write an evaluation config as pretty-printed JSON.
pub fn save_config(path: &Path, config: &EvaluateConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
        .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

    tracing::debug!("Saved config to '{}'", path.display());
    Ok(())
}
