// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any single
// business layer:
//
//   config.rs — EvaluateConfig as JSON on disk, so a batch
//               can be re-run with --config
//
//   report.rs — results.csv / results.json for a batch, for
//               comparing models and runs after the fact
//
// Reference: Rust Book §9 (Error Handling with anyhow)

/// Evaluation config loading and saving
pub mod config;

/// Batch report CSV/JSON writer
pub mod report;
