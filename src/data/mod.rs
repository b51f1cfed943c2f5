// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything that turns bytes on disk into domain types, and
// back. Two file formats are involved:
//
//   gold input (.conllu)        prediction output (.tsv)
//   id  tok_id  token  gold     id  tok_id  token  gold  system
//
//        │                            ▲             │
//        ▼                            │             ▼
//   conllu.rs ── classifier ──▶ writer.rs      reader.rs ──▶ scorers
//
// Each module handles exactly one direction of one format,
// which keeps each step independently testable.

/// Reads 4-column gold input handed to the model
pub mod conllu;

/// Writes 5-column prediction rows
pub mod writer;

/// Reads 5-column prediction rows for scoring
pub mod reader;
