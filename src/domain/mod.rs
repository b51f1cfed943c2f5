// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types that describe what the evaluator talks
// about: token rows, sentence boundaries, test categories,
// verdicts and aggregated results.
//
// Rules for this layer:
//   - NO file I/O
//   - NO printing
//   - NO knowledge of the model that produced the labels
//
// Everything here is cheap to construct in a unit test,
// which is what keeps the scorers (Layer 5) testable
// without touching the filesystem.

// Error taxonomy shared by the reader and the scorers
pub mod error;

// One tab-separated row and the reader's event stream
pub mod record;

// MFT / INV / DIR and how a file name selects one
pub mod test_kind;

// Per-sentence verdicts and per-file results
pub mod verdict;

// Core abstractions (traits) that other layers implement
pub mod traits;
