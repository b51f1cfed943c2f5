// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer wires the other layers together to reach one goal
// (scoring a batch, or producing prediction files).
//
// Rules for this layer:
//   - No scoring logic here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination and per-file error handling

// Batch scoring of prediction files
pub mod evaluate_use_case;

// Gold input → classifier → prediction files
pub mod label_use_case;
