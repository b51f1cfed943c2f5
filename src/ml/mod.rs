// ============================================================
// Layer 5 — Model Glue
// ============================================================
// The network that produces system labels lives outside this
// crate and is reached through domain::traits::TokenClassifier.
// What stays here is the framework-free part of running it:
//
//   label_set.rs  — the label inventory (index → label),
//                   built once and passed explicitly
//
//   alignment.rs  — sub-word predictions → one label per
//                   word, by majority vote
//
//   precomputed.rs — a classifier backed by the model's
//                   exported outputs (JSON)
//
// Reference: Devlin et al. (2019) BERT, §4.3 (token tagging)

/// Label inventory of the classifier
pub mod label_set;

/// Sub-word → word label reduction
pub mod alignment;

/// Classifier that replays exported model outputs
pub mod precomputed;
