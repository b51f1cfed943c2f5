// ============================================================
// Layer 3 — Test Categories
// ============================================================
// The upstream producer names its output files after the
// capability and test type they cover, for example
//
//   negation_MFT_M1_predictions.tsv
//   voice_INV_M2_predictions.tsv
//
// The test category is recovered from that name. The checks
// run in a fixed order (MFT, INV, DIR), so a name containing
// more than one marker resolves to the first one in that list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three behavioral test categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestKind {
    /// Minimum Functionality: labels on unperturbed sentences
    Mft,
    /// Invariance: labels stay the same across a perturbation
    Inv,
    /// Directional Expectation: labels change across a perturbation
    Dir,
}

impl TestKind {
    /// Resolution order for file names.
    pub const ALL: [TestKind; 3] = [TestKind::Mft, TestKind::Inv, TestKind::Dir];

    /// The marker looked for in file names (case-sensitive).
    pub fn marker(self) -> &'static str {
        match self {
            TestKind::Mft => "MFT",
            TestKind::Inv => "INV",
            TestKind::Dir => "DIR",
        }
    }

    /// Pick the test category a file name refers to, if any.
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| name.contains(kind.marker()))
    }

    /// MFT scores sentences; INV and DIR score sentence pairs.
    pub fn is_paired(self) -> bool {
        !matches!(self, TestKind::Mft)
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_each_kind() {
        assert_eq!(TestKind::from_file_name("neg_MFT_M1_predictions.tsv"), Some(TestKind::Mft));
        assert_eq!(TestKind::from_file_name("voice_INV_M2_predictions.tsv"), Some(TestKind::Inv));
        assert_eq!(TestKind::from_file_name("swap_DIR_M3_predictions.tsv"), Some(TestKind::Dir));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(TestKind::from_file_name("notes.tsv"), None);
        // markers are case-sensitive
        assert_eq!(TestKind::from_file_name("neg_mft.tsv"), None);
    }

    #[test]
    fn test_mft_wins_when_several_markers_present() {
        assert_eq!(TestKind::from_file_name("DIR_INV_MFT.tsv"), Some(TestKind::Mft));
        assert_eq!(TestKind::from_file_name("DIR_INV.tsv"), Some(TestKind::Inv));
    }

    #[test]
    fn test_only_inv_and_dir_are_paired() {
        assert!(!TestKind::Mft.is_paired());
        assert!(TestKind::Inv.is_paired());
        assert!(TestKind::Dir.is_paired());
    }
}
