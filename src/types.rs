use serde::{Deserialize, Serialize};

/// Counters describing one completed run.
///
/// Excluded paths are not counted: pruned directories are never listed,
/// so their contents are invisible to the walker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcatSummary {
    /// Entries written to the output, including ones whose body failed to read.
    pub files_written: usize,
    /// Files rejected by the text classifier.
    pub skipped_binary: usize,
    /// Files that passed classification but could not be read in full.
    pub read_failures: usize,
}
