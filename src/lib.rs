//! # Concater
//!
//! `concater` walks a directory tree and concatenates every matched text file
//! into a single stream, wrapping each file in begin/end marker lines that
//! carry its root-relative path. The result is a flat snapshot of a project
//! that is easy to read or hand to an LLM.
//!
//! Paths are filtered with shell globs matched against the whole relative
//! path. An include pattern always wins over an exclude pattern, and excluded
//! directories are pruned before descent. Files whose leading bytes are not
//! valid UTF-8 are skipped.
//!
//! # Example
//!
//! ```no_run
//! use concater::{ConcatBuilder, TextDetection, concat_to_file};
//!
//! let options = ConcatBuilder::new(".")
//!     .exclude("target/*")
//!     .include("target/keep.txt")
//!     .text_detection(TextDetection::Accurate)
//!     .build();
//!
//! let summary = concat_to_file(&options, "snapshot.txt").expect("Failed to write snapshot");
//! println!("{} files written", summary.files_written);
//! ```

mod classify;
mod engine;
mod error;
mod matcher;
mod options;
pub mod output;
mod types;

pub use classify::{PREFIX_LEN, PrefixClassifier, TextClassifier};
pub use engine::{concat, concat_to_file, concat_with};
pub use error::ConcatError;
pub use matcher::{PathMatcher, relative_path};
pub use options::{
    ConcatBuilder, ConcatOptions, DEFAULT_EXCLUDE_PATTERNS, DEFAULT_INCLUDE_PATTERNS,
    TextDetection,
};
pub use types::ConcatSummary;
