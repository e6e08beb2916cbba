use crate::options::TextDetection;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected when deciding whether a file is text.
pub const PREFIX_LEN: usize = 1024;

/// Decides whether a file's content can be emitted as text.
///
/// Implementations must not fail: anything that prevents a verdict
/// (missing file, permission error, directory) counts as "not text".
pub trait TextClassifier {
    fn is_text(&self, path: &Path) -> bool;
}

/// Classifies by decoding a bounded prefix of the file.
///
/// A file that is valid in its first [`PREFIX_LEN`] bytes but invalid later
/// still passes; the writer deals with that when it reads the whole file.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixClassifier {
    detection: TextDetection,
}

impl PrefixClassifier {
    pub fn new(detection: TextDetection) -> Self {
        Self { detection }
    }
}

impl TextClassifier for PrefixClassifier {
    fn is_text(&self, path: &Path) -> bool {
        let prefix = match read_prefix(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!("cannot inspect {}: {}", path.display(), e);
                return false;
            }
        };
        if !is_utf8_prefix(&prefix) {
            tracing::debug!("not UTF-8, skipping {}", path.display());
            return false;
        }
        match self.detection {
            TextDetection::Utf8 => true,
            TextDetection::Accurate => content_inspector::inspect(&prefix).is_text(),
        }
    }
}

/// Reads the window plus enough bytes to finish a character straddling it.
fn read_prefix(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut prefix = Vec::with_capacity(PREFIX_LEN + 3);
    file.take((PREFIX_LEN + 3) as u64).read_to_end(&mut prefix)?;
    Ok(prefix)
}

/// Strict UTF-8 check. Only a character that starts before the window edge
/// must be complete; anything after it is left to the full read.
fn is_utf8_prefix(bytes: &[u8]) -> bool {
    match std::str::from_utf8(bytes) {
        Ok(_) => true,
        Err(e) => e.valid_up_to() >= PREFIX_LEN,
    }
}
