//! Snapshot wire format.
//!
//! Every emitted file becomes one entry:
//!
//! ```text
//! ### begin `<relative/path>` ###
//! <verbatim content>
//! ### end `<relative/path>` ###
//!
//! ```
//!
//! The newline before the end marker is always written, so content that
//! already ends in a newline leaves a blank line before the marker.

use std::io::{self, Write};

pub fn begin_marker(rel: &str) -> String {
    format!("### begin `{}` ###\n", rel)
}

pub fn end_marker(rel: &str) -> String {
    format!("\n### end `{}` ###\n\n", rel)
}

/// Writes one complete entry. `None` content still produces a well-formed
/// entry with an empty body.
pub fn write_entry<W: Write + ?Sized>(
    out: &mut W,
    rel: &str,
    content: Option<&[u8]>,
) -> io::Result<()> {
    out.write_all(begin_marker(rel).as_bytes())?;
    if let Some(bytes) = content {
        out.write_all(bytes)?;
    }
    out.write_all(end_marker(rel).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_layout() {
        let mut buf = Vec::new();
        write_entry(&mut buf, "src/lib.rs", Some(b"fn x() {}")).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "### begin `src/lib.rs` ###\nfn x() {}\n### end `src/lib.rs` ###\n\n"
        );
    }

    #[test]
    fn empty_body() {
        let mut buf = Vec::new();
        write_entry(&mut buf, "e.txt", None).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "### begin `e.txt` ###\n\n### end `e.txt` ###\n\n"
        );
    }
}
