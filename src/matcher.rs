//! Exclude/include decisions over root-relative paths.
//!
//! Patterns are shell globs compared against the whole relative path, so
//! `build/*` matches `build/out.txt` and `build/deep/out.txt` but not
//! `src/build/out.txt`. `*` crosses `/`, `?` matches one character and
//! `[...]` is a character class. There is no recursive `**` form and no
//! `{a,b}` alternation: `**` behaves like `*` and braces are literal.

use crate::error::ConcatError;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::{Component, Path};

#[derive(Debug, Clone)]
pub struct PathMatcher {
    exclude: GlobSet,
    include: GlobSet,
}

impl PathMatcher {
    /// Compiles both pattern sets. Any malformed pattern fails the whole build.
    pub fn new<S: AsRef<str>>(exclude: &[S], include: &[S]) -> Result<Self, ConcatError> {
        Ok(Self {
            exclude: compile(exclude)?,
            include: compile(include)?,
        })
    }

    /// True if `rel` matches any exclude pattern.
    pub fn should_exclude(&self, rel: &str) -> bool {
        self.exclude.is_match(rel)
    }

    /// True if `rel` matches any include pattern.
    pub fn should_include(&self, rel: &str) -> bool {
        self.include.is_match(rel)
    }

    /// The effective decision: excluded and not rescued by an include.
    pub fn is_excluded(&self, rel: &str) -> bool {
        self.should_exclude(rel) && !self.should_include(rel)
    }
}

fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet, ConcatError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let glob = GlobBuilder::new(&flatten_pattern(pattern))
            .literal_separator(false)
            .backslash_escape(false)
            .build()
            .map_err(|source| ConcatError::Pattern {
                pattern: pattern.to_string(),
                source,
            })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| ConcatError::Pattern {
        pattern: patterns
            .iter()
            .map(|p| p.as_ref())
            .collect::<Vec<_>>()
            .join(", "),
        source,
    })
}

/// Rewrites a pattern so globset treats it as a flat whole-string glob.
fn flatten_pattern(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => {
                if !out.ends_with('*') {
                    out.push('*');
                }
                i += 1;
            }
            '{' | '}' => {
                out.push('[');
                out.push(chars[i]);
                out.push(']');
                i += 1;
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    push_class(&mut out, &chars[i + 1..end]);
                    i = end + 1;
                }
                None => {
                    out.extend(&chars[i..]);
                    break;
                }
            },
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

/// Index of the `]` closing the class opened at `start`. A `]` right after
/// the opening (or after `!`) is a member, not the terminator.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    chars[j.min(chars.len())..]
        .iter()
        .position(|&c| c == ']')
        .map(|offset| j + offset)
}

/// Emits a class body. Only `!` negates; a leading `^` is a plain member, so
/// it is moved away from the position where globset reads it as negation.
fn push_class(out: &mut String, body: &[char]) {
    let (negated, members) = match body.split_first() {
        Some(('!', rest)) => (true, rest),
        _ => (false, body),
    };
    if !negated && members.first() == Some(&'^') {
        if members.len() == 1 {
            out.push('^');
            return;
        }
        out.push('[');
        out.extend(&members[1..]);
        out.push_str("^]");
        return;
    }
    out.push('[');
    if negated {
        out.push('!');
    }
    out.extend(members);
    out.push(']');
}

/// Normalizes `path` relative to `root` into a `/`-separated string.
///
/// The root itself becomes `"."`.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}
