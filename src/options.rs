use crate::error::ConcatError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Exclude patterns applied when no configuration overrides them.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    "*.tmp",
    "*.log",
    "*.css",
    "*.js",
    ".venv/*",
    ".git/*",
    "*__pycache__*",
    ".idea/*",
    "uploads/*",
    "build/*",
    "vendor/*",
];

/// Include patterns that win over [`DEFAULT_EXCLUDE_PATTERNS`].
pub const DEFAULT_INCLUDE_PATTERNS: &[&str] = &["assets/css/main.css"];

/// How a file is judged to be text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDetection {
    /// Strict UTF-8 decode of the leading bytes.
    #[default]
    Utf8,
    /// UTF-8 decode plus `content_inspector`, which also rejects NUL bytes.
    Accurate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcatOptions {
    pub root: PathBuf,
    pub exclude_patterns: Vec<String>,
    pub include_patterns: Vec<String>,
    pub text_detection: TextDetection,
    pub respect_gitignore: bool,
    pub follow_links: bool,
    pub max_depth: Option<usize>,
}
impl Default for ConcatOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            exclude_patterns: DEFAULT_EXCLUDE_PATTERNS.iter().map(|p| p.to_string()).collect(),
            include_patterns: DEFAULT_INCLUDE_PATTERNS.iter().map(|p| p.to_string()).collect(),
            text_detection: TextDetection::Utf8,
            respect_gitignore: false,
            follow_links: false,
            max_depth: None,
        }
    }
}
impl ConcatOptions {
    /// Loads options from a JSON file. Keys that are absent keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConcatError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ConcatError::io(path, e))?;
        serde_json::from_str(&raw).map_err(|source| ConcatError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Default)]
pub struct ConcatBuilder {
    options: ConcatOptions,
}
impl ConcatBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ConcatOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn from_options(options: ConcatOptions) -> Self {
        Self { options }
    }
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.options.root = root.into();
        self
    }
    /// Drops the built-in exclude and include lists.
    pub fn no_default_patterns(mut self) -> Self {
        self.options.exclude_patterns.clear();
        self.options.include_patterns.clear();
        self
    }
    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.exclude_patterns = patterns;
        self
    }
    pub fn include_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.include_patterns = patterns;
        self
    }
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.options.exclude_patterns.push(pattern.into());
        self
    }
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.options.include_patterns.push(pattern.into());
        self
    }
    pub fn text_detection(mut self, method: TextDetection) -> Self {
        self.options.text_detection = method;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn build(self) -> ConcatOptions {
        self.options
    }
}
