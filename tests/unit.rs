use concater::{
    ConcatBuilder, ConcatError, ConcatOptions, DEFAULT_EXCLUDE_PATTERNS, DEFAULT_INCLUDE_PATTERNS,
    PathMatcher, TextDetection, concat,
};
use std::fs;
use tempfile::tempdir;
#[test]
fn test_defaults_carry_builtin_patterns() {
    let options = ConcatOptions::default();
    assert_eq!(options.exclude_patterns.len(), DEFAULT_EXCLUDE_PATTERNS.len());
    assert_eq!(options.include_patterns, vec!["assets/css/main.css".to_string()]);
    assert_eq!(options.text_detection, TextDetection::Utf8);
    assert!(!options.respect_gitignore);
    assert!(!options.follow_links);
    assert_eq!(options.max_depth, None);
}
#[test]
fn test_builder_appends_after_clearing() {
    let options = ConcatBuilder::new("/src")
        .no_default_patterns()
        .exclude("*.bak")
        .include("keep.bak")
        .build();
    assert_eq!(options.exclude_patterns, vec!["*.bak".to_string()]);
    assert_eq!(options.include_patterns, vec!["keep.bak".to_string()]);
    assert_eq!(options.root, std::path::PathBuf::from("/src"));
}
#[test]
fn test_config_file_fills_missing_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("concater.json");
    fs::write(
        &path,
        r#"{ "exclude_patterns": ["*.md"], "text_detection": "accurate" }"#,
    )
    .unwrap();
    let options = ConcatOptions::from_json_file(&path).unwrap();
    assert_eq!(options.exclude_patterns, vec!["*.md".to_string()]);
    assert_eq!(options.include_patterns.len(), DEFAULT_INCLUDE_PATTERNS.len());
    assert_eq!(options.text_detection, TextDetection::Accurate);
}
#[test]
fn test_bad_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    let err = ConcatOptions::from_json_file(&path).unwrap_err();
    assert!(matches!(err, ConcatError::Config { .. }));
    let err = ConcatOptions::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConcatError::Io { .. }));
}
#[test]
fn test_invalid_pattern_fails_the_run() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    let options = ConcatBuilder::new(dir.path()).exclude("[oops").build();
    let mut out = Vec::new();
    let err = concat(&options, &mut out).unwrap_err();
    assert!(matches!(err, ConcatError::Pattern { .. }));
    assert!(out.is_empty());
}
#[test]
fn test_effective_exclude_property() {
    let matcher = PathMatcher::new(DEFAULT_EXCLUDE_PATTERNS, DEFAULT_INCLUDE_PATTERNS).unwrap();
    let paths = [
        "a.txt",
        "a.log",
        "assets/css/main.css",
        "assets/css/theme.css",
        ".git/HEAD",
        "src/.git/HEAD",
        "pkg/__pycache__/x.pyc",
        "uploads/photo.txt",
        "app.js",
        "notes.tmp",
    ];
    for p in paths {
        assert_eq!(
            matcher.is_excluded(p),
            matcher.should_exclude(p) && !matcher.should_include(p),
            "{p}"
        );
    }
    assert!(!matcher.is_excluded("src/.git/HEAD"));
    assert!(matcher.is_excluded(".git/HEAD"));
}
#[test]
fn test_max_depth_limits_descent() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("one/two")).unwrap();
    fs::write(dir.path().join("top.txt"), "t").unwrap();
    fs::write(dir.path().join("one/mid.txt"), "m").unwrap();
    fs::write(dir.path().join("one/two/low.txt"), "l").unwrap();
    let options = ConcatBuilder::new(dir.path()).max_depth(2).build();
    let mut out = Vec::new();
    concat(&options, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("`top.txt`"));
    assert!(out.contains("`one/mid.txt`"));
    assert!(!out.contains("low.txt"));
}
#[test]
fn test_accurate_detection_skips_nul_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("nul.txt"), b"a\0b").unwrap();
    let mut out = Vec::new();
    let summary = concat(
        &ConcatBuilder::new(dir.path())
            .text_detection(TextDetection::Accurate)
            .build(),
        &mut out,
    )
    .unwrap();
    assert!(out.is_empty());
    assert_eq!(summary.skipped_binary, 1);
}
