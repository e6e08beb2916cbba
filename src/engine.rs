use crate::classify::{PrefixClassifier, TextClassifier};
use crate::error::ConcatError;
use crate::matcher::{PathMatcher, relative_path};
use crate::options::ConcatOptions;
use crate::output::write_entry;
use crate::types::ConcatSummary;
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    /// Builds a sorted walk that prunes excluded entries before descending.
    fn new(options: &ConcatOptions, matcher: PathMatcher) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .git_ignore(options.respect_gitignore)
            .git_exclude(options.respect_gitignore)
            .require_git(false)
            .follow_links(options.follow_links)
            .max_depth(options.max_depth)
            .sort_by_file_name(|a, b| a.cmp(b));
        let root = options.root.clone();
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let rel = relative_path(&root, entry.path());
            if matcher.is_excluded(&rel) {
                tracing::debug!("excluded {}", rel);
                return false;
            }
            true
        });
        Self {
            inner: builder.build(),
        }
    }
    /// Yields regular files (or links to them), logging and skipping walk errors.
    fn into_files(self) -> impl Iterator<Item = PathBuf> {
        self.inner.filter_map(|result| match result {
            Ok(entry) if entry.depth() > 0 && entry.path().is_file() => {
                Some(entry.into_path())
            }
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("skipping unreadable entry: {}", e);
                None
            }
        })
    }
}

fn check_root(root: &Path) -> Result<(), ConcatError> {
    let metadata = fs::metadata(root).map_err(|e| ConcatError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(ConcatError::InvalidRoot(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(|e| ConcatError::io(root, e))?;
    Ok(())
}

/// Reads a whole file as UTF-8. Decode errors past the classified prefix
/// surface here as `InvalidData`.
fn read_content(path: &Path) -> Result<String, ConcatError> {
    fs::read_to_string(path).map_err(|e| ConcatError::io(path, e))
}

/// Concatenates every matched text file under `options.root` into `out`,
/// classifying with the detection method from `options`.
pub fn concat<W: Write + ?Sized>(
    options: &ConcatOptions,
    out: &mut W,
) -> Result<ConcatSummary, ConcatError> {
    let classifier = PrefixClassifier::new(options.text_detection);
    concat_with(options, &classifier, out)
}

/// Same as [`concat`] with a caller-supplied classifier.
pub fn concat_with<C, W>(
    options: &ConcatOptions,
    classifier: &C,
    out: &mut W,
) -> Result<ConcatSummary, ConcatError>
where
    C: TextClassifier + ?Sized,
    W: Write + ?Sized,
{
    run(options, classifier, out, None)
}

/// Creates (or truncates) `output` and writes the snapshot into it.
///
/// If `output` lies inside the root it is left out of its own snapshot.
pub fn concat_to_file(
    options: &ConcatOptions,
    output: impl AsRef<Path>,
) -> Result<ConcatSummary, ConcatError> {
    let output = output.as_ref();
    check_root(&options.root)?;
    let file = File::create(output).map_err(|e| ConcatError::io(output, e))?;
    let sink = fs::canonicalize(output).ok();
    let mut writer = BufWriter::new(file);
    let classifier = PrefixClassifier::new(options.text_detection);
    let summary = run(
        options,
        &classifier,
        &mut writer,
        Some(Sink {
            path: output,
            canonical: sink,
        }),
    )?;
    writer.flush().map_err(|e| ConcatError::io(output, e))?;
    Ok(summary)
}

struct Sink<'a> {
    path: &'a Path,
    canonical: Option<PathBuf>,
}
impl Sink<'_> {
    fn is(&self, candidate: &Path) -> bool {
        let Some(canonical) = &self.canonical else {
            return false;
        };
        candidate.file_name() == canonical.file_name()
            && fs::canonicalize(candidate).is_ok_and(|c| &c == canonical)
    }
}

fn run<C, W>(
    options: &ConcatOptions,
    classifier: &C,
    out: &mut W,
    sink: Option<Sink<'_>>,
) -> Result<ConcatSummary, ConcatError>
where
    C: TextClassifier + ?Sized,
    W: Write + ?Sized,
{
    tracing::debug!("Starting concat with root: {}", options.root.display());
    check_root(&options.root)?;
    let matcher = PathMatcher::new(&options.exclude_patterns[..], &options.include_patterns[..])?;
    let out_label = sink
        .as_ref()
        .map_or_else(|| PathBuf::from("<output>"), |s| s.path.to_path_buf());
    let mut summary = ConcatSummary::default();
    for path in Walker::new(options, matcher).into_files() {
        if sink.as_ref().is_some_and(|s| s.is(&path)) {
            tracing::debug!("skipping output file {}", path.display());
            continue;
        }
        if !classifier.is_text(&path) {
            summary.skipped_binary += 1;
            continue;
        }
        let rel = relative_path(&options.root, &path);
        let written = match read_content(&path) {
            Ok(content) => write_entry(out, &rel, Some(content.as_bytes())),
            Err(e) => {
                tracing::warn!("failed to read {}: {}", path.display(), e);
                summary.read_failures += 1;
                write_entry(out, &rel, None)
            }
        };
        written.map_err(|e| ConcatError::io(&out_label, e))?;
        summary.files_written += 1;
    }
    tracing::info!(
        "wrote {} files ({} binary skipped, {} read failures)",
        summary.files_written,
        summary.skipped_binary,
        summary.read_failures
    );
    Ok(summary)
}
