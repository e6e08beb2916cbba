//! Command-line interface for concater.
//!
//! Flattens a directory tree into one delimited text file. With only the two
//! positional arguments it applies the built-in exclude/include lists.

use clap::Parser;
use concater::{ConcatBuilder, ConcatOptions, TextDetection, concat_to_file};
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::EnvFilter;

/// concater — concatenate a source tree into a single snapshot file
#[derive(Parser)]
#[command(name = "concater", version, about, long_about = None)]
struct Cli {
    /// Root directory to traverse
    root: PathBuf,

    /// File to (over)write with the concatenated result
    output: PathBuf,

    /// Extra exclude pattern (can be repeated)
    #[arg(short = 'e', long = "exclude")]
    exclude_patterns: Vec<String>,

    /// Extra include pattern that overrides excludes (can be repeated)
    #[arg(short = 'i', long = "include")]
    include_patterns: Vec<String>,

    /// Start from empty pattern lists instead of the built-in ones
    #[arg(long)]
    no_default_patterns: bool,

    /// JSON file with options; flags are applied on top of it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Text detection strategy
    #[arg(long, value_parser = parse_text_detection)]
    text_detection: Option<TextDetection>,

    /// Respect .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Follow symlinked directories
    #[arg(long)]
    follow_links: bool,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Parse string into TextDetection enum.
fn parse_text_detection(s: &str) -> Result<TextDetection, String> {
    match s {
        "utf8" => Ok(TextDetection::Utf8),
        "accurate" => Ok(TextDetection::Accurate),
        _ => Err(format!("invalid text detection method: {}", s)),
    }
}

impl Cli {
    fn into_options(self) -> Result<(ConcatOptions, PathBuf), concater::ConcatError> {
        let base = match &self.config {
            Some(path) => ConcatOptions::from_json_file(path)?,
            None => ConcatOptions::default(),
        };
        let mut builder = ConcatBuilder::from_options(base).root(self.root);
        if self.no_default_patterns {
            builder = builder.no_default_patterns();
        }
        for pattern in self.exclude_patterns {
            builder = builder.exclude(pattern);
        }
        for pattern in self.include_patterns {
            builder = builder.include(pattern);
        }
        if let Some(method) = self.text_detection {
            builder = builder.text_detection(method);
        }
        if self.gitignore {
            builder = builder.respect_gitignore(true);
        }
        if self.follow_links {
            builder = builder.follow_links(true);
        }
        if let Some(depth) = self.max_depth {
            builder = builder.max_depth(depth);
        }
        Ok((builder.build(), self.output))
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (options, output) = match cli.into_options() {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    if let Err(e) = concat_to_file(&options, &output) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
