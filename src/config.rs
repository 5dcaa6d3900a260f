/*!
 * Configuration handling for dumptxt
 */

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

use crate::error::{DumpTxtError, Result};
use crate::utils::{
    normalize_extension, DEFAULT_EXCLUDED_EXTENSIONS, DEFAULT_EXCLUDED_FILE_NAMES,
    DEFAULT_OUTPUT_NAME, DEFAULT_PRUNED_DIR_NAMES,
};

/// What to do when a file cannot be read as text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ErrorPolicy {
    /// Stop the whole run at the first unreadable file (default)
    #[default]
    Abort,
    /// Log a warning, leave the file out and keep going
    Skip,
}

/// Command-line arguments for dumptxt
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "dumptxt",
    version = env!("CARGO_PKG_VERSION"),
    about = "Concatenate the text files of a directory tree into a single file",
    long_about = "Walks a directory tree and writes the content of every text file into one output file, each prefixed with a header naming its path. Dependency folders, lockfiles and images are left out."
)]
pub struct Args {
    /// Source directory to process
    #[clap(default_value = ".")]
    pub source_dir: String,

    /// Output file (defaults to codigo.txt inside the source directory)
    pub output_file: Option<String>,

    /// Comma-separated extensions to exclude, replacing the default image set
    #[clap(long, value_delimiter = ',')]
    pub exclude_extensions: Option<Vec<String>>,

    /// Comma-separated extensions to exclude in addition to the default set
    #[clap(long, value_delimiter = ',')]
    pub extra_extensions: Vec<String>,

    /// Comma-separated file names to skip, replacing the default lockfile
    #[clap(long, value_delimiter = ',')]
    pub exclude_files: Option<Vec<String>>,

    /// Comma-separated file names to skip in addition to the defaults
    #[clap(long, value_delimiter = ',')]
    pub extra_files: Vec<String>,

    /// Comma-separated directory names to prune, replacing the default node_modules
    #[clap(long, value_delimiter = ',')]
    pub prune_dirs: Option<Vec<String>>,

    /// Comma-separated directory names to prune in addition to the defaults
    #[clap(long, value_delimiter = ',')]
    pub extra_dirs: Vec<String>,

    /// What to do with files that cannot be read as UTF-8 text
    #[clap(long, value_enum, default_value_t = ErrorPolicy::default())]
    pub on_error: ErrorPolicy,

    /// Hide the progress bar and the summary report
    #[clap(long, short)]
    pub quiet: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory to scan
    pub source_dir: PathBuf,

    /// Destination file, created or truncated on each run
    pub output_file: PathBuf,

    /// Extensions (with leading dot, case-sensitive) whose files are skipped
    pub excluded_extensions: BTreeSet<String>,

    /// Exact file names to skip; directories with these names are still walked
    pub excluded_file_names: BTreeSet<String>,

    /// Exact directory names whose subtree is never visited; files with these names are kept
    pub pruned_dir_names: BTreeSet<String>,

    /// Handling of files that cannot be read as text
    pub error_policy: ErrorPolicy,
}

impl Config {
    /// Create a configuration for `source_dir` with the default exclusions
    /// and the output at `<source_dir>/codigo.txt`
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        let source_dir = source_dir.into();
        Self {
            output_file: source_dir.join(DEFAULT_OUTPUT_NAME),
            source_dir,
            excluded_extensions: DEFAULT_EXCLUDED_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            excluded_file_names: DEFAULT_EXCLUDED_FILE_NAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            pruned_dir_names: DEFAULT_PRUNED_DIR_NAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            error_policy: ErrorPolicy::default(),
        }
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let mut config = Self::new(&args.source_dir);

        if let Some(output) = args.output_file {
            config.output_file = PathBuf::from(output);
        }
        if let Some(exts) = args.exclude_extensions {
            config.excluded_extensions = exts
                .iter()
                .filter(|e| !e.trim().is_empty())
                .map(|e| normalize_extension(e))
                .collect();
        }
        config.excluded_extensions.extend(
            args.extra_extensions
                .iter()
                .filter(|e| !e.trim().is_empty())
                .map(|e| normalize_extension(e)),
        );
        if let Some(names) = args.exclude_files {
            config.excluded_file_names = names.into_iter().filter(|n| !n.is_empty()).collect();
        }
        config
            .excluded_file_names
            .extend(args.extra_files.into_iter().filter(|n| !n.is_empty()));
        if let Some(names) = args.prune_dirs {
            config.pruned_dir_names = names.into_iter().filter(|n| !n.is_empty()).collect();
        }
        config
            .pruned_dir_names
            .extend(args.extra_dirs.into_iter().filter(|n| !n.is_empty()));
        config.error_policy = args.on_error;

        config
    }

    /// Set the output file
    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = path.into();
        self
    }

    /// Set the error policy
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Add an extension to the exclusion set
    pub fn exclude_extension(mut self, ext: &str) -> Self {
        self.excluded_extensions.insert(normalize_extension(ext));
        self
    }

    /// Add a file name to skip
    pub fn exclude_file_name(mut self, name: impl Into<String>) -> Self {
        self.excluded_file_names.insert(name.into());
        self
    }

    /// Add a directory name to prune
    pub fn prune_dir_name(mut self, name: impl Into<String>) -> Self {
        self.pruned_dir_names.insert(name.into());
        self
    }

    /// Whether a file with this name is skipped
    pub fn is_excluded_file_name(&self, name: &str) -> bool {
        self.excluded_file_names.contains(name)
    }

    /// Whether a directory with this name is pruned
    pub fn is_pruned_dir_name(&self, name: &str) -> bool {
        self.pruned_dir_names.contains(name)
    }

    /// Whether an extension (with leading dot) is excluded
    pub fn is_excluded_extension(&self, ext: &str) -> bool {
        self.excluded_extensions.contains(ext)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // The source must be a directory we can actually list
        if !self.source_dir.is_dir() || fs::read_dir(&self.source_dir).is_err() {
            return Err(DumpTxtError::MissingSource {
                path: self.source_dir.clone(),
            });
        }

        // Check if output file directory exists
        if let Some(parent) = self.output_file.parent() {
            crate::ensure!(
                parent == Path::new("") || parent.is_dir(),
                Config,
                "Output directory not found: {}",
                parent.display()
            );
        }

        crate::ensure!(
            !self.output_file.is_dir(),
            Config,
            "Output path is a directory: {}",
            self.output_file.display()
        );

        Ok(())
    }
}
