/*!
 * Directory traversal and exclusion checks
 */

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::types::{EntryKind, ExcludeReason, TraversalEntry};
use crate::utils::extension_of;

/// Scanner for directory contents
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Canonical path of the output file, if it already exists
    output_file: Option<PathBuf>,
    /// Report walk errors at debug level instead of warn
    quiet: bool,
}

impl Scanner {
    /// Create a new scanner.
    ///
    /// The output file is resolved here, so a scanner created after the
    /// output has been opened will never hand it back as an input.
    pub fn new(config: Config) -> Self {
        let output_file = fs::canonicalize(&config.output_file).ok();
        Self {
            config,
            output_file,
            quiet: false,
        }
    }

    /// Lower walk error logging to debug, for walks that repeat another one
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Walk the source directory.
    ///
    /// Entries come depth-first; within a directory, files precede
    /// subdirectories and each group is in file name order. Directories
    /// named in the pruned set are never descended into. Files are yielded
    /// with their exclusion decision attached.
    pub fn entries(&self) -> impl Iterator<Item = TraversalEntry> + '_ {
        WalkDir::new(&self.config.source_dir)
            .follow_links(false)
            .sort_by(files_first)
            .into_iter()
            .filter_entry(move |e| !self.is_pruned(e))
            .filter_map(move |res| match res {
                Ok(entry) => Some(entry),
                Err(e) if self.quiet => {
                    debug!(error = %e, "Skipping unreadable directory entry");
                    None
                }
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable directory entry");
                    None
                }
            })
            .filter_map(move |entry| self.classify(&entry))
    }

    /// Check if a directory must be pruned from the walk
    pub fn is_pruned(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }

        let pruned = self
            .config
            .is_pruned_dir_name(&entry.file_name().to_string_lossy());
        if pruned {
            debug!(path = %entry.path().display(), "Pruning directory");
        }
        pruned
    }

    /// Decide why, if at all, a file must be left out of the output
    pub fn exclusion_reason(&self, path: &Path) -> Option<ExcludeReason> {
        let file_name = path.file_name().unwrap_or_default().to_string_lossy();

        if self.config.is_excluded_file_name(&file_name) {
            return Some(ExcludeReason::Name);
        }

        if extension_of(&file_name).is_some_and(|ext| self.config.is_excluded_extension(ext)) {
            return Some(ExcludeReason::Extension);
        }

        // Don't process the output file itself
        if let Some(output) = &self.output_file {
            if fs::canonicalize(path).is_ok_and(|p| &p == output) {
                return Some(ExcludeReason::OutputFile);
            }
        }

        None
    }

    /// Turn a walk entry into a traversal entry, dropping anything that is
    /// neither a directory nor a readable regular file
    fn classify(&self, entry: &DirEntry) -> Option<TraversalEntry> {
        let file_type = entry.file_type();

        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_symlink() {
            match fs::metadata(entry.path()) {
                Ok(meta) if meta.is_file() => EntryKind::File,
                Ok(meta) if meta.is_dir() => EntryKind::Directory,
                _ => {
                    debug!(path = %entry.path().display(), "Ignoring dangling or special symlink");
                    return None;
                }
            }
        } else {
            debug!(path = %entry.path().display(), "Ignoring special file");
            return None;
        };

        let exclusion = match kind {
            EntryKind::File => self.exclusion_reason(entry.path()),
            EntryKind::Directory => None,
        };

        Some(TraversalEntry {
            path: entry.path().to_path_buf(),
            kind,
            depth: entry.depth(),
            exclusion,
        })
    }
}

/// Sibling order: non-directories before directories, then by file name
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
