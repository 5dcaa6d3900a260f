/*!
 * Core types and data structures for the dumptxt application
 */

use std::path::{Path, PathBuf};

/// Kind of filesystem entry seen during traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file, or a symlink resolving to one
    File,
    /// Directory (symlinked directories are reported but never descended)
    Directory,
}

/// Why a file was left out of the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExcludeReason {
    /// File name is one of the excluded names
    Name,
    /// File extension is in the exclusion set
    Extension,
    /// File is the output file of the current run
    OutputFile,
}

/// One visited filesystem entry and its filtering decision
#[derive(Debug, Clone)]
pub struct TraversalEntry {
    /// Source root joined with the path relative to it
    pub path: PathBuf,
    /// Entry kind
    pub kind: EntryKind,
    /// Depth below the source root (the root itself is 0)
    pub depth: usize,
    /// Set when the entry is a file that must not be concatenated
    pub exclusion: Option<ExcludeReason>,
}

impl TraversalEntry {
    /// Path used both to read the file and in its block header
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether this entry is a file whose content belongs in the output
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File && self.exclusion.is_none()
    }
}
