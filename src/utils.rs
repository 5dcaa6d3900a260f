/*!
 * Utility functions for dumptxt
 */

use once_cell::sync::Lazy;

use crate::config::Config;
use crate::scanner::Scanner;
use crate::types::TraversalEntry;

/// Image extensions excluded by default, compared case-sensitively
pub static DEFAULT_EXCLUDED_EXTENSIONS: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec![".png", ".jpg", ".jpeg", ".gif", ".bmp", ".svg"]);

/// File names skipped by default
pub static DEFAULT_EXCLUDED_FILE_NAMES: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["package-lock.json"]);

/// Directory names pruned by default, at any depth
pub static DEFAULT_PRUNED_DIR_NAMES: Lazy<Vec<&'static str>> = Lazy::new(|| vec!["node_modules"]);

/// File name of the output when none is given, placed inside the source directory
pub const DEFAULT_OUTPUT_NAME: &str = "codigo.txt";

/// Count the files a run would concatenate, for progress tracking
pub fn count_files(config: &Config) -> u64 {
    let scanner = Scanner::new(config.clone()).quiet();
    let count = scanner.entries().filter(TraversalEntry::is_file).count();
    count as u64
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Normalize a user-supplied extension so it carries its leading dot
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim();
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

/// Extension of a file name: the substring from the last `.` onward.
///
/// A leading dot alone does not start an extension, so `.png` and `.bashrc`
/// have none while `archive.tar.gz` yields `.gz`.
pub fn extension_of(file_name: &str) -> Option<&str> {
    let stem_start = file_name.len() - file_name.trim_start_matches('.').len();
    let rest = &file_name[stem_start..];
    rest.rfind('.').map(|idx| &rest[idx..])
}
