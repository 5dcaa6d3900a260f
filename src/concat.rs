/*!
 * The directory concatenator: walks the source tree and writes one block per
 * qualifying file into the output
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indicatif::ProgressBar;
use tracing::{debug, info, warn};

use crate::config::{Config, ErrorPolicy};
use crate::error::{DumpTxtError, Result};
use crate::report::FileReportInfo;
use crate::scanner::Scanner;
use crate::types::EntryKind;
use crate::writer::ConcatWriter;

/// Statistics gathered during one run
#[derive(Debug, Clone, Default)]
pub struct RunStatistics {
    /// Number of files written to the output
    pub files_written: usize,
    /// Number of files left out by name, extension or for being the output
    pub files_excluded: usize,
    /// Number of directories visited, the source root included
    pub directories_visited: usize,
    /// Files skipped because they could not be read as text, with the reason
    pub unreadable_files: Vec<(PathBuf, String)>,
    /// Total number of lines written from file contents
    pub total_lines: usize,
    /// Size of the output in bytes, headers and separators included
    pub bytes_written: u64,
    /// Details for each written file, in output order
    pub file_details: Vec<(String, FileReportInfo)>,
}

impl RunStatistics {
    fn record_file(&mut self, path: &Path, content: &str) {
        let lines = content.lines().count();
        self.files_written += 1;
        self.total_lines += lines;
        self.file_details.push((
            path.display().to_string(),
            FileReportInfo {
                lines,
                bytes: content.len() as u64,
            },
        ));
    }
}

/// Concatenates the text files below a source directory into one output file
pub struct Concatenator {
    /// Run configuration
    config: Config,
    /// Progress bar, advanced once per file read
    progress: Arc<ProgressBar>,
}

impl Concatenator {
    /// Create a new concatenator
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Run the concatenation.
    ///
    /// The source is validated before anything is created. The output is then
    /// truncated before the first directory is listed, so stale output inside
    /// the tree is never read back. Under [`ErrorPolicy::Abort`] the first
    /// unreadable file ends the run, leaving the blocks written so far in
    /// place.
    pub fn run(&self) -> Result<RunStatistics> {
        self.config.validate()?;

        info!(
            source = %self.config.source_dir.display(),
            output = %self.config.output_file.display(),
            policy = ?self.config.error_policy,
            "Starting concatenation"
        );

        let mut writer = ConcatWriter::create(&self.config.output_file)?;
        let scanner = Scanner::new(self.config.clone());
        let mut stats = RunStatistics::default();

        for entry in scanner.entries() {
            if entry.kind == EntryKind::Directory {
                stats.directories_visited += 1;
                continue;
            }

            if let Some(reason) = entry.exclusion {
                debug!(path = %entry.path().display(), ?reason, "Excluding file");
                stats.files_excluded += 1;
                continue;
            }

            self.progress.inc(1);
            self.progress
                .set_message(format!("Current file: {}", display_name(entry.path())));

            match read_text(entry.path()) {
                Ok(content) => {
                    writer.write_block(entry.path(), &content)?;
                    stats.record_file(entry.path(), &content);
                }
                Err(e)
                    if e.is_unreadable_file() && self.config.error_policy == ErrorPolicy::Skip =>
                {
                    warn!(path = %entry.path().display(), error = %e, "Skipping unreadable file");
                    stats
                        .unreadable_files
                        .push((entry.path().to_path_buf(), e.to_string()));
                }
                Err(e) => return Err(e),
            }
        }

        stats.bytes_written = writer.bytes_written();
        writer.finish()?;

        info!(
            files = stats.files_written,
            excluded = stats.files_excluded,
            skipped = stats.unreadable_files.len(),
            bytes = stats.bytes_written,
            "Concatenation complete"
        );

        Ok(stats)
    }
}

/// Concatenate with a hidden progress bar
pub fn concatenate(config: &Config) -> Result<RunStatistics> {
    Concatenator::new(config.clone(), Arc::new(ProgressBar::hidden())).run()
}

/// Read a whole file and decode it as UTF-8
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| DumpTxtError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|source| DumpTxtError::InvalidEncoding {
        path: path.to_path_buf(),
        source,
    })
}

// Truncate long names to keep the progress line on one row
fn display_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let chars = file_name.chars().count();
    if chars > 40 {
        let tail: String = file_name.chars().skip(chars - 37).collect();
        format!("...{}", tail)
    } else {
        file_name
    }
}
