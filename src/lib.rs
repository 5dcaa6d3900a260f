/*!
 * dumptxt - Concatenate the text files of a directory tree into one file
 *
 * Every qualifying file below a source directory is written to a single
 * output file as a block: a header line naming its path, the file content,
 * and a blank separator line.
 */

pub mod concat;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use concat::{concatenate, Concatenator, RunStatistics};
pub use config::{Config, ErrorPolicy};
pub use error::{DumpTxtError, Result};
pub use report::{FileReportInfo, ReportFormat, Reporter, ScanReport};
pub use scanner::Scanner;
pub use types::{EntryKind, ExcludeReason, TraversalEntry};
pub use utils::{count_files, format_file_size};
pub use writer::ConcatWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
